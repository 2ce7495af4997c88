//! Report Table Component
//!
//! Clears and re-renders every row on refresh, no diffing. Row objects
//! are opaque JSON maps; cells are picked by column key and formatted
//! per column.

use std::collections::HashMap;

use leptos::prelude::*;
use serde_json::Value;

use crate::format::{
    badge_class, format_currency, format_hours, format_percent, progress_label, progress_width,
    status_label, utilization_class, value_number, value_text,
};
use crate::report::{CellFormat, Column};

#[component]
pub fn ReportTable(
    columns: &'static [Column],
    #[prop(into)] rows: Signal<Vec<HashMap<String, Value>>>,
) -> impl IntoView {
    view! {
        <table class="table report-table">
            <thead>
                <tr>
                    {columns
                        .iter()
                        .map(|column| view! { <th>{column.label}</th> })
                        .collect_view()}
                </tr>
            </thead>
            <tbody>
                {move || {
                    let rows = rows.get();
                    if rows.is_empty() {
                        view! {
                            <tr class="table-empty">
                                <td colspan=columns.len().to_string()>"No data available"</td>
                            </tr>
                        }
                            .into_any()
                    } else {
                        rows.into_iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        {columns
                                            .iter()
                                            .map(|column| cell_view(column, &row))
                                            .collect_view()}
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </tbody>
        </table>
    }
}

fn cell_view(column: &Column, row: &HashMap<String, Value>) -> AnyView {
    let value = row.get(column.key).cloned().unwrap_or(Value::Null);
    match column.format {
        CellFormat::Text => view! { <td>{value_text(&value)}</td> }.into_any(),
        CellFormat::Number => {
            view! { <td class="text-end">{value_text(&value)}</td> }.into_any()
        }
        CellFormat::Hours => {
            view! { <td class="text-end">{format_hours(value_number(&value))}</td> }.into_any()
        }
        CellFormat::Currency => {
            view! { <td class="text-end">{format_currency(value_number(&value))}</td> }.into_any()
        }
        CellFormat::Percent => {
            view! { <td class="text-end">{format_percent(value_number(&value))}</td> }.into_any()
        }
        CellFormat::Progress => {
            // width clamps at 100%, the label keeps the real percentage
            let ratio = value_number(&value);
            let width = progress_width(ratio);
            let bar_class = format!("progress-bar bg-{}", utilization_class(ratio * 100.0));
            view! {
                <td>
                    <div class="progress">
                        <div
                            class=bar_class
                            role="progressbar"
                            style:width=format!("{width}%")
                        >
                            {progress_label(ratio)}
                        </div>
                    </div>
                </td>
            }
            .into_any()
        }
        CellFormat::Badge => {
            let text = value_text(&value);
            view! {
                <td>
                    <span class=badge_class(&text)>{status_label(&text)}</span>
                </td>
            }
            .into_any()
        }
    }
}
