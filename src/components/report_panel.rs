//! Report Panel Component
//!
//! The one generic filtered-report controller: filter bar, charts,
//! summary cards and details table for any `ReportKind`. Refreshes on
//! mount and whenever a filter changes; a failed refresh keeps the
//! previous view and surfaces a toast. Overlapping refreshes are
//! sequenced so only the last-issued response renders.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_charts::{BarChart, DoughnutChart, LineChart, RadarChart};

use crate::api;
use crate::components::filter_bar::{FilterBar, FilterSignals};
use crate::components::report_table::ReportTable;
use crate::components::summary_cards::SummaryCards;
use crate::context::use_app_context;
use crate::filters::DateRange;
use crate::report::{view_from_envelope, ChartKind, RefreshSequencer, ReportKind, ReportView};

#[component]
pub fn ReportPanel(kind: ReportKind) -> impl IntoView {
    let ctx = use_app_context();
    let filters = FilterSignals::new();
    let view_data = RwSignal::new(ReportView::default());
    let sequencer = StoredValue::new(RefreshSequencer::new());

    let refresh = move || {
        // Read filters first so the surrounding effect tracks them all
        let filter_set = filters.to_filter_set(kind);
        if kind.date_range_required() {
            if let Err(reason) = DateRange::parse(&filters.date_range.get()) {
                ctx.warning(format!("Select a valid date range first: {reason}"));
                return;
            }
        }
        let generation = sequencer.with_value(|s| s.begin());
        spawn_local(async move {
            match api::fetch_report(kind, &filter_set).await {
                Ok(envelope) => {
                    if !sequencer.with_value(|s| s.try_commit(generation)) {
                        leptos::logging::log!(
                            "Discarding superseded {} response",
                            kind.slug()
                        );
                        return;
                    }
                    view_data.set(view_from_envelope(kind, &envelope));
                }
                Err(err) => {
                    // stale view stays in place, no partial update
                    leptos::logging::error!("Error loading {} data: {err}", kind.title());
                    ctx.error(format!("Error loading {} data", kind.title()));
                }
            }
        });
    };

    // Load on mount and whenever a filter changes
    Effect::new(move |_| {
        refresh();
    });

    let export_buttons = api::EXPORT_FORMATS
        .iter()
        .map(|format| {
            let format = *format;
            view! {
                <button
                    type="button"
                    class="btn btn-outline-secondary"
                    on:click=move |_| {
                        api::trigger_export(kind, &filters.to_filter_set(kind), format)
                    }
                >
                    {format!("Export {}", format.label())}
                </button>
            }
        })
        .collect_view();

    let charts = kind
        .charts()
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            let data = Signal::derive(move || {
                view_data.with(|v| v.charts.get(index).cloned().unwrap_or_default())
            });
            let chart = match slot.kind {
                ChartKind::Line => view! { <LineChart data=data /> }.into_any(),
                ChartKind::Bar => view! { <BarChart data=data /> }.into_any(),
                ChartKind::Doughnut => view! { <DoughnutChart data=data /> }.into_any(),
                ChartKind::Radar => view! { <RadarChart data=data /> }.into_any(),
            };
            view! {
                <div class="chart-slot">
                    <h3 class="chart-title">{slot.title}</h3>
                    {chart}
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="report-panel">
            <header class="report-header">
                <h2>{kind.title()} " Report"</h2>
                <div class="export-buttons">{export_buttons}</div>
            </header>

            <FilterBar kind=kind filters=filters on_refresh=Callback::new(move |_| refresh()) />

            {(!kind.summary_cards().is_empty())
                .then(|| {
                    view! {
                        <SummaryCards
                            cards=kind.summary_cards()
                            summary=Signal::derive(move || view_data.with(|v| v.summary.clone()))
                        />
                    }
                })}

            <div class="chart-grid">{charts}</div>

            <ReportTable
                columns=kind.columns()
                rows=Signal::derive(move || view_data.with(|v| v.rows.clone()))
            />
        </section>
    }
}
