//! Summary Cards Component
//!
//! The aggregate scalars above a report, one card per declared key.
//! Missing keys render a dash rather than hiding the card.

use std::collections::HashMap;

use leptos::prelude::*;
use serde_json::Value;

use crate::report::{format_summary_value, SummaryCard};

#[component]
pub fn SummaryCards(
    cards: &'static [SummaryCard],
    #[prop(into)] summary: Signal<HashMap<String, Value>>,
) -> impl IntoView {
    view! {
        <div class="summary-cards">
            {cards
                .iter()
                .map(|card| {
                    let key = card.key;
                    let format = card.format;
                    view! {
                        <div class="summary-card">
                            <span class="summary-label">{card.label}</span>
                            <span class="summary-value">
                                {move || {
                                    summary
                                        .with(|s| {
                                            s.get(key)
                                                .map(|value| format_summary_value(value, format))
                                                .unwrap_or_else(|| "—".to_string())
                                        })
                                }}
                            </span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
