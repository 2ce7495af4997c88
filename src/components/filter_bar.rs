//! Filter Bar Component
//!
//! Renders the filter controls a report declares and binds them to the
//! shared filter signals. Selects apply on change; the date range and
//! the Refresh button apply on submit.

use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::filters::FilterSet;
use crate::report::{FilterField, ReportKind};
use crate::store::{use_app_store, AppStateStoreFields};

const COST_TYPES: &[(&str, &str)] = &[
    ("", "All Types"),
    ("labor", "Labor"),
    ("contractor", "Contractor"),
    ("overhead", "Overhead"),
];

const METRICS: &[(&str, &str)] = &[
    ("time", "Time Efficiency"),
    ("cost", "Cost Efficiency"),
    ("resource", "Resource Efficiency"),
];

const CATEGORIES: &[(&str, &str)] = &[
    ("", "All Categories"),
    ("meetings", "Meetings"),
    ("support", "Support"),
    ("admin", "Administrative"),
    ("other", "Other"),
];

/// One signal per filter control; a report only reads the ones it shows
#[derive(Clone, Copy)]
pub struct FilterSignals {
    pub date_range: RwSignal<String>,
    pub team_id: RwSignal<String>,
    pub project_id: RwSignal<String>,
    pub cost_type: RwSignal<String>,
    pub metric: RwSignal<String>,
    pub category: RwSignal<String>,
}

impl FilterSignals {
    /// Defaults: current month for the date range, everything else unset
    pub fn new() -> Self {
        let today = Utc::now().date_naive();
        let first = today.with_day(1).unwrap_or(today);
        let range = format!("{} - {}", first.format("%Y-%m-%d"), today.format("%Y-%m-%d"));
        Self {
            date_range: RwSignal::new(range),
            team_id: RwSignal::new(String::new()),
            project_id: RwSignal::new(String::new()),
            cost_type: RwSignal::new(String::new()),
            metric: RwSignal::new("time".to_string()),
            category: RwSignal::new(String::new()),
        }
    }

    /// Current values of the controls this report declares, empty ones
    /// omitted. Reads are reactive, so callers inside an effect re-run
    /// when a filter changes.
    pub fn to_filter_set(&self, kind: ReportKind) -> FilterSet {
        let mut filters = FilterSet::new();
        for field in kind.filters() {
            match field {
                FilterField::DateRange => filters.push("date_range", self.date_range.get()),
                FilterField::Team => filters.push("team_id", self.team_id.get()),
                FilterField::Project => filters.push("project_id", self.project_id.get()),
                FilterField::CostType => filters.push("cost_type", self.cost_type.get()),
                FilterField::Metric => filters.push("metric", self.metric.get()),
                FilterField::Category => filters.push("category", self.category.get()),
            }
        }
        filters
    }
}

fn static_select(
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
    value: RwSignal<String>,
) -> AnyView {
    view! {
        <label class="filter-field">
            {label}
            <select
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {options
                    .iter()
                    .map(|(option_value, option_label)| {
                        view! { <option value=*option_value>{*option_label}</option> }
                    })
                    .collect_view()}
            </select>
        </label>
    }
    .into_any()
}

#[component]
pub fn FilterBar(
    kind: ReportKind,
    filters: FilterSignals,
    #[prop(into)] on_refresh: Callback<()>,
) -> impl IntoView {
    let store = use_app_store();

    view! {
        <form
            class="filter-bar"
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                on_refresh.run(());
            }
        >
            {kind
                .filters()
                .iter()
                .map(|field| match field {
                    FilterField::DateRange => {
                        view! {
                            <label class="filter-field">
                                "Date Range"
                                <input
                                    type="text"
                                    class="form-control"
                                    placeholder="YYYY-MM-DD - YYYY-MM-DD"
                                    prop:value=move || filters.date_range.get()
                                    on:change=move |ev| {
                                        filters.date_range.set(event_target_value(&ev))
                                    }
                                />
                            </label>
                        }
                            .into_any()
                    }
                    FilterField::Team => {
                        view! {
                            <label class="filter-field">
                                "Team"
                                <select
                                    prop:value=move || filters.team_id.get()
                                    on:change=move |ev| filters.team_id.set(event_target_value(&ev))
                                >
                                    <option value="">"All Teams"</option>
                                    {move || {
                                        store
                                            .teams()
                                            .get()
                                            .into_iter()
                                            .map(|team| {
                                                view! {
                                                    <option value=team.id.to_string()>
                                                        {team.name.clone()}
                                                    </option>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </select>
                            </label>
                        }
                            .into_any()
                    }
                    FilterField::Project => {
                        view! {
                            <label class="filter-field">
                                "Project"
                                <select
                                    prop:value=move || filters.project_id.get()
                                    on:change=move |ev| {
                                        filters.project_id.set(event_target_value(&ev))
                                    }
                                >
                                    <option value="">"All Projects"</option>
                                    {move || {
                                        store
                                            .projects()
                                            .get()
                                            .into_iter()
                                            .map(|project| {
                                                view! {
                                                    <option value=project.id.to_string()>
                                                        {project.name.clone()}
                                                    </option>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </select>
                            </label>
                        }
                            .into_any()
                    }
                    FilterField::CostType => {
                        static_select("Cost Type", COST_TYPES, filters.cost_type)
                    }
                    FilterField::Metric => static_select("Metric", METRICS, filters.metric),
                    FilterField::Category => {
                        static_select("Category", CATEGORIES, filters.category)
                    }
                })
                .collect_view()}
            <button type="submit" class="btn btn-primary">"Refresh"</button>
        </form>
    }
}
