//! Section Tab Bar Component
//!
//! Top-level navigation between the admin sections.

use leptos::prelude::*;

/// Admin sections, one per tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Reports,
    Roles,
    Users,
    Teams,
    Projects,
    Portfolios,
    Worklogs,
    Jira,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Reports,
        Section::Roles,
        Section::Users,
        Section::Teams,
        Section::Projects,
        Section::Portfolios,
        Section::Worklogs,
        Section::Jira,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Reports => "Reports",
            Section::Roles => "Roles",
            Section::Users => "Users",
            Section::Teams => "Teams",
            Section::Projects => "Projects",
            Section::Portfolios => "Portfolios",
            Section::Worklogs => "Worklogs",
            Section::Jira => "JIRA",
        }
    }
}

#[component]
pub fn SectionTabBar(
    current: ReadSignal<Section>,
    set_current: WriteSignal<Section>,
) -> impl IntoView {
    view! {
        <nav class="section-tab-bar">
            {Section::ALL
                .iter()
                .map(|section| {
                    let section = *section;
                    let is_active = move || current.get() == section;
                    view! {
                        <button
                            class=move || {
                                if is_active() { "section-tab active" } else { "section-tab" }
                            }
                            on:click=move |_| set_current.set(section)
                        >
                            {section.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
