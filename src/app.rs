//! Admin App Shell
//!
//! Root component: provides the context and store, installs the global
//! error handlers, loads the shared entity collections, and switches
//! between the admin sections.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{
    JiraPanel, PortfoliosPanel, ProjectsPanel, ReportPanel, RolesPanel, Section, SectionTabBar,
    TeamsPanel, ToastHost, UsersPanel, WorklogsPanel,
};
use crate::context::AppContext;
use crate::report::ReportKind;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    let store = Store::new(AppState::default());
    provide_context(ctx);
    provide_context(store);

    api::install_global_handlers(move |message| ctx.error(message));

    let (section, set_section) = signal(Section::Reports);
    let (report_kind, set_report_kind) = signal(ReportKind::Workload);

    // Load the shared collections once; panels patch them in place
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_roles().await {
                Ok(roles) => *store.roles().write() = roles,
                Err(err) => leptos::logging::warn!("Failed to load roles: {err}"),
            }
            match api::list_users().await {
                Ok(users) => *store.users().write() = users,
                Err(err) => leptos::logging::warn!("Failed to load users: {err}"),
            }
            match api::list_teams().await {
                Ok(teams) => *store.teams().write() = teams,
                Err(err) => leptos::logging::warn!("Failed to load teams: {err}"),
            }
            match api::list_projects().await {
                Ok(projects) => *store.projects().write() = projects,
                Err(err) => leptos::logging::warn!("Failed to load projects: {err}"),
            }
            match api::list_portfolios().await {
                Ok(portfolios) => *store.portfolios().write() = portfolios,
                Err(err) => leptos::logging::warn!("Failed to load portfolios: {err}"),
            }
            match api::list_worklogs().await {
                Ok(worklogs) => *store.worklogs().write() = worklogs,
                Err(err) => leptos::logging::warn!("Failed to load worklogs: {err}"),
            }
        });
    });

    view! {
        <div class="admin-app">
            <SectionTabBar current=section set_current=set_section />

            <main class="admin-content">
                {move || match section.get() {
                    Section::Reports => {
                        view! {
                            <div class="reports-section">
                                <nav class="report-tab-bar">
                                    {ReportKind::ALL
                                        .iter()
                                        .map(|kind| {
                                            let kind = *kind;
                                            let is_active = move || report_kind.get() == kind;
                                            view! {
                                                <button
                                                    class=move || {
                                                        if is_active() {
                                                            "report-tab active"
                                                        } else {
                                                            "report-tab"
                                                        }
                                                    }
                                                    on:click=move |_| set_report_kind.set(kind)
                                                >
                                                    {kind.title()}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </nav>
                                {move || {
                                    let kind = report_kind.get();
                                    view! { <ReportPanel kind=kind /> }
                                }}
                            </div>
                        }
                            .into_any()
                    }
                    Section::Roles => view! { <RolesPanel /> }.into_any(),
                    Section::Users => view! { <UsersPanel /> }.into_any(),
                    Section::Teams => view! { <TeamsPanel /> }.into_any(),
                    Section::Projects => view! { <ProjectsPanel /> }.into_any(),
                    Section::Portfolios => view! { <PortfoliosPanel /> }.into_any(),
                    Section::Worklogs => view! { <WorklogsPanel /> }.into_any(),
                    Section::Jira => view! { <JiraPanel /> }.into_any(),
                }}
            </main>

            <ToastHost />
        </div>
    }
}
