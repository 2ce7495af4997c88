//! JIRA Panel
//!
//! Sync and connection-test triggers with an inline status area.
//! Both actions require the CSRF token up front; without it nothing is
//! sent and the user is told to refresh the page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;

#[derive(Clone, PartialEq)]
enum SyncState {
    Idle,
    Running(&'static str),
    Done { ok: bool, message: String, details: Option<String> },
}

#[component]
pub fn JiraPanel() -> impl IntoView {
    let ctx = use_app_context();
    let state = RwSignal::new(SyncState::Idle);

    let run = move |action: &'static str| {
        if api::csrf_token().is_none() {
            ctx.error("CSRF token not found. Please refresh the page.");
            return;
        }
        state.set(SyncState::Running(action));
        spawn_local(async move {
            let result = match action {
                "sync" => api::sync_jira().await,
                _ => api::test_jira_connection().await,
            };
            match result {
                Ok(status) => {
                    let message = status
                        .message
                        .unwrap_or_else(|| "JIRA operation completed".to_string());
                    ctx.success(message.clone());
                    state.set(SyncState::Done {
                        ok: true,
                        message,
                        details: status.details,
                    });
                }
                Err(err) => {
                    leptos::logging::error!("JIRA {action} failed: {err}");
                    ctx.error(err.to_string());
                    state.set(SyncState::Done {
                        ok: false,
                        message: err.to_string(),
                        details: None,
                    });
                }
            }
        });
    };

    let busy = move || matches!(state.get(), SyncState::Running(_));

    view! {
        <section class="panel jira-panel">
            <header class="panel-header">
                <h2>"JIRA Integration"</h2>
            </header>

            <div class="jira-actions">
                <button
                    class="btn btn-primary"
                    disabled=busy
                    on:click=move |_| run("sync")
                >
                    "Sync Now"
                </button>
                <button
                    class="btn btn-outline-secondary"
                    disabled=busy
                    on:click=move |_| run("test-connection")
                >
                    "Test Connection"
                </button>
            </div>

            {move || match state.get() {
                SyncState::Idle => ().into_any(),
                SyncState::Running(action) => {
                    let label = if action == "sync" {
                        "Synchronization in progress..."
                    } else {
                        "Testing connection..."
                    };
                    view! {
                        <div class="alert alert-info">
                            <span class="spinner"></span>
                            {label}
                        </div>
                    }
                        .into_any()
                }
                SyncState::Done { ok, message, details } => {
                    let class = if ok { "alert alert-success" } else { "alert alert-danger" };
                    view! {
                        <div class=class>
                            <span>{message}</span>
                            {details.map(|details| view! { <pre class="sync-details">{details}</pre> })}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
