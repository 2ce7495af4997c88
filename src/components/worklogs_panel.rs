//! Worklogs Panel
//!
//! Worklog table plus the create/edit modal. Hours are bounded to
//! (0, 24] client-side; the server still has the final word.

use std::collections::HashMap;

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::delete_confirm_button::DeleteConfirmButton;
use crate::components::entity_modal::{field_class, EntityModal, FieldFeedback};
use crate::context::use_app_context;
use crate::format::format_hours;
use crate::models::{Worklog, WorklogPayload};
use crate::store::{
    store_remove_worklog, store_upsert_worklog, use_app_store, AppStateStoreFields,
};
use crate::validate::validate_worklog;

#[component]
pub fn WorklogsPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (show_modal, set_show_modal) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<u32>>(None);
    let user = RwSignal::new(String::new());
    let project = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let hours = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let field_errors = RwSignal::new(HashMap::<String, Vec<String>>::new());
    let saving = RwSignal::new(false);

    let set_form = move |form: WorklogPayload| {
        user.set(form.user_id.map(|id| id.to_string()).unwrap_or_default());
        project.set(form.project_id.map(|id| id.to_string()).unwrap_or_default());
        date.set(
            form.date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        );
        hours.set(if form.hours > 0.0 {
            format!("{}", form.hours)
        } else {
            String::new()
        });
        description.set(form.description);
        field_errors.set(HashMap::new());
    };

    let open_create = move |_| {
        set_editing_id.set(None);
        set_form(WorklogPayload::default());
        set_show_modal.set(true);
    };

    let open_edit = move |id: u32| {
        set_editing_id.set(Some(id));
        set_form(WorklogPayload::default());
        set_show_modal.set(true);
        spawn_local(async move {
            match api::get_worklog(id).await {
                Ok(worklog) => set_form(WorklogPayload::from(&worklog)),
                Err(err) => {
                    ctx.error(format!("Error loading worklog: {err}"));
                    set_show_modal.set(false);
                }
            }
        });
    };

    let save = move || {
        let payload = WorklogPayload {
            user_id: user.get().parse().ok(),
            project_id: project.get().parse().ok(),
            date: NaiveDate::parse_from_str(date.get().trim(), "%Y-%m-%d").ok(),
            hours: hours.get().trim().parse().unwrap_or(0.0),
            description: description.get().trim().to_string(),
        };
        if let Err(err) = validate_worklog(&payload) {
            ctx.warning(err.to_string());
            return;
        }
        let id = editing_id.get();
        saving.set(true);
        spawn_local(async move {
            match api::save_worklog(id, &payload).await {
                Ok(response) => {
                    saving.set(false);
                    // the validator guarantees these are present
                    match (id.or(response.id), payload.user_id, payload.project_id, payload.date) {
                        (Some(saved_id), Some(user_id), Some(project_id), Some(log_date)) => {
                            store_upsert_worklog(
                                &store,
                                Worklog {
                                    id: saved_id,
                                    user_id,
                                    project_id,
                                    date: log_date,
                                    hours: payload.hours,
                                    description: payload.description,
                                },
                            )
                        }
                        _ => {
                            if let Ok(worklogs) = api::list_worklogs().await {
                                *store.worklogs().write() = worklogs;
                            }
                        }
                    }
                    ctx.success(
                        response
                            .message
                            .unwrap_or_else(|| "Worklog saved".to_string()),
                    );
                    set_show_modal.set(false);
                }
                Err(api::ApiError::Http {
                    message,
                    field_errors: errors,
                    ..
                }) if !errors.is_empty() => {
                    saving.set(false);
                    field_errors.set(errors);
                    ctx.error(message);
                }
                Err(err) => {
                    saving.set(false);
                    ctx.error(err.to_string());
                }
            }
        });
    };

    let remove = move |id: u32| {
        spawn_local(async move {
            match api::delete_worklog(id).await {
                Ok(()) => {
                    store_remove_worklog(&store, id);
                    ctx.success("Worklog deleted");
                }
                Err(err) => ctx.error(format!("Error deleting worklog: {err}")),
            }
        });
    };

    let user_label = move |id: u32| {
        store.users().with(|users| {
            users
                .iter()
                .find(|u| u.id == id)
                .map(|u| u.username.clone())
                .unwrap_or_else(|| format!("#{id}"))
        })
    };

    let project_label = move |id: u32| {
        store.projects().with(|projects| {
            projects
                .iter()
                .find(|p| p.id == id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| format!("#{id}"))
        })
    };

    view! {
        <section class="panel worklogs-panel">
            <header class="panel-header">
                <h2>"Worklogs"</h2>
                <button class="btn btn-primary" on:click=open_create>"New Worklog"</button>
            </header>

            <table class="table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"User"</th>
                        <th>"Project"</th>
                        <th>"Hours"</th>
                        <th>"Description"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.worklogs().get()
                        key=|worklog| worklog.id
                        children=move |worklog| {
                            let id = worklog.id;
                            let user_id = worklog.user_id;
                            let project_id = worklog.project_id;
                            view! {
                                <tr>
                                    <td>{worklog.date.format("%Y-%m-%d").to_string()}</td>
                                    <td>{move || user_label(user_id)}</td>
                                    <td>{move || project_label(project_id)}</td>
                                    <td class="text-end">{format_hours(worklog.hours)}</td>
                                    <td>{worklog.description.clone()}</td>
                                    <td class="row-actions">
                                        <button
                                            class="btn btn-sm btn-outline-primary"
                                            on:click=move |_| open_edit(id)
                                        >
                                            "Edit"
                                        </button>
                                        <DeleteConfirmButton on_confirm=Callback::new(move |_| {
                                            remove(id)
                                        }) />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || show_modal.get()>
                <EntityModal
                    title=Signal::derive(move || {
                        if editing_id.get().is_some() {
                            "Edit Worklog".to_string()
                        } else {
                            "New Worklog".to_string()
                        }
                    })
                    saving=saving
                    on_close=Callback::new(move |_| set_show_modal.set(false))
                    on_save=Callback::new(move |_| save())
                >
                    <label class="form-label">
                        "User"
                        <select
                            class=field_class(field_errors, "user_id")
                            prop:value=move || user.get()
                            on:change=move |ev| user.set(event_target_value(&ev))
                        >
                            <option value="">"Select user"</option>
                            {move || {
                                store
                                    .users()
                                    .get()
                                    .into_iter()
                                    .map(|u| {
                                        view! {
                                            <option value=u.id.to_string()>
                                                {u.username.clone()}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                        <FieldFeedback errors=field_errors field="user_id" />
                    </label>
                    <label class="form-label">
                        "Project"
                        <select
                            class=field_class(field_errors, "project_id")
                            prop:value=move || project.get()
                            on:change=move |ev| project.set(event_target_value(&ev))
                        >
                            <option value="">"Select project"</option>
                            {move || {
                                store
                                    .projects()
                                    .get()
                                    .into_iter()
                                    .map(|p| {
                                        view! {
                                            <option value=p.id.to_string()>{p.name.clone()}</option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                        <FieldFeedback errors=field_errors field="project_id" />
                    </label>
                    <label class="form-label">
                        "Date"
                        <input
                            type="date"
                            class=field_class(field_errors, "date")
                            prop:value=move || date.get()
                            on:change=move |ev| date.set(event_target_value(&ev))
                        />
                        <FieldFeedback errors=field_errors field="date" />
                    </label>
                    <label class="form-label">
                        "Hours"
                        <input
                            type="number"
                            step="0.25"
                            min="0"
                            max="24"
                            class=field_class(field_errors, "hours")
                            prop:value=move || hours.get()
                            on:input=move |ev| hours.set(event_target_value(&ev))
                        />
                        <FieldFeedback errors=field_errors field="hours" />
                    </label>
                    <label class="form-label">
                        "Description"
                        <input
                            type="text"
                            class=field_class(field_errors, "description")
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        />
                        <FieldFeedback errors=field_errors field="description" />
                    </label>
                </EntityModal>
            </Show>
        </section>
    }
}
