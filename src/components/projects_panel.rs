//! Projects Panel
//!
//! Project table plus the create/edit modal with date-order validation.

use std::collections::HashMap;

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::delete_confirm_button::DeleteConfirmButton;
use crate::components::entity_modal::{field_class, EntityModal, FieldFeedback};
use crate::context::use_app_context;
use crate::format::{badge_class, status_label};
use crate::models::{Project, ProjectPayload};
use crate::store::{
    store_remove_project, store_upsert_project, use_app_store, AppStateStoreFields,
};
use crate::validate::validate_project_dates;

const STATUSES: &[&str] = &["active", "on_hold", "completed", "cancelled"];

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn date_string(value: Option<NaiveDate>) -> String {
    value
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[component]
pub fn ProjectsPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (show_modal, set_show_modal) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<u32>>(None);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let status = RwSignal::new("active".to_string());
    let team = RwSignal::new(String::new());
    let field_errors = RwSignal::new(HashMap::<String, Vec<String>>::new());
    let saving = RwSignal::new(false);

    let set_form = move |form: ProjectPayload| {
        name.set(form.name);
        description.set(form.description);
        start_date.set(date_string(form.start_date));
        end_date.set(date_string(form.end_date));
        status.set(if form.status.is_empty() {
            "active".to_string()
        } else {
            form.status
        });
        team.set(form.team_id.map(|id| id.to_string()).unwrap_or_default());
        field_errors.set(HashMap::new());
    };

    let open_create = move |_| {
        set_editing_id.set(None);
        set_form(ProjectPayload::default());
        set_show_modal.set(true);
    };

    let open_edit = move |id: u32| {
        set_editing_id.set(Some(id));
        set_form(ProjectPayload::default());
        set_show_modal.set(true);
        spawn_local(async move {
            match api::get_project(id).await {
                Ok(project) => set_form(ProjectPayload::from(&project)),
                Err(err) => {
                    ctx.error(format!("Error loading project: {err}"));
                    set_show_modal.set(false);
                }
            }
        });
    };

    let save = move || {
        let payload = ProjectPayload {
            name: name.get().trim().to_string(),
            description: description.get().trim().to_string(),
            start_date: parse_date(&start_date.get()),
            end_date: parse_date(&end_date.get()),
            status: status.get(),
            team_id: team.get().parse().ok(),
        };
        if payload.name.is_empty() {
            ctx.warning("Project name is required");
            return;
        }
        if let Err(err) = validate_project_dates(payload.start_date, payload.end_date) {
            ctx.warning(err.to_string());
            return;
        }
        let id = editing_id.get();
        saving.set(true);
        spawn_local(async move {
            match api::save_project(id, &payload).await {
                Ok(response) => {
                    saving.set(false);
                    match id.or(response.id) {
                        Some(saved_id) => store_upsert_project(
                            &store,
                            Project {
                                id: saved_id,
                                name: payload.name,
                                description: payload.description,
                                start_date: payload.start_date,
                                end_date: payload.end_date,
                                status: payload.status,
                                team_id: payload.team_id,
                            },
                        ),
                        None => {
                            if let Ok(projects) = api::list_projects().await {
                                *store.projects().write() = projects;
                            }
                        }
                    }
                    ctx.success(
                        response
                            .message
                            .unwrap_or_else(|| "Project saved".to_string()),
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
            match api::delete_project(id).await {
                Ok(()) => {
                    store_remove_project(&store, id);
                    ctx.success("Project deleted");
                }
                Err(err) => ctx.error(format!("Error deleting project: {err}")),
            }
        });
    };

    let team_label = move |id: u32| {
        store.teams().with(|teams| {
            teams
                .iter()
                .find(|team| team.id == id)
                .map(|team| team.name.clone())
                .unwrap_or_else(|| format!("#{id}"))
        })
    };

    view! {
        <section class="panel projects-panel">
            <header class="panel-header">
                <h2>"Projects"</h2>
                <button class="btn btn-primary" on:click=open_create>"New Project"</button>
            </header>

            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Status"</th>
                        <th>"Start"</th>
                        <th>"End"</th>
                        <th>"Team"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.projects().get()
                        key=|project| project.id
                        children=move |project| {
                            let id = project.id;
                            let team_id = project.team_id;
                            view! {
                                <tr>
                                    <td>{project.name.clone()}</td>
                                    <td>
                                        <span class=badge_class(&project.status)>
                                            {status_label(&project.status)}
                                        </span>
                                    </td>
                                    <td>{date_string(project.start_date)}</td>
                                    <td>{date_string(project.end_date)}</td>
                                    <td>
                                        {move || {
                                            team_id.map(team_label).unwrap_or_else(|| "—".to_string())
                                        }}
                                    </td>
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
                            "Edit Project".to_string()
                        } else {
                            "New Project".to_string()
                        }
                    })
                    saving=saving
                    on_close=Callback::new(move |_| set_show_modal.set(false))
                    on_save=Callback::new(move |_| save())
                >
                    <label class="form-label">
                        "Name"
                        <input
                            type="text"
                            class=field_class(field_errors, "name")
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                        <FieldFeedback errors=field_errors field="name" />
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
                    <label class="form-label">
                        "Start Date"
                        <input
                            type="date"
                            class=field_class(field_errors, "start_date")
                            prop:value=move || start_date.get()
                            on:change=move |ev| start_date.set(event_target_value(&ev))
                        />
                        <FieldFeedback errors=field_errors field="start_date" />
                    </label>
                    <label class="form-label">
                        "End Date"
                        <input
                            type="date"
                            class=field_class(field_errors, "end_date")
                            prop:value=move || end_date.get()
                            on:change=move |ev| end_date.set(event_target_value(&ev))
                        />
                        <FieldFeedback errors=field_errors field="end_date" />
                    </label>
                    <label class="form-label">
                        "Status"
                        <select
                            prop:value=move || status.get()
                            on:change=move |ev| status.set(event_target_value(&ev))
                        >
                            {STATUSES
                                .iter()
                                .map(|value| {
                                    view! { <option value=*value>{status_label(value)}</option> }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="form-label">
                        "Team"
                        <select
                            prop:value=move || team.get()
                            on:change=move |ev| team.set(event_target_value(&ev))
                        >
                            <option value="">"No team"</option>
                            {move || {
                                store
                                    .teams()
                                    .get()
                                    .into_iter()
                                    .map(|team_entity| {
                                        view! {
                                            <option value=team_entity.id.to_string()>
                                                {team_entity.name.clone()}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </label>
                </EntityModal>
            </Show>
        </section>
    }
}
