//! Roles Panel
//!
//! Role table plus the create/edit modal with permission checkboxes.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::delete_confirm_button::DeleteConfirmButton;
use crate::components::entity_modal::{field_class, EntityModal, FieldFeedback};
use crate::context::use_app_context;
use crate::format::status_label;
use crate::models::{Role, RolePayload};
use crate::store::{store_remove_role, store_upsert_role, use_app_store, AppStateStoreFields};

/// Grantable permissions shown as checkboxes
const PERMISSIONS: &[&str] = &[
    "view_reports",
    "export_data",
    "manage_users",
    "manage_teams",
    "manage_projects",
    "manage_portfolios",
    "admin",
];

#[component]
pub fn RolesPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (show_modal, set_show_modal) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<u32>>(None);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let permissions = RwSignal::new(Vec::<String>::new());
    let field_errors = RwSignal::new(HashMap::<String, Vec<String>>::new());
    let saving = RwSignal::new(false);

    let set_form = move |form: RolePayload| {
        name.set(form.name);
        description.set(form.description);
        permissions.set(form.permissions);
        field_errors.set(HashMap::new());
    };

    let open_create = move |_| {
        set_editing_id.set(None);
        set_form(RolePayload::default());
        set_show_modal.set(true);
    };

    let open_edit = move |id: u32| {
        set_editing_id.set(Some(id));
        set_form(RolePayload::default());
        set_show_modal.set(true);
        spawn_local(async move {
            match api::get_role(id).await {
                Ok(role) => set_form(RolePayload::from(&role)),
                Err(err) => {
                    ctx.error(format!("Error loading role: {err}"));
                    set_show_modal.set(false);
                }
            }
        });
    };

    let save = move || {
        let payload = RolePayload {
            name: name.get().trim().to_string(),
            description: description.get().trim().to_string(),
            permissions: permissions.get(),
        };
        if payload.name.is_empty() {
            ctx.warning("Role name is required");
            return;
        }
        let id = editing_id.get();
        saving.set(true);
        spawn_local(async move {
            match api::save_role(id, &payload).await {
                Ok(response) => {
                    saving.set(false);
                    match id.or(response.id) {
                        Some(saved_id) => store_upsert_role(
                            &store,
                            Role {
                                id: saved_id,
                                name: payload.name,
                                description: payload.description,
                                permissions: payload.permissions,
                            },
                        ),
                        // no id in the response: fall back to a list reload
                        None => {
                            if let Ok(roles) = api::list_roles().await {
                                *store.roles().write() = roles;
                            }
                        }
                    }
                    ctx.success(response.message.unwrap_or_else(|| "Role saved".to_string()));
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
            match api::delete_role(id).await {
                Ok(()) => {
                    store_remove_role(&store, id);
                    ctx.success("Role deleted");
                }
                Err(err) => ctx.error(format!("Error deleting role: {err}")),
            }
        });
    };

    view! {
        <section class="panel roles-panel">
            <header class="panel-header">
                <h2>"Roles"</h2>
                <button class="btn btn-primary" on:click=open_create>"New Role"</button>
            </header>

            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Description"</th>
                        <th>"Permissions"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.roles().get()
                        key=|role| role.id
                        children=move |role| {
                            let id = role.id;
                            view! {
                                <tr>
                                    <td>{role.name.clone()}</td>
                                    <td>{role.description.clone()}</td>
                                    <td>
                                        <span class="badge bg-secondary">
                                            {role.permissions.len()} " permissions"
                                        </span>
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
                            "Edit Role".to_string()
                        } else {
                            "New Role".to_string()
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
                    <fieldset class="form-checks">
                        <legend>"Permissions"</legend>
                        {PERMISSIONS
                            .iter()
                            .map(|permission| {
                                let permission = *permission;
                                view! {
                                    <label class="form-check">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || {
                                                permissions.get().iter().any(|p| p == permission)
                                            }
                                            on:change=move |ev| {
                                                let checked = event_target_checked(&ev);
                                                permissions
                                                    .update(|list| {
                                                        if checked {
                                                            if !list.iter().any(|p| p == permission) {
                                                                list.push(permission.to_string());
                                                            }
                                                        } else {
                                                            list.retain(|p| p != permission);
                                                        }
                                                    });
                                            }
                                        />
                                        {status_label(permission)}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </fieldset>
                </EntityModal>
            </Show>
        </section>
    }
}
