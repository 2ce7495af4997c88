//! Users Panel
//!
//! User table plus the edit modal with role assignment checkboxes.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::delete_confirm_button::DeleteConfirmButton;
use crate::components::entity_modal::{field_class, EntityModal, FieldFeedback};
use crate::context::use_app_context;
use crate::models::{RoleRef, User, UserPayload};
use crate::store::{store_remove_user, store_upsert_user, use_app_store, AppStateStoreFields};

#[component]
pub fn UsersPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (show_modal, set_show_modal) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<u32>>(None);
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let display_name = RwSignal::new(String::new());
    let is_active = RwSignal::new(true);
    let role_ids = RwSignal::new(Vec::<u32>::new());
    let field_errors = RwSignal::new(HashMap::<String, Vec<String>>::new());
    let saving = RwSignal::new(false);

    let set_form = move |form: UserPayload| {
        username.set(form.username);
        email.set(form.email);
        display_name.set(form.display_name.unwrap_or_default());
        is_active.set(form.is_active);
        role_ids.set(form.roles);
        field_errors.set(HashMap::new());
    };

    let open_create = move |_| {
        set_editing_id.set(None);
        set_form(UserPayload {
            is_active: true,
            ..Default::default()
        });
        set_show_modal.set(true);
    };

    let open_edit = move |id: u32| {
        set_editing_id.set(Some(id));
        set_form(UserPayload::default());
        set_show_modal.set(true);
        spawn_local(async move {
            match api::get_user(id).await {
                Ok(user) => set_form(UserPayload::from(&user)),
                Err(err) => {
                    ctx.error(format!("Error loading user: {err}"));
                    set_show_modal.set(false);
                }
            }
        });
    };

    let save = move || {
        let display = display_name.get().trim().to_string();
        let payload = UserPayload {
            username: username.get().trim().to_string(),
            email: email.get().trim().to_string(),
            display_name: (!display.is_empty()).then_some(display),
            is_active: is_active.get(),
            roles: role_ids.get(),
        };
        if payload.username.is_empty() || payload.email.is_empty() {
            ctx.warning("Username and email are required");
            return;
        }
        let id = editing_id.get();
        saving.set(true);
        spawn_local(async move {
            match api::save_user(id, &payload).await {
                Ok(response) => {
                    saving.set(false);
                    match id.or(response.id) {
                        Some(saved_id) => {
                            let roles: Vec<RoleRef> = store
                                .roles()
                                .get_untracked()
                                .iter()
                                .filter(|role| payload.roles.contains(&role.id))
                                .map(|role| RoleRef {
                                    id: role.id,
                                    name: role.name.clone(),
                                })
                                .collect();
                            store_upsert_user(
                                &store,
                                User {
                                    id: saved_id,
                                    username: payload.username,
                                    email: payload.email,
                                    display_name: payload.display_name,
                                    is_active: payload.is_active,
                                    roles,
                                },
                            );
                        }
                        None => {
                            if let Ok(users) = api::list_users().await {
                                *store.users().write() = users;
                            }
                        }
                    }
                    ctx.success(response.message.unwrap_or_else(|| "User saved".to_string()));
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
            match api::delete_user(id).await {
                Ok(()) => {
                    store_remove_user(&store, id);
                    ctx.success("User deleted");
                }
                Err(err) => ctx.error(format!("Error deleting user: {err}")),
            }
        });
    };

    view! {
        <section class="panel users-panel">
            <header class="panel-header">
                <h2>"Users"</h2>
                <button class="btn btn-primary" on:click=open_create>"New User"</button>
            </header>

            <table class="table">
                <thead>
                    <tr>
                        <th>"Username"</th>
                        <th>"Email"</th>
                        <th>"Display Name"</th>
                        <th>"Roles"</th>
                        <th>"Active"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.users().get()
                        key=|user| user.id
                        children=move |user| {
                            let id = user.id;
                            let role_names = user
                                .roles
                                .iter()
                                .map(|r| r.name.clone())
                                .collect::<Vec<_>>()
                                .join(", ");
                            let active_badge = if user.is_active {
                                ("badge bg-success", "Active")
                            } else {
                                ("badge bg-secondary", "Inactive")
                            };
                            view! {
                                <tr>
                                    <td>{user.username.clone()}</td>
                                    <td>{user.email.clone()}</td>
                                    <td>{user.display_name.clone().unwrap_or_default()}</td>
                                    <td>{role_names}</td>
                                    <td>
                                        <span class=active_badge.0>{active_badge.1}</span>
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
                            "Edit User".to_string()
                        } else {
                            "New User".to_string()
                        }
                    })
                    saving=saving
                    on_close=Callback::new(move |_| set_show_modal.set(false))
                    on_save=Callback::new(move |_| save())
                >
                    <label class="form-label">
                        "Username"
                        <input
                            type="text"
                            class=field_class(field_errors, "username")
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        <FieldFeedback errors=field_errors field="username" />
                    </label>
                    <label class="form-label">
                        "Email"
                        <input
                            type="email"
                            class=field_class(field_errors, "email")
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <FieldFeedback errors=field_errors field="email" />
                    </label>
                    <label class="form-label">
                        "Display Name"
                        <input
                            type="text"
                            class=field_class(field_errors, "display_name")
                            prop:value=move || display_name.get()
                            on:input=move |ev| display_name.set(event_target_value(&ev))
                        />
                        <FieldFeedback errors=field_errors field="display_name" />
                    </label>
                    <label class="form-check">
                        <input
                            type="checkbox"
                            prop:checked=move || is_active.get()
                            on:change=move |ev| is_active.set(event_target_checked(&ev))
                        />
                        "Active"
                    </label>
                    <fieldset class="form-checks">
                        <legend>"Roles"</legend>
                        {move || {
                            store
                                .roles()
                                .get()
                                .into_iter()
                                .map(|role| {
                                    let role_id = role.id;
                                    view! {
                                        <label class="form-check">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || {
                                                    role_ids.get().contains(&role_id)
                                                }
                                                on:change=move |ev| {
                                                    let checked = event_target_checked(&ev);
                                                    role_ids
                                                        .update(|list| {
                                                            if checked {
                                                                if !list.contains(&role_id) {
                                                                    list.push(role_id);
                                                                }
                                                            } else {
                                                                list.retain(|id| *id != role_id);
                                                            }
                                                        });
                                                }
                                            />
                                            {role.name.clone()}
                                        </label>
                                    }
                                })
                                .collect_view()
                        }}
                    </fieldset>
                </EntityModal>
            </Show>
        </section>
    }
}
