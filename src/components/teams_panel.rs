//! Teams Panel
//!
//! Team table plus the create/edit modal: leader select and member
//! checkboxes. A team must have a leader if it has members.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::delete_confirm_button::DeleteConfirmButton;
use crate::components::entity_modal::{field_class, EntityModal, FieldFeedback};
use crate::context::use_app_context;
use crate::models::{Team, TeamPayload};
use crate::store::{store_remove_team, store_upsert_team, use_app_store, AppStateStoreFields};
use crate::validate::validate_team;

#[component]
pub fn TeamsPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (show_modal, set_show_modal) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<u32>>(None);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let leader = RwSignal::new(String::new());
    let member_ids = RwSignal::new(Vec::<u32>::new());
    let field_errors = RwSignal::new(HashMap::<String, Vec<String>>::new());
    let saving = RwSignal::new(false);

    let set_form = move |form: TeamPayload| {
        name.set(form.name);
        description.set(form.description);
        leader.set(form.leader_id.map(|id| id.to_string()).unwrap_or_default());
        member_ids.set(form.member_ids);
        field_errors.set(HashMap::new());
    };

    let open_create = move |_| {
        set_editing_id.set(None);
        set_form(TeamPayload::default());
        set_show_modal.set(true);
    };

    let open_edit = move |id: u32| {
        set_editing_id.set(Some(id));
        set_form(TeamPayload::default());
        set_show_modal.set(true);
        spawn_local(async move {
            match api::get_team(id).await {
                Ok(team) => set_form(TeamPayload::from(&team)),
                Err(err) => {
                    ctx.error(format!("Error loading team: {err}"));
                    set_show_modal.set(false);
                }
            }
        });
    };

    let save = move || {
        let payload = TeamPayload {
            name: name.get().trim().to_string(),
            description: description.get().trim().to_string(),
            leader_id: leader.get().parse().ok(),
            member_ids: member_ids.get(),
        };
        if let Err(err) = validate_team(&payload) {
            ctx.warning(err.to_string());
            return;
        }
        let id = editing_id.get();
        saving.set(true);
        spawn_local(async move {
            match api::save_team(id, &payload).await {
                Ok(response) => {
                    saving.set(false);
                    match id.or(response.id) {
                        Some(saved_id) => store_upsert_team(
                            &store,
                            Team {
                                id: saved_id,
                                name: payload.name,
                                description: payload.description,
                                leader_id: payload.leader_id,
                                member_ids: payload.member_ids,
                            },
                        ),
                        None => {
                            if let Ok(teams) = api::list_teams().await {
                                *store.teams().write() = teams;
                            }
                        }
                    }
                    ctx.success(response.message.unwrap_or_else(|| "Team saved".to_string()));
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
            match api::delete_team(id).await {
                Ok(()) => {
                    store_remove_team(&store, id);
                    ctx.success("Team deleted");
                }
                Err(err) => ctx.error(format!("Error deleting team: {err}")),
            }
        });
    };

    let user_label = move |id: u32| {
        store.users().with(|users| {
            users
                .iter()
                .find(|user| user.id == id)
                .map(|user| user.username.clone())
                .unwrap_or_else(|| format!("#{id}"))
        })
    };

    view! {
        <section class="panel teams-panel">
            <header class="panel-header">
                <h2>"Teams"</h2>
                <button class="btn btn-primary" on:click=open_create>"New Team"</button>
            </header>

            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Leader"</th>
                        <th>"Members"</th>
                        <th>"Description"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.teams().get()
                        key=|team| team.id
                        children=move |team| {
                            let id = team.id;
                            let leader_id = team.leader_id;
                            let members = team.member_ids.len();
                            view! {
                                <tr>
                                    <td>{team.name.clone()}</td>
                                    <td>
                                        {move || {
                                            leader_id.map(user_label).unwrap_or_else(|| "—".to_string())
                                        }}
                                    </td>
                                    <td>
                                        <span class="badge bg-secondary">{members} " members"</span>
                                    </td>
                                    <td>{team.description.clone()}</td>
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
                            "Edit Team".to_string()
                        } else {
                            "New Team".to_string()
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
                        "Leader"
                        <select
                            class=field_class(field_errors, "leader")
                            prop:value=move || leader.get()
                            on:change=move |ev| leader.set(event_target_value(&ev))
                        >
                            <option value="">"No leader"</option>
                            {move || {
                                store
                                    .users()
                                    .get()
                                    .into_iter()
                                    .map(|user| {
                                        view! {
                                            <option value=user.id.to_string()>
                                                {user.username.clone()}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                        <FieldFeedback errors=field_errors field="leader" />
                    </label>
                    <fieldset class="form-checks">
                        <legend>"Members"</legend>
                        {move || {
                            store
                                .users()
                                .get()
                                .into_iter()
                                .map(|user| {
                                    let user_id = user.id;
                                    view! {
                                        <label class="form-check">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || {
                                                    member_ids.get().contains(&user_id)
                                                }
                                                on:change=move |ev| {
                                                    let checked = event_target_checked(&ev);
                                                    member_ids
                                                        .update(|list| {
                                                            if checked {
                                                                if !list.contains(&user_id) {
                                                                    list.push(user_id);
                                                                }
                                                            } else {
                                                                list.retain(|id| *id != user_id);
                                                            }
                                                        });
                                                }
                                            />
                                            {user.username.clone()}
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
