//! Portfolios Panel
//!
//! Portfolio table plus the create/edit modal: manager select and
//! project checkboxes. A portfolio must have a manager if it contains
//! projects.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::delete_confirm_button::DeleteConfirmButton;
use crate::components::entity_modal::{field_class, EntityModal, FieldFeedback};
use crate::context::use_app_context;
use crate::models::{Portfolio, PortfolioPayload};
use crate::store::{
    store_remove_portfolio, store_upsert_portfolio, use_app_store, AppStateStoreFields,
};
use crate::validate::validate_portfolio;

#[component]
pub fn PortfoliosPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (show_modal, set_show_modal) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<u32>>(None);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let manager = RwSignal::new(String::new());
    let project_ids = RwSignal::new(Vec::<u32>::new());
    let field_errors = RwSignal::new(HashMap::<String, Vec<String>>::new());
    let saving = RwSignal::new(false);

    let set_form = move |form: PortfolioPayload| {
        name.set(form.name);
        description.set(form.description);
        manager.set(form.manager_id.map(|id| id.to_string()).unwrap_or_default());
        project_ids.set(form.project_ids);
        field_errors.set(HashMap::new());
    };

    let open_create = move |_| {
        set_editing_id.set(None);
        set_form(PortfolioPayload::default());
        set_show_modal.set(true);
    };

    let open_edit = move |id: u32| {
        set_editing_id.set(Some(id));
        set_form(PortfolioPayload::default());
        set_show_modal.set(true);
        spawn_local(async move {
            match api::get_portfolio(id).await {
                Ok(portfolio) => set_form(PortfolioPayload::from(&portfolio)),
                Err(err) => {
                    ctx.error(format!("Error loading portfolio: {err}"));
                    set_show_modal.set(false);
                }
            }
        });
    };

    let save = move || {
        let payload = PortfolioPayload {
            name: name.get().trim().to_string(),
            description: description.get().trim().to_string(),
            manager_id: manager.get().parse().ok(),
            project_ids: project_ids.get(),
        };
        if let Err(err) = validate_portfolio(&payload) {
            ctx.warning(err.to_string());
            return;
        }
        let id = editing_id.get();
        saving.set(true);
        spawn_local(async move {
            match api::save_portfolio(id, &payload).await {
                Ok(response) => {
                    saving.set(false);
                    match id.or(response.id) {
                        Some(saved_id) => store_upsert_portfolio(
                            &store,
                            Portfolio {
                                id: saved_id,
                                name: payload.name,
                                description: payload.description,
                                manager_id: payload.manager_id,
                                project_ids: payload.project_ids,
                            },
                        ),
                        None => {
                            if let Ok(portfolios) = api::list_portfolios().await {
                                *store.portfolios().write() = portfolios;
                            }
                        }
                    }
                    ctx.success(
                        response
                            .message
                            .unwrap_or_else(|| "Portfolio saved".to_string()),
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
            match api::delete_portfolio(id).await {
                Ok(()) => {
                    store_remove_portfolio(&store, id);
                    ctx.success("Portfolio deleted");
                }
                Err(err) => ctx.error(format!("Error deleting portfolio: {err}")),
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
        <section class="panel portfolios-panel">
            <header class="panel-header">
                <h2>"Portfolios"</h2>
                <button class="btn btn-primary" on:click=open_create>"New Portfolio"</button>
            </header>

            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Manager"</th>
                        <th>"Projects"</th>
                        <th>"Description"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.portfolios().get()
                        key=|portfolio| portfolio.id
                        children=move |portfolio| {
                            let id = portfolio.id;
                            let manager_id = portfolio.manager_id;
                            let projects = portfolio.project_ids.len();
                            view! {
                                <tr>
                                    <td>{portfolio.name.clone()}</td>
                                    <td>
                                        {move || {
                                            manager_id
                                                .map(user_label)
                                                .unwrap_or_else(|| "—".to_string())
                                        }}
                                    </td>
                                    <td>
                                        <span class="badge bg-secondary">{projects} " projects"</span>
                                    </td>
                                    <td>{portfolio.description.clone()}</td>
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
                            "Edit Portfolio".to_string()
                        } else {
                            "New Portfolio".to_string()
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
                        "Manager"
                        <select
                            class=field_class(field_errors, "manager")
                            prop:value=move || manager.get()
                            on:change=move |ev| manager.set(event_target_value(&ev))
                        >
                            <option value="">"No manager"</option>
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
                        <FieldFeedback errors=field_errors field="manager" />
                    </label>
                    <fieldset class="form-checks">
                        <legend>"Projects"</legend>
                        {move || {
                            store
                                .projects()
                                .get()
                                .into_iter()
                                .map(|project| {
                                    let project_id = project.id;
                                    view! {
                                        <label class="form-check">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || {
                                                    project_ids.get().contains(&project_id)
                                                }
                                                on:change=move |ev| {
                                                    let checked = event_target_checked(&ev);
                                                    project_ids
                                                        .update(|list| {
                                                            if checked {
                                                                if !list.contains(&project_id) {
                                                                    list.push(project_id);
                                                                }
                                                            } else {
                                                                list.retain(|id| *id != project_id);
                                                            }
                                                        });
                                                }
                                            />
                                            {project.name.clone()}
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
