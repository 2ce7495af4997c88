//! Entity Modal Shell
//!
//! Shared open/save/close chrome for the CRUD forms. Each panel supplies
//! its fields as children; server-side field errors are marked through
//! `field_class`/`FieldFeedback`.

use std::collections::HashMap;

use leptos::prelude::*;

#[component]
pub fn EntityModal(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] saving: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_save: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())></div>
        <div class="modal-dialog" role="dialog">
            <div class="modal-header">
                <h2 class="modal-title">{move || title.get()}</h2>
                <button type="button" class="modal-close" on:click=move |_| on_close.run(())>
                    "×"
                </button>
            </div>
            <form
                class="modal-body"
                on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    on_save.run(());
                }
            >
                {children()}
                <div class="modal-footer">
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| on_close.run(())
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Form-control class closure that marks server-reported invalid fields
pub fn field_class(
    errors: RwSignal<HashMap<String, Vec<String>>>,
    field: &'static str,
) -> impl Fn() -> &'static str {
    move || {
        if errors.get().contains_key(field) {
            "form-control is-invalid"
        } else {
            "form-control"
        }
    }
}

/// Server validation messages under a field
#[component]
pub fn FieldFeedback(
    errors: RwSignal<HashMap<String, Vec<String>>>,
    field: &'static str,
) -> impl IntoView {
    move || {
        errors.get().get(field).map(|messages| {
            view! { <div class="invalid-feedback">{messages.join(", ")}</div> }
        })
    }
}
