//! Modal for registering or editing a resource.
//!
//! The parent owns the [`ResourceForm`] signal and opens the modal with
//! [`ResourceForm::show`]. This component binds the inputs to the form,
//! sends the request the form produces and reports the outcome through
//! the toast and `on_updated`.

use leptos::*;

use crate::components::Toast;
use crate::services::use_services;
use crate::workflow::{Completion, ResourceForm, Submission};
use crate::ToastMessage;

#[component]
pub fn ResourceInfo(
    /// Form state shared with the parent view
    form: RwSignal<ResourceForm>,
    /// Called once after a resource was saved
    #[prop(into)]
    on_updated: Callback<()>,
) -> impl IntoView {
    let services = store_value(use_services());
    let toast = create_rw_signal(None::<ToastMessage>);

    let on_submit = move |_| {
        let Some(submission) = form.try_update(|f| f.submit()) else {
            return;
        };

        match submission {
            Submission::Ignored => {}
            Submission::Invalid(msg) => toast.set(Some(msg)),
            Submission::Send(request) => {
                log::info!("Sending {:?}", request);
                let api = services.with_value(|s| s.resource.clone());
                spawn_local(async move {
                    let result = request.send(api.as_ref()).await;
                    match form.try_update(|f| f.complete(result)) {
                        Some(Completion::Saved(msg)) => {
                            toast.try_set(Some(msg));
                            on_updated.call(());
                        }
                        Some(Completion::Failed(msg)) => {
                            toast.try_set(Some(msg));
                        }
                        Some(Completion::Stale) | None => {}
                    }
                });
            }
        }
    };

    let on_closed = move |_| form.update(|f| f.close());
    let submitting = move || form.with(|f| f.is_submitting());

    view! {
        <Show when=move || form.with(|f| f.is_open()) fallback=|| view! {}>
            <div class="dialog-scrim" on:click=on_closed></div>
            <div class="dialog" role="dialog" aria-modal="true">
                <h2>"Update/Register a Resource"</h2>
                <label>
                    "name"
                    <input
                        type="text"
                        id="resource-name"
                        required=true
                        prop:value=move || form.with(|f| f.fields().name.clone())
                        on:input=move |ev| form.update(|f| f.set_name(event_target_value(&ev)))
                    />
                    <span class="helper">"Name of device"</span>
                </label>
                <label>
                    "address"
                    <input
                        type="text"
                        id="resource-address"
                        required=true
                        prop:value=move || form.with(|f| f.fields().address.clone())
                        on:input=move |ev| form.update(|f| f.set_address(event_target_value(&ev)))
                    />
                    <span class="helper">"Address on the network"</span>
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.fields().is_default)
                        on:change=move |ev| form.update(|f| f.set_default(event_target_checked(&ev)))
                    />
                    " Default"
                </label>
                <div class="dialog-actions">
                    <button class="text-button" disabled=submitting on:click=on_closed>
                        "Cancel"
                    </button>
                    <button disabled=submitting on:click=on_submit>
                        "Submit"
                    </button>
                </div>
            </div>
        </Show>
        <Toast toast=toast/>
    }
}
