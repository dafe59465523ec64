//! Resource list with register/edit/remove actions.

use leptos::*;

use crate::components::{Card, Header, ResourceInfo, Toast};
use crate::services::use_services;
use crate::workflow::ResourceForm;
use crate::{ResourceModalData, ResourceResponse, ToastMessage};

#[component]
pub fn ResourcesPage() -> impl IntoView {
    let services = store_value(use_services());
    let form = create_rw_signal(ResourceForm::new());
    let toast = create_rw_signal(None::<ToastMessage>);
    // Bumped to refetch the list
    let (version, set_version) = create_signal(0u32);

    let resources = create_local_resource(
        move || version.get(),
        move |_| {
            let api = services.with_value(|s| s.resource.clone());
            async move { api.get_resources().await }
        },
    );

    let refresh = move || set_version.update(|v| *v = v.wrapping_add(1));

    let on_remove = move |resource: ResourceResponse| {
        let api = services.with_value(|s| s.resource.clone());
        spawn_local(async move {
            match api.remove_resource(&resource.id).await {
                Ok(()) => {
                    log::info!("Removed resource {}", resource.name);
                    refresh();
                }
                Err(e) => {
                    log::error!("Failed to remove resource {}: {}", resource.id, e);
                    toast.try_set(Some(ToastMessage::new(format!(
                        "Could not remove {}. {}",
                        resource.name, e
                    ))));
                }
            }
        });
    };

    let resource_card = move |resource: ResourceResponse| {
        let edit_data = ResourceModalData::from(&resource);
        let removed = resource.clone();
        view! {
            <Card>
                <h3>
                    {resource.name.clone()}
                    {resource
                        .is_default
                        .then(|| view! { <span class="default-badge">"default"</span> })}
                </h3>
                <div>{resource.address.clone()}</div>
                <div class="helper">
                    "Last heartbeat: "
                    {resource.last_heart_beat.clone().unwrap_or_else(|| "never".to_string())}
                </div>
                <div class="dialog-actions">
                    <button
                        class="text-button"
                        on:click=move |_| form.update(|f| f.show(Some(&edit_data)))
                    >
                        "Edit"
                    </button>
                    <button
                        class="destructive-button"
                        on:click=move |_| on_remove(removed.clone())
                    >
                        "Remove"
                    </button>
                </div>
            </Card>
        }
    };

    view! {
        <Header/>
        <div class="center">
            <button
                class="margin-r-8"
                on:click=move |_| form.update(|f| f.show(None))
            >
                "Register resource"
            </button>
        </div>
        <Transition fallback=|| view! { <p class="center-text">"Loading resources..."</p> }>
            {move || resources.get().map(|result| match result {
                Ok(list) if list.is_empty() => {
                    view! { <p class="center-text">"No resources registered yet"</p> }.into_view()
                }
                Ok(list) => view! {
                    <div class="resource-list">
                        {list.into_iter().map(resource_card).collect_view()}
                    </div>
                }
                .into_view(),
                Err(e) => {
                    log::error!("Failed to load resources: {}", e);
                    view! { <p class="center-text">{format!("Could not load resources. {}", e)}</p> }
                        .into_view()
                }
            })}
        </Transition>
        <ResourceInfo form=form on_updated=move |_| refresh()/>
        <Toast toast=toast/>
    }
}
