use leptos::*;
use leptos_router::*;

use crate::services::use_services;
use crate::APP_NAME;

#[component]
pub fn Header() -> impl IntoView {
    let services = use_services();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let auth = services.auth.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            if let Err(e) = auth.logout().await {
                log::warn!("Logout failed: {}", e);
            }
            navigate("/", Default::default());
        });
    };

    view! {
        <header class="top-app-bar">
            <span class="logo">{APP_NAME}</span>
            <nav>
                <A href="/resources">"Resources"</A>
                <A href="/reports">"Reports"</A>
                <button class="text-button" on:click=on_logout>"Logout"</button>
            </nav>
        </header>
    }
}
