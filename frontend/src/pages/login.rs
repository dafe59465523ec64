//! Login form.

use leptos::*;
use leptos_router::*;

use crate::components::Toast;
use crate::services::use_services;
use crate::{LoginRequest, ToastMessage, APP_NAME};

#[component]
pub fn LoginPage() -> impl IntoView {
    let services = use_services();
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (is_logging_in, set_is_logging_in) = create_signal(false);
    let toast = create_rw_signal(None::<ToastMessage>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if is_logging_in.get_untracked() {
            return;
        }

        let request = LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        if request.email.is_empty() || request.password.is_empty() {
            toast.set(Some(ToastMessage::new("Please enter your email and password")));
            return;
        }

        let auth = services.auth.clone();
        let navigate = navigate.clone();
        set_is_logging_in.set(true);
        spawn_local(async move {
            match auth.login(&request).await {
                Ok(()) => {
                    log::info!("Logged in as {}", request.email);
                    navigate("/resources", Default::default());
                }
                Err(e) => {
                    log::error!("Login failed: {}", e);
                    toast.try_set(Some(ToastMessage::new(format!("Login failed. {}", e))));
                }
            }
            set_is_logging_in.try_set(false);
        });
    };

    view! {
        <header class="top-app-bar">
            <span class="logo">{APP_NAME}</span>
        </header>
        <div class="login-container">
            <form class="login-form" on:submit=on_submit>
                <input
                    type="email"
                    placeholder="email"
                    required=true
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="password"
                    required=true
                    prop:value=password
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=is_logging_in>"Login"</button>
            </form>
            <div class="toggle-form-text center-text">
                "Need an account? Ask an admin to register you."
            </div>
        </div>
        <Toast toast=toast/>
    }
}
