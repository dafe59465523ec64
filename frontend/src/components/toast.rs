//! Timed toast notification.
//!
//! Renders whatever [`ToastMessage`] is in the signal and clears it once
//! its duration has elapsed. Setting a new message restarts the timer.

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::ToastMessage;

#[component]
pub fn Toast(toast: RwSignal<Option<ToastMessage>>) -> impl IntoView {
    // Bumped for every message so a stale timer never hides a newer one
    let generation = store_value(0u64);

    create_effect(move |_| {
        let Some(msg) = toast.get() else {
            return;
        };
        let current = generation.get_value().wrapping_add(1);
        generation.set_value(current);

        spawn_local(async move {
            TimeoutFuture::new(msg.duration).await;
            if generation.try_get_value() == Some(current) {
                toast.try_set(None);
            }
        });
    });

    view! {
        <Show when=move || toast.with(Option::is_some) fallback=|| view! {}>
            <div class="toast-msg" role="status">
                {move || toast.with(|t| t.as_ref().map(|t| t.message.clone()).unwrap_or_default())}
            </div>
        </Show>
    }
}
