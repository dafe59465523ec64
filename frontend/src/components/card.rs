//! Card container

use leptos::*;

#[component]
pub fn Card(children: Children) -> impl IntoView {
    view! {
        <div class="card-container">
            <div class="card">
                <div class="container">{children()}</div>
            </div>
        </div>
    }
}
