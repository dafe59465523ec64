//! Member Dashboard - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for managing member resources and viewing
//! payment reports.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! │  (styles, service registry, router)                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  /           LoginPage                                       │
//! │  /resources  ResourcesPage ── ResourceInfo (modal) ── Toast  │
//! │  /reports    ReportsPage ──── PaymentChart cards             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Requests, responses, view-models and errors
//! - [`workflow`] - Register/edit resource state machine
//! - [`services`] - REST wrappers and the typed service registry
//! - [`components`] - Shared UI components
//! - [`pages`] - Route-level views
//! - [`styles`] - Stylesheets and color tokens

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod workflow;
pub mod styles;
pub mod services;
pub mod components;
pub mod pages;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // View-models
    ResourceModalData,
    // API
    RegisterResourceRequest, UpdateResourceRequest, ResourceResponse,
    LoginRequest, PaymentChartResponse, ChartOptions, ChartRow,
    // Feedback
    ToastMessage,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Pages
pub use pages::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and console logger, then mount [`App`].
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Member Dashboard - starting, API at {}", API_URL);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_services(Services::http(API_URL));

    view! {
        <Title text=APP_NAME/>
        <Style>{styles::app_style()}</Style>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=LoginPage/>
                    <Route path="/resources" view=ResourcesPage/>
                    <Route path="/reports" view=ReportsPage/>
                </Routes>
            </main>
        </Router>
    }
}
