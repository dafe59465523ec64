//! Application configuration.
//!
//! Centralized configuration for the member dashboard frontend.
//! Values are fixed at build time; the API base URL can be overridden
//! with the `MEMBERDASHBOARD_API_URL` environment variable when building.

/// REST API base URL.
///
/// Defaults to `/api` so the dashboard works behind the same origin
/// as the member server.
pub const API_URL: &str = match option_env!("MEMBERDASHBOARD_API_URL") {
    Some(url) => url,
    None => "/api",
};

/// Application name shown in the top bar and page title.
pub const APP_NAME: &str = "Member Dashboard";

/// How long a toast stays visible (in milliseconds).
pub const TOAST_DURATION_MS: u32 = 4000;
