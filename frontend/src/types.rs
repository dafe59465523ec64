//! Common types used across the frontend application.
//!
//! This module centralizes type definitions so components and services
//! agree on wire shapes and view-models.
//!
//! # Categories
//!
//! - **View-model Types** - Data handed to components when they open
//! - **API Types** - Request and response bodies for the REST backend
//! - **Feedback Types** - Toast notifications
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::TOAST_DURATION_MS;

// =============================================================================
// View-model Types
// =============================================================================

/// Data supplied by a parent view when it opens the resource modal.
///
/// `is_edit` decides whether the modal registers a new resource or
/// updates the one identified by `id`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceModalData {
    /// Identifier of the resource being edited
    pub id: Option<String>,
    /// Current resource name
    pub resource_name: String,
    /// Current network address
    pub resource_address: String,
    /// Whether the resource is the default one
    pub is_default: bool,
    /// Edit (true) or create (false)
    pub is_edit: bool,
}

impl ResourceModalData {
    /// View-model for registering a new resource.
    pub fn create() -> Self {
        Self::default()
    }

    /// View-model for editing an existing resource.
    pub fn edit(
        id: impl Into<String>,
        resource_name: impl Into<String>,
        resource_address: impl Into<String>,
        is_default: bool,
    ) -> Self {
        Self {
            id: Some(id.into()),
            resource_name: resource_name.into(),
            resource_address: resource_address.into(),
            is_default,
            is_edit: true,
        }
    }
}

impl From<&ResourceResponse> for ResourceModalData {
    fn from(resource: &ResourceResponse) -> Self {
        Self::edit(
            resource.id.clone(),
            resource.name.clone(),
            resource.address.clone(),
            resource.is_default,
        )
    }
}

// =============================================================================
// API Types
// =============================================================================

/// Body of `POST /resources`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResourceRequest {
    pub name: String,
    pub address: String,
    pub is_default: bool,
}

/// Body of `PUT /resources/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResourceRequest {
    pub id: String,
    pub name: String,
    pub address: String,
    pub is_default: bool,
}

/// A resource as returned by `GET /resources`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceResponse {
    pub id: String,
    pub name: String,
    pub address: String,
    /// Last time the device reported in, if ever
    #[serde(default)]
    pub last_heart_beat: Option<String>,
    #[serde(default)]
    pub is_default: bool,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Display options attached to a payment chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub title: String,
    #[serde(default)]
    pub curve_type: Option<String>,
    #[serde(default)]
    pub legend: Option<String>,
}

/// One row of a payment chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRow {
    pub month: String,
    pub member_count: u32,
}

/// A chart returned by `GET /payments/charts`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentChartResponse {
    pub options: ChartOptions,
    #[serde(rename = "type")]
    pub chart_type: String,
    #[serde(default)]
    pub rows: Vec<ChartRow>,
}

impl PaymentChartResponse {
    /// Bar width of each row as a percentage of the largest row.
    pub fn bar_widths(&self) -> Vec<f64> {
        let max = self.rows.iter().map(|r| r.member_count).max().unwrap_or(0);
        if max == 0 {
            return vec![0.0; self.rows.len()];
        }
        self.rows
            .iter()
            .map(|r| f64::from(r.member_count) * 100.0 / f64::from(max))
            .collect()
    }
}

// =============================================================================
// Feedback Types
// =============================================================================

/// A transient notification rendered by the toast component.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub message: String,
    /// Display time in milliseconds
    pub duration: u32,
}

impl ToastMessage {
    /// Toast with the default display time.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration: TOAST_DURATION_MS,
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all service calls.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    /// The request never reached the server.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The session is missing or expired.
    #[error("Not logged in")]
    Unauthorized,

    /// The response body could not be decoded.
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Invalid user input.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Map a failed HTTP status and its body text to an error.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 => AppError::Unauthorized,
            _ => {
                let message = message.into();
                let message = if message.trim().is_empty() {
                    "Unknown error".to_string()
                } else {
                    message.trim().to_string()
                };
                AppError::Server { status, message }
            }
        }
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
