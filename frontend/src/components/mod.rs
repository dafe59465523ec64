//! UI Components for the member dashboard.
//!
//! # Presentational Components
//! - [`Card`] - Bordered container for list items and charts
//! - [`Toast`] - Timed notification
//! - [`Header`] - Top app bar with navigation and logout
//!
//! # Workflow Components
//! - [`ResourceInfo`] - Register/edit resource modal

mod card;
mod header;
mod resource_info;
mod toast;

pub use card::*;
pub use header::*;
pub use resource_info::*;
pub use toast::*;
