//! Backend services.
//!
//! This module provides the REST wrappers used by the pages:
//!
//! # Services
//!
//! - [`http`] - Shared request issuer with base URL composition
//! - [`auth`] - Session login/logout
//! - [`resource`] - Resource registration, update and listing
//! - [`payment`] - Payment charts and refresh
//! - [`registry`] - Typed service lookup through Leptos context

pub mod http;
pub mod auth;
pub mod resource;
pub mod payment;
pub mod registry;

pub use http::*;
pub use auth::*;
pub use resource::*;
pub use payment::*;
pub use registry::*;
