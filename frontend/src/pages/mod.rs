//! Route-level views.
//!
//! - [`LoginPage`] - `/`
//! - [`ResourcesPage`] - `/resources`
//! - [`ReportsPage`] - `/reports`

mod login;
mod reports;
mod resources;

pub use login::*;
pub use reports::*;
pub use resources::*;
