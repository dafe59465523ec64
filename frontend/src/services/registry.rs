//! Typed service registry.
//!
//! One shared instance per service trait, handed to components through
//! Leptos context. Components ask for the field they need instead of
//! looking services up by name.

use std::rc::Rc;

use leptos::*;

use super::auth::{AuthApi, AuthService};
use super::http::HttpClient;
use super::payment::{PaymentApi, PaymentService};
use super::resource::{ResourceApi, ResourceService};

#[derive(Clone)]
pub struct Services {
    pub auth: Rc<dyn AuthApi>,
    pub resource: Rc<dyn ResourceApi>,
    pub payment: Rc<dyn PaymentApi>,
}

impl Services {
    /// Services talking to the REST API at `base_url`.
    pub fn http(base_url: &str) -> Self {
        let http = HttpClient::new(base_url);
        Self {
            auth: Rc::new(AuthService::new(http.clone())),
            resource: Rc::new(ResourceService::new(http.clone())),
            payment: Rc::new(PaymentService::new(http)),
        }
    }
}

/// Make `services` available to every component below the caller.
pub fn provide_services(services: Services) {
    provide_context(services);
}

/// Fetch the registry provided by the application root.
pub fn use_services() -> Services {
    expect_context::<Services>()
}
