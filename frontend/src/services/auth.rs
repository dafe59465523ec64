//! Session login and logout.
//!
//! The server keeps the session in a cookie, so neither call returns a
//! token; the shared client sends cookies with every request.

use async_trait::async_trait;

use super::http::HttpClient;
use crate::types::{AppError, AppResult, LoginRequest};

#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, request: &LoginRequest) -> AppResult<()>;

    async fn logout(&self) -> AppResult<()>;
}

#[derive(Clone, Debug)]
pub struct AuthService {
    http: HttpClient,
}

impl AuthService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait(?Send)]
impl AuthApi for AuthService {
    async fn login(&self, request: &LoginRequest) -> AppResult<()> {
        if request.email.is_empty() || request.password.is_empty() {
            return Err(AppError::Validation("email and password are required".to_string()));
        }
        self.http.post("/auth/login", request).await
    }

    async fn logout(&self) -> AppResult<()> {
        self.http.post_empty("/auth/logout").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_login_rejects_blank_credentials_without_network() {
        let service = AuthService::new(HttpClient::new("/api"));
        let request = LoginRequest {
            email: "member@example.org".to_string(),
            password: String::new(),
        };

        let result = block_on(service.login(&request));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
