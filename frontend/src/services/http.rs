//! Thin HTTP client shared by every domain service.
//!
//! Composes request URLs from a base URL, sends cookies along with each
//! call and maps failures onto [`AppError`].

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

use crate::types::{AppError, AppResult};

/// Request issuer bound to one API base URL.
#[derive(Clone, Debug)]
pub struct HttpClient {
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `path` onto the base URL with exactly one separating slash.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `GET` and decode a JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = self.url(path);
        log::debug!("GET {}", url);
        let response = send(with_credentials(Request::get(&url))).await?;
        decode(response).await
    }

    /// `POST` a JSON body, ignoring the response body.
    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> AppResult<()> {
        let url = self.url(path);
        log::debug!("POST {}", url);
        send_json(with_credentials(Request::post(&url)), body).await?;
        Ok(())
    }

    /// `POST` without a body.
    pub async fn post_empty(&self, path: &str) -> AppResult<()> {
        let url = self.url(path);
        log::debug!("POST {}", url);
        send(with_credentials(Request::post(&url))).await?;
        Ok(())
    }

    /// `PUT` a JSON body, ignoring the response body.
    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> AppResult<()> {
        let url = self.url(path);
        log::debug!("PUT {}", url);
        send_json(with_credentials(Request::put(&url)), body).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> AppResult<()> {
        let url = self.url(path);
        log::debug!("DELETE {}", url);
        send(with_credentials(Request::delete(&url))).await?;
        Ok(())
    }
}

fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder.credentials(RequestCredentials::Include)
}

async fn send(builder: RequestBuilder) -> AppResult<Response> {
    let response = builder
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;
    ensure_success(response).await
}

async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> AppResult<Response> {
    let request = builder
        .json(body)
        .map_err(|e| AppError::Validation(format!("Failed to encode request: {}", e)))?;
    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;
    ensure_success(response).await
}

async fn ensure_success(response: Response) -> AppResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    log::warn!("{} failed with status {}: {}", response.url(), status, text.trim());
    Err(AppError::from_status(status, text))
}

async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_composition() {
        let client = HttpClient::new("/api/");
        assert_eq!(client.base_url(), "/api");
        assert_eq!(client.url("/resources"), "/api/resources");
        assert_eq!(client.url("payments/charts"), "/api/payments/charts");
    }

    #[test]
    fn test_absolute_base_url() {
        let client = HttpClient::new("https://members.example.org/api");
        assert_eq!(
            client.url("/resources/r1"),
            "https://members.example.org/api/resources/r1"
        );
    }
}
