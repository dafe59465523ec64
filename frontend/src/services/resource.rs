//! Resource service: registration, update and listing of network devices.

use async_trait::async_trait;

use super::http::HttpClient;
use crate::types::{AppResult, RegisterResourceRequest, ResourceResponse, UpdateResourceRequest};

const RESOURCES: &str = "/resources";

/// Operations the dashboard performs on resources.
#[async_trait(?Send)]
pub trait ResourceApi {
    async fn get_resources(&self) -> AppResult<Vec<ResourceResponse>>;

    async fn register(&self, request: &RegisterResourceRequest) -> AppResult<()>;

    async fn update_resource(&self, request: &UpdateResourceRequest) -> AppResult<()>;

    async fn remove_resource(&self, id: &str) -> AppResult<()>;
}

/// [`ResourceApi`] backed by the REST API.
#[derive(Clone, Debug)]
pub struct ResourceService {
    http: HttpClient,
}

impl ResourceService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

fn resource_path(id: &str) -> String {
    format!("{}/{}", RESOURCES, id)
}

#[async_trait(?Send)]
impl ResourceApi for ResourceService {
    async fn get_resources(&self) -> AppResult<Vec<ResourceResponse>> {
        self.http.get(RESOURCES).await
    }

    async fn register(&self, request: &RegisterResourceRequest) -> AppResult<()> {
        self.http.post(RESOURCES, request).await
    }

    async fn update_resource(&self, request: &UpdateResourceRequest) -> AppResult<()> {
        self.http.put(&resource_path(&request.id), request).await
    }

    async fn remove_resource(&self, id: &str) -> AppResult<()> {
        self.http.delete(&resource_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_path() {
        let http = HttpClient::new("/api");
        assert_eq!(http.url(&resource_path("r1")), "/api/resources/r1");
        assert_eq!(http.url(RESOURCES), "/api/resources");
    }
}
