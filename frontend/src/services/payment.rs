//! Payment service: chart data and payment refresh.

use async_trait::async_trait;

use super::http::HttpClient;
use crate::types::{AppResult, PaymentChartResponse};

const PAYMENTS: &str = "/payments";

#[async_trait(?Send)]
pub trait PaymentApi {
    async fn get_payment_charts(&self) -> AppResult<Vec<PaymentChartResponse>>;

    /// Ask the server to pull the latest payments from the provider.
    async fn refresh_payments(&self) -> AppResult<()>;
}

/// [`PaymentApi`] backed by the REST API.
#[derive(Clone, Debug)]
pub struct PaymentService {
    http: HttpClient,
}

impl PaymentService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait(?Send)]
impl PaymentApi for PaymentService {
    async fn get_payment_charts(&self) -> AppResult<Vec<PaymentChartResponse>> {
        self.http.get(&format!("{}/charts", PAYMENTS)).await
    }

    async fn refresh_payments(&self) -> AppResult<()> {
        self.http.post_empty(&format!("{}/refresh", PAYMENTS)).await
    }
}
