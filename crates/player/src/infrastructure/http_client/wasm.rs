//! gloo-net adapter for the browser build

use gloo_net::http::{Request, Response};
use serde_json::Value;

use super::decode_body;
use crate::ports::outbound::{ApiError, RawApiPort};

/// Fetch-based client. An empty base URL keeps requests on the page origin.
#[derive(Clone, Default)]
pub struct ApiAdapter {
    base_url: String,
}

impl ApiAdapter {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read(response: Response) -> Result<Value, ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        decode_body(status, &body)
    }
}

#[async_trait::async_trait(?Send)]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        Self::read(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| ApiError::SerializeError(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        Self::read(response).await
    }

    async fn post_empty(&self, path: &str) -> Result<Value, ApiError> {
        let response = Request::post(&self.url(path))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        Self::read(response).await
    }
}
