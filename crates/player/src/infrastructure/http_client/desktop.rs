//! reqwest-backed adapter for the terminal runner
//!
//! The server keeps the whole game in a session cookie, so the client
//! carries a cookie store and every request after [`ApiAdapter::start_game`]
//! plays in the same session.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use url::Url;

use chateauquest_shared::StartGameForm;

use super::decode_body;
use crate::application::api::paths;
use crate::ports::outbound::{ApiError, RawApiPort};

#[derive(Clone)]
pub struct ApiAdapter {
    client: Client,
    base_url: Url,
}

impl ApiAdapter {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::RequestFailed(format!("invalid server URL {base_url}: {e}")))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .cookie_store(true)
            .build()
            .map_err(|e| ApiError::RequestFailed(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::RequestFailed(format!("invalid path {path}: {e}")))
    }

    async fn read(response: reqwest::Response) -> Result<Value, ApiError> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        decode_body(status, &body)
    }

    /// Post the start form. The server answers a valid form by redirecting
    /// to the game page and re-renders the form otherwise.
    pub async fn start_game(&self, form: &StartGameForm) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url(paths::START)?)
            .form(form)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::RequestFailed(format!("HTTP {}", status.as_u16())));
        }
        if response.url().path() != paths::GAME {
            return Err(ApiError::RequestFailed(format!(
                "server rejected the start form for {} as {} in {}",
                form.player_name, form.character, form.start_location
            )));
        }
        tracing::info!(
            player = %form.player_name,
            city = %form.start_location,
            "Game session started"
        );
        Ok(())
    }
}

#[async_trait::async_trait(?Send)]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let response = self
            .client
            .get(self.url(path)?)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        Self::read(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let response = self
            .client
            .post(self.url(path)?)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        Self::read(response).await
    }

    async fn post_empty(&self, path: &str) -> Result<Value, ApiError> {
        let response = self
            .client
            .post(self.url(path)?)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        Self::read(response).await
    }
}
