//! API Port - Object-safe HTTP boundary to the game server
//!
//! Adapters only move JSON in and out. The typed wrapper
//! (`application::api::GameApi`) owns paths and (de)serialization.
//!
//! The server answers rejected requests with a JSON body *and* a non-2xx
//! status (`400 {"error": "..."}`); adapters must hand that body back as
//! `Ok` so the controllers can surface the message.

use serde_json::Value;
use thiserror::Error;

/// Transport-level failures. Server-reported failures are not errors here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Network failure, CORS rejection, aborted request
    #[error("Request failed: {0}")]
    RequestFailed(String),
    /// Body was not valid JSON or did not match the expected shape
    #[error("Failed to parse response: {0}")]
    ParseError(String),
    #[error("Failed to serialize request: {0}")]
    SerializeError(String),
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait::async_trait(?Send)]
pub trait RawApiPort {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    /// POST with an empty JSON request body
    async fn post_empty(&self, path: &str) -> Result<Value, ApiError>;
}
