//! HTTP adapters for [`RawApiPort`](crate::ports::outbound::RawApiPort)
//!
//! The game server answers failures with a JSON body and a 4xx status, so
//! both adapters decode the body whatever the status and only report an
//! error when there is no JSON to hand back.

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::ApiAdapter;

#[cfg(target_arch = "wasm32")]
pub use wasm::ApiAdapter;

use serde_json::Value;

use crate::ports::outbound::ApiError;

/// Decode a response body, falling back to a transport error carrying the
/// status when the body is not JSON.
pub(crate) fn decode_body(status: u16, body: &str) -> Result<Value, ApiError> {
    match serde_json::from_str(body) {
        Ok(value) => Ok(value),
        Err(_) if !(200..300).contains(&status) => Err(ApiError::RequestFailed(format!(
            "HTTP {}: {}",
            status,
            body.trim()
        ))),
        Err(e) => Err(ApiError::ParseError(e.to_string())),
    }
}
