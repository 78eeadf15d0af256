//! Typed API wrapper for application services.
//!
//! `GameApi` wraps an `Rc<dyn RawApiPort>` and owns endpoint paths and the
//! serde_json conversions, so adapters only ever see JSON values.

use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use chateauquest_domain::Direction;
use chateauquest_shared::{
    CompletionOutcome, EventChoiceRequest, EventOutcome, MoveRequest, MoveResponse,
    RiddleAnswerRequest, RiddleOutcome,
};

use crate::ports::outbound::{ApiError, RawApiPort};

/// Game server endpoints
pub mod paths {
    pub const STATE: &str = "/state";
    pub const MOVE: &str = "/move";
    pub const HANDLE_EVENT: &str = "/handle_event";
    pub const SOLVE_RIDDLE: &str = "/solve_riddle";
    pub const COMPLETE_GAME: &str = "/complete_game";
    pub const LEADERBOARD: &str = "/leaderboard";
    /// Start form; a successful post redirects to [`GAME`]
    pub const START: &str = "/";
    pub const GAME: &str = "/game";
}

#[derive(Clone)]
pub struct GameApi {
    raw: Rc<dyn RawApiPort>,
}

impl GameApi {
    pub fn new(raw: Rc<dyn RawApiPort>) -> Self {
        Self { raw }
    }

    /// Full game-state snapshot. Only logged by the client.
    pub async fn fetch_state(&self) -> Result<Value, ApiError> {
        self.raw.get_json(paths::STATE).await
    }

    pub async fn move_player(&self, direction: Direction) -> Result<MoveResponse, ApiError> {
        self.post(paths::MOVE, &MoveRequest { direction }).await
    }

    pub async fn choose_event(&self, choice: &str) -> Result<EventOutcome, ApiError> {
        let body = EventChoiceRequest {
            choice: choice.to_string(),
        };
        self.post(paths::HANDLE_EVENT, &body).await
    }

    pub async fn solve_riddle(&self, answer: &str) -> Result<RiddleOutcome, ApiError> {
        let body = RiddleAnswerRequest {
            answer: answer.to_string(),
        };
        self.post(paths::SOLVE_RIDDLE, &body).await
    }

    pub async fn complete_game(&self) -> Result<CompletionOutcome, ApiError> {
        let value = self.raw.post_empty(paths::COMPLETE_GAME).await?;
        serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body_value =
            serde_json::to_value(body).map_err(|e| ApiError::SerializeError(e.to_string()))?;
        tracing::debug!(path, body = %body_value, "POST");
        let value = self.raw.post_json(path, &body_value).await?;
        serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
    }
}
