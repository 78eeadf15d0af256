//! Request bodies sent to the game server

use chateauquest_domain::Direction;
use serde::{Deserialize, Serialize};

/// `POST /move`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub direction: Direction,
}

/// `POST /handle_event`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventChoiceRequest {
    pub choice: String,
}

/// `POST /solve_riddle`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiddleAnswerRequest {
    pub answer: String,
}

/// `POST /` form that starts a new game in the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartGameForm {
    pub start_location: String,
    pub character: String,
    pub player_name: String,
}
