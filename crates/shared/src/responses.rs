//! Response payloads returned by the game server
//!
//! The server is loose about which keys it sends (and sometimes sends
//! `null`), so every field is optional. The player treats the presence of a
//! field as the trigger for the matching UI update.

use chateauquest_domain::{Coordinates, Stamina};
use serde::{Deserialize, Serialize};

// =============================================================================
// Move
// =============================================================================

/// Response to `POST /move`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveResponse {
    /// Server-side rejection (e.g. "Game not started")
    pub error: Option<String>,
    pub success: Option<bool>,
    /// Set when a deadly event ended the run
    pub game_over: Option<bool>,
    pub message: Option<String>,

    pub position: Option<Coordinates>,
    pub nearest_city: Option<String>,
    pub distance: Option<f64>,
    pub stamina: Option<Stamina>,
    pub score: Option<i64>,
    pub moves: Option<u32>,
    pub cities_visited: Option<u32>,
    pub total_cities: Option<u32>,
    pub current_city: Option<String>,

    pub chateau_revealed: Option<bool>,
    pub chateau_location: Option<Coordinates>,
    pub at_chateau: Option<bool>,

    pub game_completed: Option<bool>,
    pub redirect: Option<String>,

    pub in_city: Option<bool>,
    pub current_riddle: Option<String>,
}

impl MoveResponse {
    pub fn is_chateau_revealed(&self) -> bool {
        self.chateau_revealed.unwrap_or(false)
    }

    pub fn is_at_chateau(&self) -> bool {
        self.at_chateau.unwrap_or(false)
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over.unwrap_or(false)
    }

    /// Redirect target when the game has been completed
    pub fn completion_redirect(&self) -> Option<&str> {
        match (self.game_completed.unwrap_or(false), self.redirect.as_deref()) {
            (true, Some(target)) if !target.is_empty() => Some(target),
            _ => None,
        }
    }

    /// Riddle to present when the player has entered a city
    pub fn city_riddle(&self) -> Option<&str> {
        match (self.in_city.unwrap_or(false), self.current_riddle.as_deref()) {
            (true, Some(riddle)) if !riddle.is_empty() => Some(riddle),
            _ => None,
        }
    }

    /// `(visited, total)` when both counters are present
    pub fn cities_progress(&self) -> Option<(u32, u32)> {
        self.cities_visited.zip(self.total_cities)
    }
}

// =============================================================================
// Riddle
// =============================================================================

/// Response to `POST /solve_riddle`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiddleOutcome {
    pub success: bool,
    pub message: Option<String>,
    pub error: Option<String>,
    pub cities_visited: Option<u32>,
    pub total_cities: Option<u32>,
    pub companions: Option<Vec<String>>,
    pub mysterious_location_revealed: Option<bool>,
    pub mysterious_location: Option<Coordinates>,
    pub score: Option<i64>,
}

impl RiddleOutcome {
    pub fn cities_progress(&self) -> Option<(u32, u32)> {
        self.cities_visited.zip(self.total_cities)
    }

    /// Location to reveal on the map, if the server flagged one
    pub fn revealed_location(&self) -> Option<Coordinates> {
        if self.mysterious_location_revealed.unwrap_or(false) {
            self.mysterious_location
        } else {
            None
        }
    }

    /// Message to show when the answer was rejected
    pub fn failure_message(&self) -> Option<&str> {
        self.message.as_deref().or(self.error.as_deref())
    }
}

// =============================================================================
// Event
// =============================================================================

/// Response to `POST /handle_event`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventOutcome {
    pub success: bool,
    pub error: Option<String>,
    pub message: Option<String>,
    pub moves: Option<u32>,
    pub stamina: Option<Stamina>,
    pub score: Option<i64>,
    pub cities_visited: Option<u32>,
    pub total_cities: Option<u32>,
    pub current_city: Option<String>,
    pub companions: Option<Vec<String>>,
    pub position: Option<Coordinates>,
}

impl EventOutcome {
    pub fn cities_progress(&self) -> Option<(u32, u32)> {
        self.cities_visited.zip(self.total_cities)
    }

    pub fn failure_message(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}

// =============================================================================
// Completion
// =============================================================================

/// Response to `POST /complete_game`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionOutcome {
    pub success: bool,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn move_response_tolerates_nulls_and_unknown_keys() {
        let resp: MoveResponse = serde_json::from_value(json!({
            "success": true,
            "position": [46.1, 2.2],
            "nearest_city": "Lyon",
            "distance": 140.123,
            "stamina": 99.8,
            "score": 0,
            "companions": [],
            "mysterious_location": null,
            "chateau_location": null,
            "current_city": null,
            "in_city": false,
            "current_riddle": null
        }))
        .unwrap();

        assert_eq!(resp.position, Some(Coordinates::new(46.1, 2.2)));
        assert_eq!(resp.current_city, None);
        assert!(!resp.is_chateau_revealed());
        assert_eq!(resp.city_riddle(), None);
    }

    #[test]
    fn error_only_response() {
        let resp: MoveResponse =
            serde_json::from_value(json!({ "error": "Game not started" })).unwrap();
        assert_eq!(resp.error.as_deref(), Some("Game not started"));
        assert_eq!(resp.position, None);
    }

    #[test]
    fn completion_redirect_requires_both_fields() {
        let resp = MoveResponse {
            game_completed: Some(true),
            ..Default::default()
        };
        assert_eq!(resp.completion_redirect(), None);

        let resp = MoveResponse {
            game_completed: Some(true),
            redirect: Some("/leaderboard".into()),
            ..Default::default()
        };
        assert_eq!(resp.completion_redirect(), Some("/leaderboard"));
    }

    #[test]
    fn riddle_reveal_requires_flag_and_location() {
        let outcome: RiddleOutcome = serde_json::from_value(json!({
            "success": true,
            "message": "All cities completed!",
            "mysterious_location_revealed": false,
            "mysterious_location": [46.8566, 2.3522]
        }))
        .unwrap();
        assert_eq!(outcome.revealed_location(), None);

        let outcome = RiddleOutcome {
            mysterious_location_revealed: Some(true),
            ..outcome
        };
        assert_eq!(
            outcome.revealed_location(),
            Some(Coordinates::new(46.8566, 2.3522))
        );
    }

    #[test]
    fn event_outcome_without_city_counters() {
        let outcome: EventOutcome = serde_json::from_value(json!({
            "success": true,
            "moves": 12,
            "stamina": 70.0,
            "score": 150,
            "position": [45.0, 3.0]
        }))
        .unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.cities_progress(), None);
    }
}
