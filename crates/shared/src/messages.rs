//! Messages posted to the embedded map frame
//!
//! The map is a separate document; the player talks to it with structured
//! `{ "type": ..., ... }` messages and never reads anything back.

use chateauquest_domain::Coordinates;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MapMessage {
    /// Move the player marker
    UpdatePosition { lat: f64, lon: f64 },
    /// Show the château marker
    RevealChateau { location: Coordinates },
    /// Redraw companion markers
    UpdateCompanions { companions: Vec<String> },
    /// Show the mysterious location marker
    RevealMysteriousLocation { location: Coordinates },
}

impl MapMessage {
    pub fn update_position(position: Coordinates) -> Self {
        MapMessage::UpdatePosition {
            lat: position.lat,
            lon: position.lon,
        }
    }

    /// The `type` discriminator as seen by the map frame
    pub fn kind(&self) -> &'static str {
        match self {
            MapMessage::UpdatePosition { .. } => "updatePosition",
            MapMessage::RevealChateau { .. } => "revealChateau",
            MapMessage::UpdateCompanions { .. } => "updateCompanions",
            MapMessage::RevealMysteriousLocation { .. } => "revealMysteriousLocation",
        }
    }
}
