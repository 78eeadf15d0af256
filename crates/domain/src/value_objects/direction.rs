//! Movement direction (WASD)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// One of the four WASD movement keys.
///
/// Serialized as the lower-case key letter, which is what `/move` expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "w")]
    North,
    #[serde(rename = "a")]
    West,
    #[serde(rename = "s")]
    South,
    #[serde(rename = "d")]
    East,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::West,
        Direction::South,
        Direction::East,
    ];

    /// The key letter for this direction
    pub fn as_key(&self) -> &'static str {
        match self {
            Direction::North => "w",
            Direction::West => "a",
            Direction::South => "s",
            Direction::East => "d",
        }
    }

    /// Map a keyboard key or button label to a direction (case-insensitive).
    ///
    /// Returns `None` for anything outside {w, a, s, d}.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "w" => Some(Direction::North),
            "a" => Some(Direction::West),
            "s" => Some(Direction::South),
            "d" => Some(Direction::East),
            _ => None,
        }
    }
}

impl FromStr for Direction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| DomainError::parse(format!("Unknown direction: {}", s)))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}
