//! Château Quest domain vocabulary.
//!
//! Pure value types shared by the wire contracts and the player client:
//! coordinates and great-circle distance, WASD directions, stamina bands and
//! audio volume. No I/O lives here.

pub mod error;
pub mod value_objects;

pub use error::DomainError;

pub use value_objects::{
    haversine_km, Coordinates, Direction, Stamina, StaminaBand, Volume, EARTH_RADIUS_KM,
};
