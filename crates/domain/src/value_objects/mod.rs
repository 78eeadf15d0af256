//! Value objects - Immutable objects defined by their attributes

mod coordinates;
mod direction;
mod stamina;
mod volume;

pub use coordinates::{haversine_km, Coordinates, EARTH_RADIUS_KM};
pub use direction::Direction;
pub use stamina::{Stamina, StaminaBand};
pub use volume::Volume;
