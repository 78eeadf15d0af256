//! Audio volume in the closed range [0, 1]

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// Playback volume (validated newtype)
///
/// # Validation Rules
///
/// - Value must be finite and within `[0.0, 1.0]`
///
/// ```
/// use chateauquest_domain::Volume;
///
/// assert_eq!(Volume::new(0.5).unwrap().value(), 0.5);
/// assert!(Volume::new(1.2).is_err());
/// assert_eq!(Volume::clamped(1.2).value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Volume(f64);

impl Volume {
    pub const SILENT: Volume = Volume(0.0);
    pub const FULL: Volume = Volume(1.0);

    pub fn new(level: f64) -> Result<Self, DomainError> {
        if !level.is_finite() || !(0.0..=1.0).contains(&level) {
            return Err(DomainError::validation(format!(
                "Volume must be within [0, 1], got {}",
                level
            )));
        }
        Ok(Self(level))
    }

    /// Create a volume, clamping out-of-range input. NaN becomes silent.
    pub fn clamped(level: f64) -> Self {
        if level.is_nan() {
            return Self::SILENT;
        }
        Self(level.clamp(0.0, 1.0))
    }

    /// Volume from a 0–100 slider position
    pub fn from_percent(percent: u8) -> Self {
        Self::clamped(f64::from(percent) / 100.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(0.5)
    }
}

impl TryFrom<f64> for Volume {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Volume> for f64 {
    fn from(v: Volume) -> Self {
        v.0
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
