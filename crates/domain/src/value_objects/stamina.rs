//! Stamina value and its display band

use serde::{Deserialize, Serialize};

/// Stamina as reported by the server, nominally 0–100.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stamina(f64);

impl Stamina {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Bar width as a CSS percentage, e.g. `"45%"`
    pub fn bar_width(&self) -> String {
        format!("{}%", self.0)
    }

    pub fn band(&self) -> StaminaBand {
        StaminaBand::for_value(self.0)
    }
}

/// Color band of the stamina bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaminaBand {
    /// Above 60
    Healthy,
    /// Above 30 up to 60
    Tired,
    /// 30 and below
    Exhausted,
}

impl StaminaBand {
    pub fn for_value(value: f64) -> Self {
        if value > 60.0 {
            StaminaBand::Healthy
        } else if value > 30.0 {
            StaminaBand::Tired
        } else {
            StaminaBand::Exhausted
        }
    }

    /// Bar background color
    pub fn color(&self) -> &'static str {
        match self {
            StaminaBand::Healthy => "#4CAF50",
            StaminaBand::Tired => "#FFC107",
            StaminaBand::Exhausted => "#F44336",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_exclusive_above() {
        assert_eq!(StaminaBand::for_value(100.0), StaminaBand::Healthy);
        assert_eq!(StaminaBand::for_value(60.1), StaminaBand::Healthy);
        assert_eq!(StaminaBand::for_value(60.0), StaminaBand::Tired);
        assert_eq!(StaminaBand::for_value(30.5), StaminaBand::Tired);
        assert_eq!(StaminaBand::for_value(30.0), StaminaBand::Exhausted);
        assert_eq!(StaminaBand::for_value(0.0), StaminaBand::Exhausted);
    }

    #[test]
    fn bar_width_keeps_fractional_values() {
        assert_eq!(Stamina::new(45.0).bar_width(), "45%");
        assert_eq!(Stamina::new(99.8).bar_width(), "99.8%");
    }

    #[test]
    fn mid_range_uses_amber() {
        assert_eq!(Stamina::new(45.0).band().color(), "#FFC107");
    }
}
