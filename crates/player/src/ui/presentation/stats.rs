//! Stats panel formatting
//!
//! Shared by the move, riddle and event paths so the labels read the same
//! whichever response updated them.

use std::rc::Rc;

use chateauquest_domain::Stamina;

use crate::ports::outbound::{TextField, ViewPort};

pub const EXPLORING_STATUS: &str = "Exploring...";
pub const EXPLORING_LOCATION: &str = "Exploring";
pub const NO_COMPANIONS_PLACEHOLDER: &str = "No companions yet";

/// Distance rounded to two decimals, e.g. `"12.35 km"`, `"12 km"`
pub fn format_distance_km(distance: f64) -> String {
    let rounded = (distance * 100.0).round() / 100.0;
    format!("{} km", rounded)
}

pub fn format_progress(visited: u32, total: u32) -> String {
    format!("{}/{}", visited, total)
}

/// Writes stats labels through the view port
#[derive(Clone)]
pub struct StatsPresenter {
    view: Rc<dyn ViewPort>,
}

impl StatsPresenter {
    pub fn new(view: Rc<dyn ViewPort>) -> Self {
        Self { view }
    }

    /// Nearest-city status. Without a city the status falls back to
    /// "Exploring..." and the distance label keeps its last value.
    pub fn show_nearest_city(&self, city: Option<&str>, distance: Option<f64>) {
        match city {
            Some(city) => {
                if let Some(distance) = distance {
                    self.view
                        .set_text(TextField::Distance, &format_distance_km(distance));
                }
                self.view
                    .set_text(TextField::Status, &format!("Near {}", city));
            }
            None => self.view.set_text(TextField::Status, EXPLORING_STATUS),
        }
    }

    pub fn show_stamina(&self, stamina: Stamina) {
        self.view
            .set_stamina_bar(&stamina.bar_width(), stamina.band().color());
    }

    pub fn show_score(&self, score: i64) {
        self.view.set_text(TextField::ScoreCounter, &score.to_string());
    }

    pub fn show_moves(&self, moves: u32) {
        self.view.set_text(TextField::MovesCounter, &moves.to_string());
    }

    pub fn show_cities(&self, visited: u32, total: u32) {
        let progress = format_progress(visited, total);
        self.view.set_text(TextField::MainCitiesCount, &progress);
        self.view.set_text(TextField::CitiesVisited, &progress);
    }

    pub fn show_location(&self, location: &str) {
        self.view.set_text(TextField::MainCurrentLocation, location);
        self.view.set_text(TextField::CurrentLocation, location);
    }

    pub fn show_companions(&self, companions: &[String]) {
        self.view.render_companions(companions);
    }
}
