//! Château Quest player.
//!
//! Client-side controller for the game page: input dispatch, modal gating,
//! background music and the map-frame bridge, all talking to the game
//! server through the outbound ports. Platform adapters are selected at
//! compile time with `cfg`.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod state;
pub mod ui;

pub use runner::{GameClient, RunnerDeps};
pub use ui::presentation;
