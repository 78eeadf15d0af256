//! Presentation layer - input handlers and view formatting

pub mod chateau;
pub mod handlers;
pub mod messages;
pub mod stats;

pub use chateau::ChateauArrival;
pub use handlers::{InputDispatcher, KeyOutcome};
pub use stats::StatsPresenter;
