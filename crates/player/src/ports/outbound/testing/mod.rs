//! Test utilities for outbound ports
//!
//! Recording doubles for the stateful ports. These are available when the
//! `testing` feature is enabled.
//!
//! # Usage
//!
//! Add to your Cargo.toml:
//! ```toml
//! [dev-dependencies]
//! chateauquest-player = { workspace = true, features = ["testing"] }
//! ```
//!
//! Then import the doubles:
//! ```ignore
//! use chateauquest_player::ports::outbound::testing::{FakeMixer, RecordingMap, RecordingView};
//! ```

#[cfg(any(test, feature = "testing"))]
mod fake_mixer;
#[cfg(any(test, feature = "testing"))]
mod recording_map;
#[cfg(any(test, feature = "testing"))]
mod recording_view;

#[cfg(any(test, feature = "testing"))]
pub use fake_mixer::FakeMixer;
#[cfg(any(test, feature = "testing"))]
pub use recording_map::RecordingMap;
#[cfg(any(test, feature = "testing"))]
pub use recording_view::RecordingView;
