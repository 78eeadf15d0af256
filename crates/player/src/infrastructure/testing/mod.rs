//! Test harness wiring a full [`GameClient`](crate::runner::GameClient)
//! against in-memory doubles.

mod fixtures;

pub use fixtures::TestHarness;
