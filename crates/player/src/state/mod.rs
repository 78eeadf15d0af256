//! Client-side UI state
//!
//! Plain `Cell` containers: the client runs on one event loop and never
//! holds state across an await point.

mod input_state;

pub use input_state::InputState;
