//! Château Quest Protocol - Shared types for server, player and map frame
//!
//! This crate contains the wire contracts the player client speaks:
//! - Request bodies for `/move`, `/handle_event`, `/solve_riddle` and the
//!   start form posted to `/`
//! - Response payloads (every field optional, presence drives the UI)
//! - Messages posted to the embedded map frame
//! - Random-event prompts rendered in the event modal
//!
//! # Design Principles
//!
//! 1. **No business logic** - Pure data types and serialization
//! 2. **WASM compatible** - Must compile for both native and wasm32 targets
//! 3. **Lenient decoding** - Unknown fields are ignored, missing fields are `None`

pub mod events;
pub mod messages;
pub mod requests;
pub mod responses;

pub use events::{EventChoice, EventPrompt};
pub use messages::MapMessage;
pub use requests::{EventChoiceRequest, MoveRequest, RiddleAnswerRequest, StartGameForm};
pub use responses::{CompletionOutcome, EventOutcome, MoveResponse, RiddleOutcome};
