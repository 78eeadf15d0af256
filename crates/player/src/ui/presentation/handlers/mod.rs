//! Input handlers
//!
//! Translate raw page input (keys, button labels, clicks) into service
//! calls. The DOM and terminal adapters both feed these.

pub mod input_dispatcher;

pub use input_dispatcher::{is_text_entry, InputDispatcher, KeyOutcome};
