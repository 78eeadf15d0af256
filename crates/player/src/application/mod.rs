//! Application layer - use cases over the outbound ports

pub mod api;
pub mod services;

pub use api::GameApi;
