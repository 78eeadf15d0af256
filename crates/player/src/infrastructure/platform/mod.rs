//! Platform-specific implementations
//!
//! This module provides implementations of [`PlatformPort`] for each
//! target. The correct platform is selected at compile time based on the
//! target architecture.
//!
//! [`PlatformPort`]: crate::ports::outbound::PlatformPort

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

#[cfg(any(test, feature = "testing"))]
pub mod mock;

#[cfg(target_arch = "wasm32")]
pub use wasm::{create_platform, WasmPlatform};

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::{create_platform, DesktopPlatform};
