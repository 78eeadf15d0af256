//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with the page, the map frame, the
//! audio elements and the game server without depending on concrete
//! implementations.

pub mod api_port;
pub mod audio_port;
pub mod map_port;
pub mod platform_port;
pub mod testing;
pub mod view_port;

pub use api_port::{ApiError, RawApiPort};
pub use audio_port::{AudioError, AudioPort, Track};
pub use map_port::MapPort;
pub use platform_port::{LocalTask, PlatformPort};
pub use view_port::{MessageKind, ModalKind, TextField, ViewPort};

#[cfg(any(test, feature = "testing"))]
pub use api_port::MockRawApiPort;
#[cfg(any(test, feature = "testing"))]
pub use map_port::MockMapPort;
#[cfg(any(test, feature = "testing"))]
pub use view_port::MockViewPort;
