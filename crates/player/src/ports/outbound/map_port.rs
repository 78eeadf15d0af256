//! MapPort - outbound messages to the embedded map frame

use chateauquest_shared::MapMessage;

/// Fire-and-forget channel to the map. Implementations drop the message
/// (with a log line) when no map frame is present.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait MapPort {
    fn send(&self, message: MapMessage);
}
