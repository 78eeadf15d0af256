//! Desktop platform implementation
//!
//! Backed by tokio. Tasks are spawned with `tokio::task::spawn_local`, so
//! the client must be driven from inside a `LocalSet`.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::ports::outbound::{LocalTask, PlatformPort};

#[derive(Clone, Copy, Debug, Default)]
pub struct DesktopPlatform;

impl PlatformPort for DesktopPlatform {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    fn sleep_ms(&self, ms: u64) -> LocalTask {
        Box::pin(tokio::time::sleep(Duration::from_millis(ms)))
    }

    fn spawn_local(&self, task: LocalTask) {
        tokio::task::spawn_local(task);
    }
}

pub fn create_platform() -> DesktopPlatform {
    DesktopPlatform
}
