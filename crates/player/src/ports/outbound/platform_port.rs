//! PlatformPort - clock, timers and the local executor
//!
//! The client runs on a single-threaded event loop (browser or a tokio
//! `LocalSet`), so tasks and futures here are deliberately `!Send`.

use std::{future::Future, pin::Pin};

/// A unit of work for the local executor
pub type LocalTask = Pin<Box<dyn Future<Output = ()> + 'static>>;

pub trait PlatformPort {
    /// Get current time in milliseconds since epoch
    fn now_millis(&self) -> u64;

    /// Sleep for the given number of milliseconds
    fn sleep_ms(&self, ms: u64) -> LocalTask;

    /// Run a task to completion in the background on the current thread
    fn spawn_local(&self, task: LocalTask);
}
