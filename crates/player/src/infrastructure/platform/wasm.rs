//! Browser platform implementation

use gloo_timers::future::TimeoutFuture;

use crate::ports::outbound::{LocalTask, PlatformPort};

#[derive(Clone, Copy, Debug, Default)]
pub struct WasmPlatform;

impl PlatformPort for WasmPlatform {
    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn sleep_ms(&self, ms: u64) -> LocalTask {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        Box::pin(TimeoutFuture::new(ms))
    }

    fn spawn_local(&self, task: LocalTask) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

pub fn create_platform() -> WasmPlatform {
    WasmPlatform
}
