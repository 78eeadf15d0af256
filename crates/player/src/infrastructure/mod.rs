pub mod http_client;
pub mod platform;

#[cfg(target_arch = "wasm32")]
pub mod dom;

#[cfg(not(target_arch = "wasm32"))]
pub mod terminal;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
