//! Application services
//!
//! One service per use case of the game page. Services depend on port
//! traits and the shared [`InputState`](crate::state::InputState), never on
//! the DOM or a concrete HTTP client.

pub mod audio_service;
pub mod completion_service;
pub mod event_service;
pub mod modal_service;
pub mod move_service;
pub mod riddle_service;

pub use audio_service::{AudioService, FadeSettings};
pub use completion_service::CompletionService;
pub use event_service::EventService;
pub use modal_service::ModalService;
pub use move_service::MoveService;
pub use riddle_service::RiddleService;

use std::rc::Rc;

use crate::ports::outbound::{PlatformPort, ViewPort};

/// Navigate to `url` once `delay_ms` has elapsed on the local executor.
pub(crate) fn navigate_after(
    platform: &Rc<dyn PlatformPort>,
    view: &Rc<dyn ViewPort>,
    url: &str,
    delay_ms: u64,
) {
    let sleep = platform.sleep_ms(delay_ms);
    let view = Rc::clone(view);
    let url = url.to_string();
    platform.spawn_local(Box::pin(async move {
        sleep.await;
        tracing::info!(%url, "Redirecting");
        view.navigate(&url);
    }));
}
