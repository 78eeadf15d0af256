//! Keyboard, control-button and document-click dispatch
//!
//! Keyboard moves are throttled to one per `move_delay_ms`; the on-screen
//! buttons are not. Both are refused while a riddle or event modal is open.

use std::rc::Rc;

use chateauquest_domain::Direction;

use crate::application::services::{AudioService, MoveService};
use crate::ports::outbound::{PlatformPort, ViewPort};
use crate::state::InputState;

/// What the dispatcher did with a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not a movement key, or input is gated
    Ignored,
    /// Movement key arriving inside the throttle window
    Throttled,
    Dispatched(Direction),
}

impl KeyOutcome {
    /// Movement keys never scroll the page, accepted or not
    pub fn prevents_default(&self) -> bool {
        !matches!(self, KeyOutcome::Ignored)
    }
}

/// Whether an element takes text: `INPUT`, `TEXTAREA` or anything
/// content-editable. Tag names compare case-insensitively.
pub fn is_text_entry(tag_name: &str, content_editable: bool) -> bool {
    content_editable
        || tag_name.eq_ignore_ascii_case("input")
        || tag_name.eq_ignore_ascii_case("textarea")
}

pub struct InputDispatcher {
    input: Rc<InputState>,
    mover: Rc<MoveService>,
    audio: Rc<AudioService>,
    platform: Rc<dyn PlatformPort>,
    view: Rc<dyn ViewPort>,
    move_delay_ms: u64,
    blur_on_click: bool,
}

impl InputDispatcher {
    pub fn new(
        input: Rc<InputState>,
        mover: Rc<MoveService>,
        audio: Rc<AudioService>,
        platform: Rc<dyn PlatformPort>,
        view: Rc<dyn ViewPort>,
        move_delay_ms: u64,
        blur_on_click: bool,
    ) -> Self {
        Self {
            input,
            mover,
            audio,
            platform,
            view,
            move_delay_ms,
            blur_on_click,
        }
    }

    /// `typing` is true when focus sits in a text input, textarea or
    /// content-editable element.
    pub fn on_key_down(&self, key: &str, typing: bool) -> KeyOutcome {
        if typing || !self.input.can_move() {
            return KeyOutcome::Ignored;
        }
        let Some(direction) = Direction::from_key(key) else {
            return KeyOutcome::Ignored;
        };

        let now = self.platform.now_millis();
        if !self.input.try_accept_keyboard_move(now, self.move_delay_ms) {
            tracing::trace!(?direction, "Keyboard move throttled");
            return KeyOutcome::Throttled;
        }

        self.dispatch(direction);
        KeyOutcome::Dispatched(direction)
    }

    /// On-screen W/A/S/D buttons. Gated by modals only.
    pub fn on_control_button(&self, label: &str) -> Option<Direction> {
        if !self.input.can_move() {
            return None;
        }
        let Some(direction) = Direction::from_key(label) else {
            tracing::warn!(label, "Control button with unknown direction");
            return None;
        };
        self.dispatch(direction);
        Some(direction)
    }

    /// Clicks outside text inputs hand focus back to the page so the map
    /// frame does not swallow key presses. Any click also counts as the
    /// gesture that unblocks autoplay.
    pub fn on_document_click(&self, target_is_text_input: bool) {
        if self.blur_on_click && !target_is_text_input {
            self.view.blur_active_element();
        }
        self.audio.resume_after_gesture();
    }

    fn dispatch(&self, direction: Direction) {
        tracing::debug!(?direction, "Dispatching move");
        let mover = Rc::clone(&self.mover);
        self.platform.spawn_local(Box::pin(async move {
            mover.move_to(direction).await;
        }));
    }
}
