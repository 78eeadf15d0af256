//! Movement gate shared by the input dispatcher, modals and move controller

use std::cell::Cell;

/// Whether the player may move, and when the last keyboard move went out.
///
/// `can_move` is flipped only by the modal service when a riddle or event
/// modal opens or closes. `last_move_time` is written only by the keyboard
/// path; button moves leave it untouched.
#[derive(Debug)]
pub struct InputState {
    can_move: Cell<bool>,
    last_move_time: Cell<Option<u64>>,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            can_move: Cell::new(true),
            last_move_time: Cell::new(None),
        }
    }

    pub fn can_move(&self) -> bool {
        self.can_move.get()
    }

    pub(crate) fn set_can_move(&self, can_move: bool) {
        self.can_move.set(can_move);
    }

    /// Timestamp (ms) of the last accepted keyboard move
    pub fn last_move_time(&self) -> Option<u64> {
        self.last_move_time.get()
    }

    /// Accept a keyboard move at `now` unless one was accepted less than
    /// `delay_ms` ago. Accepting records `now`.
    pub(crate) fn try_accept_keyboard_move(&self, now: u64, delay_ms: u64) -> bool {
        if let Some(last) = self.last_move_time.get() {
            if now.saturating_sub(last) < delay_ms || now < last {
                return false;
            }
        }
        self.last_move_time.set(Some(now));
        true
    }
}
