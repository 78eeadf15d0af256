use std::cell::RefCell;

use chateauquest_shared::MapMessage;

use crate::ports::outbound::MapPort;

/// Map double that keeps every message it was sent
#[derive(Default)]
pub struct RecordingMap {
    sent: RefCell<Vec<MapMessage>>,
}

impl RecordingMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<MapMessage> {
        self.sent.borrow().clone()
    }

    /// Messages of one `type`, e.g. `"revealChateau"`
    pub fn sent_of_kind(&self, kind: &str) -> Vec<MapMessage> {
        self.sent
            .borrow()
            .iter()
            .filter(|m| m.kind() == kind)
            .cloned()
            .collect()
    }
}

impl MapPort for RecordingMap {
    fn send(&self, message: MapMessage) {
        self.sent.borrow_mut().push(message);
    }
}
