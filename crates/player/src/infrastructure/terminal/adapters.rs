//! Log-backed port implementations for the terminal runner

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use chateauquest_domain::Volume;
use chateauquest_shared::MapMessage;

use crate::ports::outbound::{
    AudioError, AudioPort, MapPort, MessageKind, ModalKind, TextField, Track, ViewPort,
};

/// Writes every view update to the log and keeps the riddle answer box
#[derive(Default)]
pub struct TerminalView {
    riddle_answer: RefCell<String>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViewPort for TerminalView {
    fn set_text(&self, field: TextField, text: &str) {
        tracing::info!(target: "view", id = field.element_id(), text);
    }

    fn set_stamina_bar(&self, width: &str, color: &str) {
        tracing::info!(target: "view", width, color, "stamina");
    }

    fn set_modal_visible(&self, modal: ModalKind, visible: bool) {
        tracing::info!(target: "view", id = modal.element_id(), visible, "modal");
    }

    fn set_controls_disabled(&self, disabled: bool) {
        tracing::info!(target: "view", disabled, "controls");
    }

    fn riddle_answer(&self) -> String {
        self.riddle_answer.borrow().clone()
    }

    fn set_riddle_answer(&self, value: &str) {
        *self.riddle_answer.borrow_mut() = value.to_string();
    }

    fn focus_riddle_answer(&self) {}

    fn render_event_choices(&self, choices: &[String]) {
        tracing::info!(target: "view", ?choices, "event choices");
    }

    fn render_companions(&self, companions: &[String]) {
        tracing::info!(target: "view", ?companions, "companions");
    }

    fn set_chateau_arrival_content(&self, html: &str) {
        tracing::debug!(target: "view", html, "chateau arrival");
    }

    fn show_message(&self, message: &str, kind: MessageKind) {
        match kind {
            MessageKind::Success => tracing::info!(target: "view", "{message}"),
            MessageKind::Error => tracing::warn!(target: "view", "{message}"),
        }
    }

    fn blur_active_element(&self) {}

    fn navigate(&self, url: &str) {
        tracing::info!(target: "view", url, "navigate");
    }
}

pub struct TerminalMap;

impl MapPort for TerminalMap {
    fn send(&self, message: MapMessage) {
        match serde_json::to_string(&message) {
            Ok(json) => tracing::info!(target: "map", "{json}"),
            Err(e) => tracing::error!(target: "map", error = %e, "Unencodable map message"),
        }
    }
}

/// Tracks volume and play state for both tracks without producing sound
#[derive(Default)]
pub struct SoftwareMixer {
    volumes: RefCell<HashMap<Track, Volume>>,
    playing: RefCell<HashMap<Track, bool>>,
    last_logged: Cell<Option<(Track, u8)>>,
}

impl SoftwareMixer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self, track: Track) -> bool {
        self.playing.borrow().get(&track).copied().unwrap_or(false)
    }
}

#[async_trait::async_trait(?Send)]
impl AudioPort for SoftwareMixer {
    fn volume(&self, track: Track) -> Volume {
        self.volumes
            .borrow()
            .get(&track)
            .copied()
            .unwrap_or(Volume::FULL)
    }

    fn set_volume(&self, track: Track, volume: Volume) {
        self.volumes.borrow_mut().insert(track, volume);
        // Fades write every tick; log whole percents only
        let percent = (volume.value() * 100.0).round() as u8;
        if self.last_logged.replace(Some((track, percent))) != Some((track, percent)) {
            tracing::debug!(target: "audio", ?track, percent, "volume");
        }
    }

    async fn play(&self, track: Track) -> Result<(), AudioError> {
        self.playing.borrow_mut().insert(track, true);
        tracing::info!(target: "audio", id = track.element_id(), "play");
        Ok(())
    }

    fn pause(&self, track: Track) {
        self.playing.borrow_mut().insert(track, false);
        tracing::info!(target: "audio", id = track.element_id(), "pause");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::FutureExt;

    #[test]
    fn mixer_tracks_play_state_and_volume() {
        let mixer = SoftwareMixer::new();
        assert_eq!(mixer.volume(Track::Mystery), Volume::FULL);

        mixer.set_volume(Track::Mystery, Volume::from_percent(20));
        mixer.play(Track::Mystery).now_or_never();
        mixer.pause(Track::Primary);

        assert_eq!(mixer.volume(Track::Mystery), Volume::from_percent(20));
        assert!(mixer.is_playing(Track::Mystery));
        assert!(!mixer.is_playing(Track::Primary));
    }

    #[test]
    fn view_keeps_the_riddle_answer() {
        let view = TerminalView::new();
        view.set_riddle_answer("bordeaux");
        assert_eq!(view.riddle_answer(), "bordeaux");
    }
}
