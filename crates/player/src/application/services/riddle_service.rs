//! Riddle controller

use std::rc::Rc;

use chateauquest_shared::{MapMessage, RiddleOutcome};

use crate::application::api::GameApi;
use crate::application::services::{AudioService, ModalService};
use crate::ports::outbound::{MapPort, MessageKind, ViewPort};
use crate::ui::presentation::messages;
use crate::ui::presentation::StatsPresenter;

pub struct RiddleService {
    api: GameApi,
    view: Rc<dyn ViewPort>,
    map: Rc<dyn MapPort>,
    modals: Rc<ModalService>,
    audio: Rc<AudioService>,
    stats: StatsPresenter,
    mystery_music_threshold: u32,
}

impl RiddleService {
    pub fn new(
        api: GameApi,
        view: Rc<dyn ViewPort>,
        map: Rc<dyn MapPort>,
        modals: Rc<ModalService>,
        audio: Rc<AudioService>,
        mystery_music_threshold: u32,
    ) -> Self {
        let stats = StatsPresenter::new(Rc::clone(&view));
        Self {
            api,
            view,
            map,
            modals,
            audio,
            stats,
            mystery_music_threshold,
        }
    }

    /// Submit whatever is in the answer box
    pub async fn submit_from_view(&self) {
        let answer = self.view.riddle_answer();
        self.submit_answer(&answer).await;
    }

    /// Answers are compared trimmed and lower-cased. An empty answer never
    /// reaches the server. On failure the modal stays open for another try.
    pub async fn submit_answer(&self, text: &str) {
        let answer = text.trim().to_lowercase();
        if answer.is_empty() {
            self.view
                .show_message(messages::RIDDLE_EMPTY, MessageKind::Error);
            return;
        }

        match self.api.solve_riddle(&answer).await {
            Ok(outcome) if outcome.success => self.apply_success(&outcome),
            Ok(outcome) => {
                let text = outcome.failure_message().unwrap_or(messages::RIDDLE_FAILED);
                tracing::debug!(message = text, "Riddle answer rejected");
                self.view.show_message(text, MessageKind::Error);
            }
            Err(e) => {
                tracing::error!(error = %e, "Riddle submission failed");
                self.view
                    .show_message(messages::RIDDLE_FAILED, MessageKind::Error);
            }
        }
    }

    fn apply_success(&self, outcome: &RiddleOutcome) {
        if let Some((visited, total)) = outcome.cities_progress() {
            self.stats.show_cities(visited, total);
        }
        if outcome
            .cities_visited
            .is_some_and(|visited| visited >= self.mystery_music_threshold)
        {
            self.audio.switch_to_mystery_music();
        }

        self.modals.close_riddle();

        if let Some(message) = &outcome.message {
            self.view.show_message(message, MessageKind::Success);
        }

        if let Some(companions) = &outcome.companions {
            self.stats.show_companions(companions);
            if !companions.is_empty() {
                self.map.send(MapMessage::UpdateCompanions {
                    companions: companions.clone(),
                });
            }
        }

        if let Some(location) = outcome.revealed_location() {
            self.map
                .send(MapMessage::RevealMysteriousLocation { location });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::FadeSettings;
    use crate::infrastructure::platform::mock::ManualPlatform;
    use crate::ports::outbound::testing::{FakeMixer, RecordingMap, RecordingView};
    use crate::ports::outbound::{ApiError, AudioPort, MockRawApiPort, ModalKind, TextField, Track};
    use crate::state::InputState;
    use chateauquest_domain::{Coordinates, Volume};
    use futures_util::FutureExt;
    use serde_json::{json, Value};

    struct Fixture {
        service: RiddleService,
        view: Rc<RecordingView>,
        map: Rc<RecordingMap>,
        mixer: Rc<FakeMixer>,
        platform: Rc<ManualPlatform>,
        input: Rc<InputState>,
        modals: Rc<ModalService>,
    }

    fn fixture(raw: MockRawApiPort) -> Fixture {
        let view = Rc::new(RecordingView::new());
        let map = Rc::new(RecordingMap::new());
        let mixer = Rc::new(FakeMixer::new());
        let platform = Rc::new(ManualPlatform::new());
        let input = Rc::new(InputState::new());
        let modals = Rc::new(ModalService::new(view.clone(), input.clone()));
        let audio = Rc::new(AudioService::new(
            mixer.clone(),
            platform.clone(),
            view.clone(),
            FadeSettings::default(),
            Volume::default(),
        ));
        audio.initialize();
        let service = RiddleService::new(
            GameApi::new(Rc::new(raw)),
            view.clone(),
            map.clone(),
            modals.clone(),
            audio,
            5,
        );
        Fixture {
            service,
            view,
            map,
            mixer,
            platform,
            input,
            modals,
        }
    }

    fn responding(body: Value) -> MockRawApiPort {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .returning(move |_, _| Ok(body.clone()));
        raw
    }

    #[test]
    fn blank_answer_sends_nothing() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json().times(0);
        let f = fixture(raw);

        f.service.submit_answer("   ").now_or_never();

        assert_eq!(
            f.view.last_message(),
            Some((messages::RIDDLE_EMPTY.to_string(), MessageKind::Error))
        );
    }

    #[test]
    fn answer_is_normalized_before_sending() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .withf(|path, body| path == "/solve_riddle" && body == &json!({ "answer": "la seine" }))
            .times(1)
            .returning(|_, _| Ok(json!({ "success": false, "message": "Not quite" })));
        let f = fixture(raw);

        f.service.submit_answer("  La Seine ").now_or_never();
    }

    #[test]
    fn fifth_city_crossfades_and_releases_movement() {
        let f = fixture(responding(json!({
            "success": true,
            "message": "Correct!",
            "cities_visited": 5,
            "total_cities": 8
        })));
        f.modals.open_riddle(Some("Paris"), "riddle");
        let _ = f.mixer.play(Track::Primary).now_or_never();

        f.service.submit_answer("seine").now_or_never();
        f.platform.run_until_idle();

        assert!(!f.mixer.is_playing(Track::Primary));
        assert!(f.mixer.volume(Track::Primary).value() <= 0.1);
        let mystery = f.mixer.volume(Track::Mystery).value();
        assert!(mystery >= 0.5 - 1e-9 && mystery < 0.6, "{mystery}");
        assert!(!f.view.is_visible(ModalKind::Riddle));
        assert!(f.input.can_move());
        assert_eq!(f.view.text(TextField::CitiesVisited).as_deref(), Some("5/8"));
        assert_eq!(
            f.view.last_message(),
            Some(("Correct!".to_string(), MessageKind::Success))
        );
    }

    #[test]
    fn below_threshold_keeps_primary_music() {
        let f = fixture(responding(json!({
            "success": true,
            "cities_visited": 4,
            "total_cities": 8
        })));

        f.service.submit_answer("lyon").now_or_never();
        f.platform.run_until_idle();

        assert!(f.mixer.play_calls().is_empty());
        assert_eq!(f.platform.pending_tasks(), 0);
    }

    #[test]
    fn companions_and_mysterious_location_reach_the_map() {
        let f = fixture(responding(json!({
            "success": true,
            "companions": ["Marie", "Jacques"],
            "mysterious_location_revealed": true,
            "mysterious_location": [43.6, 1.44]
        })));

        f.service.submit_answer("garonne").now_or_never();

        assert_eq!(
            f.view.companions(),
            Some(vec!["Marie".to_string(), "Jacques".to_string()])
        );
        assert_eq!(
            f.map.sent(),
            vec![
                MapMessage::UpdateCompanions {
                    companions: vec!["Marie".into(), "Jacques".into()]
                },
                MapMessage::RevealMysteriousLocation {
                    location: Coordinates::new(43.6, 1.44)
                },
            ]
        );
    }

    #[test]
    fn empty_companion_list_is_rendered_but_not_sent() {
        let f = fixture(responding(json!({ "success": true, "companions": [] })));

        f.service.submit_answer("rhone").now_or_never();

        assert_eq!(f.view.companions(), Some(vec![]));
        assert!(f.map.sent().is_empty());
    }

    #[test]
    fn wrong_answer_keeps_modal_open() {
        let f = fixture(responding(json!({
            "success": false,
            "message": "Incorrect answer. Try again!"
        })));
        f.modals.open_riddle(None, "riddle");

        f.service.submit_answer("loire").now_or_never();

        assert!(f.modals.is_open(ModalKind::Riddle));
        assert!(!f.input.can_move());
        assert_eq!(
            f.view.last_message(),
            Some(("Incorrect answer. Try again!".to_string(), MessageKind::Error))
        );
    }

    #[test]
    fn transport_failure_keeps_modal_open() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .returning(|_, _| Err(ApiError::RequestFailed("timeout".into())));
        let f = fixture(raw);
        f.modals.open_riddle(None, "riddle");

        f.service.submit_answer("loire").now_or_never();

        assert!(f.modals.is_open(ModalKind::Riddle));
        assert_eq!(
            f.view.last_message(),
            Some((messages::RIDDLE_FAILED.to_string(), MessageKind::Error))
        );
    }

    #[test]
    fn submit_from_view_reads_the_answer_box() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .withf(|_, body| body == &json!({ "answer": "marseille" }))
            .times(1)
            .returning(|_, _| Ok(json!({ "success": true })));
        let f = fixture(raw);
        f.view.set_riddle_answer("Marseille");

        f.service.submit_from_view().now_or_never();
    }
}
