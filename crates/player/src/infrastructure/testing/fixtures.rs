//! Shared fixtures for client-level tests.

use std::rc::Rc;

use crate::infrastructure::platform::mock::ManualPlatform;
use crate::ports::outbound::testing::{FakeMixer, RecordingMap, RecordingView};
use crate::ports::outbound::MockRawApiPort;
use crate::runner::config::ClientConfig;
use crate::runner::{GameClient, RunnerDeps};

/// A `GameClient` plus handles on every double it was built with
pub struct TestHarness {
    pub client: GameClient,
    pub view: Rc<RecordingView>,
    pub map: Rc<RecordingMap>,
    pub mixer: Rc<FakeMixer>,
    pub platform: Rc<ManualPlatform>,
}

impl TestHarness {
    pub fn new(raw: MockRawApiPort) -> Self {
        Self::with_config(raw, ClientConfig::default())
    }

    pub fn with_config(raw: MockRawApiPort, config: ClientConfig) -> Self {
        let view = Rc::new(RecordingView::new());
        let map = Rc::new(RecordingMap::new());
        let mixer = Rc::new(FakeMixer::new());
        let platform = Rc::new(ManualPlatform::new());
        let client = GameClient::new(RunnerDeps {
            raw_api: Rc::new(raw),
            view: view.clone(),
            map: map.clone(),
            audio: mixer.clone(),
            platform: platform.clone(),
            config,
        });
        Self {
            client,
            view,
            map,
            mixer,
            platform,
        }
    }

    /// Drain every spawned task (moves, fades, redirects)
    pub fn settle(&self) {
        self.platform.run_until_idle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{
        ApiError, AudioPort, MessageKind, ModalKind, TextField, Track, ViewPort,
    };
    use chateauquest_domain::{Direction, Volume};
    use chateauquest_shared::{EventChoice, EventPrompt, MapMessage};
    use futures_util::FutureExt;
    use mockall::Sequence;
    use serde_json::json;

    #[test]
    fn start_fetches_state_and_starts_music_at_half_volume() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .withf(|path| path == "/state")
            .times(1)
            .returning(|_| Ok(json!({ "moves": 0, "cities_visited": 0 })));
        let h = TestHarness::new(raw);

        h.client.start().now_or_never();

        assert!(h.mixer.is_playing(Track::Primary));
        assert_eq!(h.mixer.volume(Track::Primary), Volume::clamped(0.5));
        assert_eq!(h.mixer.volume(Track::Mystery), Volume::clamped(0.5));
    }

    #[test]
    fn start_survives_unreachable_server_and_blocked_autoplay() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .returning(|_| Err(ApiError::RequestFailed("refused".into())));
        let h = TestHarness::new(raw);
        h.mixer.reject_playback(true);

        h.client.start().now_or_never();
        assert!(h.client.audio.autoplay_blocked());

        h.mixer.reject_playback(false);
        h.client.dispatcher.on_document_click(false);
        h.settle();

        assert!(h.mixer.is_playing(Track::Primary));
        assert_eq!(h.view.blur_count(), 1);
    }

    #[test]
    fn keyboard_move_into_city_then_solve_riddle() {
        let mut seq = Sequence::new();
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .withf(|path, body| path == "/move" && body == &json!({ "direction": "w" }))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(json!({
                    "position": [45.76, 4.83],
                    "nearest_city": "Lyon",
                    "distance": 0.4,
                    "in_city": true,
                    "current_riddle": "Two rivers meet in me"
                }))
            });
        raw.expect_post_json()
            .withf(|path, _| path == "/solve_riddle")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(json!({
                    "success": true,
                    "message": "Correct!",
                    "cities_visited": 1,
                    "total_cities": 5,
                    "companions": ["Marie"]
                }))
            });
        let h = TestHarness::new(raw);

        h.client.dispatcher.on_key_down("w", false);
        h.settle();

        assert!(h.client.modals.is_open(ModalKind::Riddle));
        assert_eq!(
            h.client.dispatcher.on_control_button("D"),
            None,
            "riddle must gate movement"
        );

        h.view.set_riddle_answer("Rhône");
        h.client.spawn_riddle_submit();
        h.settle();

        assert!(h.client.input.can_move());
        assert_eq!(h.view.text(TextField::CitiesVisited).as_deref(), Some("1/5"));
        assert_eq!(
            h.map.sent_of_kind("updateCompanions"),
            vec![MapMessage::UpdateCompanions {
                companions: vec!["Marie".into()]
            }]
        );
    }

    #[test]
    fn event_choice_through_the_client() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .withf(|path, body| path == "/handle_event" && body == &json!({ "choice": "Rest" }))
            .times(1)
            .returning(|_, _| Ok(json!({ "success": true, "moves": 3, "stamina": 20, "score": 5 })));
        let h = TestHarness::new(raw);

        h.client.show_event(&EventPrompt {
            title: "Inn".into(),
            description: "A warm fire".into(),
            choices: vec![EventChoice { text: "Rest".into() }],
        });
        assert!(!h.client.input.can_move());

        h.client.spawn_event_choice("Rest".into());
        h.settle();

        assert!(h.client.input.can_move());
        assert_eq!(
            h.view.stamina_bar(),
            Some(("20%".to_string(), "#F44336".to_string()))
        );
    }

    #[test]
    fn complete_from_arrival_modal_redirects() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .returning(|_, _| Ok(json!({ "at_chateau": true, "chateau_revealed": true })));
        raw.expect_post_empty()
            .withf(|path| path == "/complete_game")
            .returning(|_| Ok(json!({ "success": true })));
        let h = TestHarness::new(raw);

        h.client.mover.move_to(Direction::South).now_or_never();
        assert!(h.view.is_visible(ModalKind::ChateauArrival));
        assert!(h.client.input.can_move());

        h.client.spawn_complete_game();
        h.settle();

        assert_eq!(
            h.view.last_message(),
            Some((
                "Congratulations! Your quest is complete!".to_string(),
                MessageKind::Success
            ))
        );
        assert_eq!(h.view.navigations(), vec!["/leaderboard"]);
    }
}
