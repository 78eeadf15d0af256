use std::rc::Rc;

use chateauquest_domain::Volume;
use chateauquest_shared::EventPrompt;

use crate::application::api::GameApi;
use crate::application::services::{
    AudioService, CompletionService, EventService, ModalService, MoveService, RiddleService,
};
use crate::ports::outbound::{AudioPort, MapPort, PlatformPort, RawApiPort, ViewPort};
use crate::state::InputState;
use crate::ui::presentation::{ChateauArrival, InputDispatcher};

/// Configuration types for the player runner.
pub mod config {
    use std::str::FromStr;

    use crate::application::services::FadeSettings;

    pub const SERVER_URL_ENV: &str = "CHATEAUQUEST_SERVER_URL";
    pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

    /// Whether document clicks should pull focus away from the map frame
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub enum FocusPolicy {
        #[default]
        BlurOnClick,
        KeepFocus,
    }

    impl FromStr for FocusPolicy {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "blur" | "blur-on-click" => Ok(Self::BlurOnClick),
                "keep" | "keep-focus" => Ok(Self::KeepFocus),
                other => Err(format!("unknown focus policy: {other}")),
            }
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    pub struct ClientConfig {
        /// Base URL of the game server; empty means same origin
        pub server_url: String,
        pub move_delay_ms: u64,
        pub mystery_music_threshold: u32,
        pub redirect_delay_ms: u64,
        pub initial_volume: f64,
        pub fade: FadeSettings,
        pub focus: FocusPolicy,
    }

    impl Default for ClientConfig {
        fn default() -> Self {
            Self {
                server_url: DEFAULT_SERVER_URL.to_string(),
                move_delay_ms: 100,
                mystery_music_threshold: 5,
                redirect_delay_ms: 2_000,
                initial_volume: 0.5,
                fade: FadeSettings::default(),
                focus: FocusPolicy::default(),
            }
        }
    }

    impl ClientConfig {
        /// Browser build: requests go to the page's own origin
        pub fn same_origin() -> Self {
            Self {
                server_url: String::new(),
                ..Self::default()
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        pub fn from_env() -> Self {
            let server_url = std::env::var(SERVER_URL_ENV)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
            Self {
                server_url,
                ..Self::default()
            }
        }

        pub fn blur_on_click(&self) -> bool {
            self.focus == FocusPolicy::BlurOnClick
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn defaults_match_the_game_page() {
            let config = ClientConfig::default();
            assert_eq!(config.move_delay_ms, 100);
            assert_eq!(config.mystery_music_threshold, 5);
            assert_eq!(config.redirect_delay_ms, 2_000);
            assert_eq!(config.fade.tick_ms, 100);
            assert!(config.blur_on_click());
        }

        #[test]
        fn focus_policy_parses() {
            assert_eq!("Keep".parse(), Ok(FocusPolicy::KeepFocus));
            assert_eq!(" blur ".parse(), Ok(FocusPolicy::BlurOnClick));
            assert!("sideways".parse::<FocusPolicy>().is_err());
        }
    }
}

use config::ClientConfig;

pub struct RunnerDeps {
    pub raw_api: Rc<dyn RawApiPort>,
    pub view: Rc<dyn ViewPort>,
    pub map: Rc<dyn MapPort>,
    pub audio: Rc<dyn AudioPort>,
    pub platform: Rc<dyn PlatformPort>,
    pub config: ClientConfig,
}

/// Composition root for one game page
///
/// Owns the shared input state and every controller, wired against the
/// ports supplied by the platform adapters.
pub struct GameClient {
    pub input: Rc<InputState>,
    pub modals: Rc<ModalService>,
    pub audio: Rc<AudioService>,
    pub mover: Rc<MoveService>,
    pub riddles: Rc<RiddleService>,
    pub events: Rc<EventService>,
    pub completion: Rc<CompletionService>,
    pub dispatcher: Rc<InputDispatcher>,
    api: GameApi,
    platform: Rc<dyn PlatformPort>,
}

impl GameClient {
    pub fn new(deps: RunnerDeps) -> Self {
        let RunnerDeps {
            raw_api,
            view,
            map,
            audio,
            platform,
            config,
        } = deps;

        let api = GameApi::new(raw_api);
        let input = Rc::new(InputState::new());
        let modals = Rc::new(ModalService::new(Rc::clone(&view), Rc::clone(&input)));
        let audio = Rc::new(AudioService::new(
            audio,
            Rc::clone(&platform),
            Rc::clone(&view),
            config.fade,
            Volume::clamped(config.initial_volume),
        ));
        let mover = Rc::new(MoveService::new(
            api.clone(),
            Rc::clone(&input),
            Rc::clone(&view),
            Rc::clone(&map),
            Rc::clone(&platform),
            Rc::clone(&modals),
            ChateauArrival::default(),
            config.redirect_delay_ms,
        ));
        let riddles = Rc::new(RiddleService::new(
            api.clone(),
            Rc::clone(&view),
            Rc::clone(&map),
            Rc::clone(&modals),
            Rc::clone(&audio),
            config.mystery_music_threshold,
        ));
        let events = Rc::new(EventService::new(
            api.clone(),
            Rc::clone(&view),
            Rc::clone(&modals),
        ));
        let completion = Rc::new(CompletionService::new(
            api.clone(),
            Rc::clone(&view),
            Rc::clone(&platform),
            config.redirect_delay_ms,
        ));
        let dispatcher = Rc::new(InputDispatcher::new(
            Rc::clone(&input),
            Rc::clone(&mover),
            Rc::clone(&audio),
            Rc::clone(&platform),
            view,
            config.move_delay_ms,
            config.blur_on_click(),
        ));

        Self {
            input,
            modals,
            audio,
            mover,
            riddles,
            events,
            completion,
            dispatcher,
            api,
            platform,
        }
    }

    /// Page-load sequence: log the server snapshot, set up audio and try
    /// to start the background music.
    pub async fn start(&self) {
        self.refresh_state().await;
        self.audio.initialize();
        self.audio.start_background_music().await;
    }

    /// Fetch the server's game snapshot and log it
    pub async fn refresh_state(&self) {
        match self.api.fetch_state().await {
            Ok(state) => tracing::info!(%state, "Game state"),
            Err(e) => tracing::error!(error = %e, "Failed to fetch game state"),
        }
    }

    // The handles below run a controller on the local executor, for
    // callers (DOM listeners, JS exports) that cannot await.

    pub fn spawn_riddle_submit(&self) {
        let riddles = Rc::clone(&self.riddles);
        self.platform.spawn_local(Box::pin(async move {
            riddles.submit_from_view().await;
        }));
    }

    pub fn spawn_event_choice(&self, choice: String) {
        let events = Rc::clone(&self.events);
        self.platform.spawn_local(Box::pin(async move {
            events.choose_event(&choice).await;
        }));
    }

    pub fn spawn_complete_game(&self) {
        let completion = Rc::clone(&self.completion);
        self.platform.spawn_local(Box::pin(async move {
            completion.complete_game().await;
        }));
    }

    pub fn show_event(&self, event: &EventPrompt) {
        self.events.show_event(event);
    }
}
