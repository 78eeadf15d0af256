//! Quest completion from the château-arrival modal

use std::rc::Rc;

use crate::application::api::{paths, GameApi};
use crate::application::services::navigate_after;
use crate::ports::outbound::{MessageKind, PlatformPort, ViewPort};
use crate::ui::presentation::messages;

pub struct CompletionService {
    api: GameApi,
    view: Rc<dyn ViewPort>,
    platform: Rc<dyn PlatformPort>,
    redirect_delay_ms: u64,
}

impl CompletionService {
    pub fn new(
        api: GameApi,
        view: Rc<dyn ViewPort>,
        platform: Rc<dyn PlatformPort>,
        redirect_delay_ms: u64,
    ) -> Self {
        Self {
            api,
            view,
            platform,
            redirect_delay_ms,
        }
    }

    pub async fn complete_game(&self) {
        match self.api.complete_game().await {
            Ok(outcome) if outcome.success => {
                self.view
                    .show_message(messages::COMPLETION_CONFIRMED, MessageKind::Success);
                navigate_after(
                    &self.platform,
                    &self.view,
                    paths::LEADERBOARD,
                    self.redirect_delay_ms,
                );
            }
            Ok(outcome) => {
                tracing::warn!(error = ?outcome.error, "Game completion rejected");
                self.view
                    .show_message(messages::COMPLETION_FAILED, MessageKind::Error);
            }
            Err(e) => {
                tracing::error!(error = %e, "Game completion failed");
                self.view
                    .show_message(messages::COMPLETION_FAILED, MessageKind::Error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::ManualPlatform;
    use crate::ports::outbound::testing::RecordingView;
    use crate::ports::outbound::{ApiError, MockRawApiPort};
    use futures_util::FutureExt;
    use mockall::Sequence;
    use serde_json::json;

    fn service(raw: MockRawApiPort) -> (CompletionService, Rc<RecordingView>, Rc<ManualPlatform>) {
        let view = Rc::new(RecordingView::new());
        let platform = Rc::new(ManualPlatform::new());
        let service = CompletionService::new(
            GameApi::new(Rc::new(raw)),
            view.clone(),
            platform.clone(),
            2_000,
        );
        (service, view, platform)
    }

    #[test]
    fn success_navigates_to_leaderboard_after_delay() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_empty()
            .withf(|path| path == "/complete_game")
            .times(1)
            .returning(|_| Ok(json!({ "success": true })));
        let (service, view, platform) = service(raw);

        service.complete_game().now_or_never();
        assert!(view.navigations().is_empty());
        platform.run_until_idle();

        assert_eq!(
            view.messages(),
            vec![(messages::COMPLETION_CONFIRMED.to_string(), MessageKind::Success)]
        );
        assert_eq!(platform.sleeps(), vec![2_000]);
        assert_eq!(view.navigations(), vec!["/leaderboard"]);
    }

    #[test]
    fn rejection_and_transport_failure_show_error() {
        let mut seq = Sequence::new();
        let mut raw = MockRawApiPort::new();
        raw.expect_post_empty()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(json!({ "success": false, "error": "Not at the château" })));
        raw.expect_post_empty()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(ApiError::RequestFailed("offline".into())));
        let (service, view, platform) = service(raw);

        service.complete_game().now_or_never();
        service.complete_game().now_or_never();
        platform.run_until_idle();

        assert_eq!(
            view.messages(),
            vec![
                (messages::COMPLETION_FAILED.to_string(), MessageKind::Error),
                (messages::COMPLETION_FAILED.to_string(), MessageKind::Error),
            ]
        );
        assert!(view.navigations().is_empty());
    }
}
