//! Move controller
//!
//! Sends a move to the server and fans the response out to the map, the
//! stats panel and the modals. Each field of the response drives its own
//! update; several usually arrive together.

use std::rc::Rc;

use chateauquest_domain::Direction;
use chateauquest_shared::{MapMessage, MoveResponse};

use crate::application::api::GameApi;
use crate::application::services::{navigate_after, ModalService};
use crate::ports::outbound::{MapPort, MessageKind, PlatformPort, ViewPort};
use crate::state::InputState;
use crate::ui::presentation::chateau::ChateauArrival;
use crate::ui::presentation::messages;
use crate::ui::presentation::StatsPresenter;

pub struct MoveService {
    api: GameApi,
    input: Rc<InputState>,
    view: Rc<dyn ViewPort>,
    map: Rc<dyn MapPort>,
    platform: Rc<dyn PlatformPort>,
    modals: Rc<ModalService>,
    stats: StatsPresenter,
    chateau: ChateauArrival,
    redirect_delay_ms: u64,
}

impl MoveService {
    pub fn new(
        api: GameApi,
        input: Rc<InputState>,
        view: Rc<dyn ViewPort>,
        map: Rc<dyn MapPort>,
        platform: Rc<dyn PlatformPort>,
        modals: Rc<ModalService>,
        chateau: ChateauArrival,
        redirect_delay_ms: u64,
    ) -> Self {
        let stats = StatsPresenter::new(Rc::clone(&view));
        Self {
            api,
            input,
            view,
            map,
            platform,
            modals,
            stats,
            chateau,
            redirect_delay_ms,
        }
    }

    /// Move one step. Does nothing while a riddle or event modal is open.
    /// Transport failures leave every label as it was.
    pub async fn move_to(&self, direction: Direction) {
        if !self.input.can_move() {
            tracing::debug!(?direction, "Move ignored, input is gated");
            return;
        }

        match self.api.move_player(direction).await {
            Ok(response) => self.apply(&response),
            Err(e) => {
                tracing::error!(error = %e, ?direction, "Move request failed");
                self.view
                    .show_message(messages::MOVE_FAILED, MessageKind::Error);
            }
        }
    }

    fn apply(&self, response: &MoveResponse) {
        if let Some(error) = &response.error {
            tracing::warn!(%error, "Move rejected by server");
            self.view.show_message(error, MessageKind::Error);
            return;
        }

        if response.is_game_over() {
            let text = response
                .message
                .as_deref()
                .unwrap_or(messages::GAME_OVER_FALLBACK);
            self.view.show_message(text, MessageKind::Error);
        }

        if let Some(position) = response.position {
            self.map.send(MapMessage::update_position(position));
        }

        self.stats
            .show_nearest_city(response.nearest_city.as_deref(), response.distance);

        if let Some(stamina) = response.stamina {
            self.stats.show_stamina(stamina);
        }
        if let Some(score) = response.score {
            self.stats.show_score(score);
        }
        if let Some(moves) = response.moves {
            self.stats.show_moves(moves);
        }
        if let Some((visited, total)) = response.cities_progress() {
            self.stats.show_cities(visited, total);
        }
        if let Some(city) = &response.current_city {
            self.stats.show_location(city);
        }

        if response.is_chateau_revealed() {
            self.modals.show_chateau_reveal();
            if let Some(location) = response.chateau_location {
                self.map.send(MapMessage::RevealChateau { location });
            }
        }

        if response.is_at_chateau() {
            self.modals.show_chateau_arrival(&self.chateau.render());
        }

        if let Some(target) = response.completion_redirect() {
            self.view
                .show_message(messages::QUEST_COMPLETED, MessageKind::Success);
            navigate_after(&self.platform, &self.view, target, self.redirect_delay_ms);
        }

        if let Some(riddle) = response.city_riddle() {
            self.modals
                .open_riddle(response.nearest_city.as_deref(), riddle);
        }
    }
}
