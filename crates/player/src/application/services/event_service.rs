//! Random-event controller

use std::rc::Rc;

use chateauquest_shared::{EventOutcome, EventPrompt};

use crate::application::api::GameApi;
use crate::application::services::ModalService;
use crate::ports::outbound::{MessageKind, TextField, ViewPort};
use crate::ui::presentation::stats::EXPLORING_LOCATION;
use crate::ui::presentation::StatsPresenter;

pub struct EventService {
    api: GameApi,
    view: Rc<dyn ViewPort>,
    modals: Rc<ModalService>,
    stats: StatsPresenter,
}

impl EventService {
    pub fn new(api: GameApi, view: Rc<dyn ViewPort>, modals: Rc<ModalService>) -> Self {
        let stats = StatsPresenter::new(Rc::clone(&view));
        Self {
            api,
            view,
            modals,
            stats,
        }
    }

    pub fn show_event(&self, event: &EventPrompt) {
        tracing::debug!(title = %event.title, choices = event.choices.len(), "Showing event");
        self.modals.open_event(event);
    }

    /// Send the chosen option. A transport failure closes the modal anyway
    /// so the player is never stuck behind it.
    pub async fn choose_event(&self, choice: &str) {
        match self.api.choose_event(choice).await {
            Ok(outcome) if outcome.success => {
                self.apply(&outcome);
                self.modals.close_event();
            }
            Ok(outcome) => {
                let text = outcome.failure_message().unwrap_or("Event could not be resolved");
                tracing::warn!(message = text, "Event choice rejected");
                self.view.show_message(text, MessageKind::Error);
            }
            Err(e) => {
                tracing::error!(error = %e, choice, "Event choice failed");
                self.modals.close_event();
            }
        }
    }

    fn apply(&self, outcome: &EventOutcome) {
        if let Some(moves) = outcome.moves {
            self.view.set_text(TextField::MovesLabel, &moves.to_string());
            self.stats.show_moves(moves);
        }
        if let Some(stamina) = outcome.stamina {
            self.stats.show_stamina(stamina);
        }
        if let Some((visited, total)) = outcome.cities_progress() {
            self.stats.show_cities(visited, total);
        }
        let location = outcome
            .current_city
            .as_deref()
            .unwrap_or(EXPLORING_LOCATION);
        self.stats.show_location(location);
        if let Some(score) = outcome.score {
            self.stats.show_score(score);
        }
        self.stats
            .show_companions(outcome.companions.as_deref().unwrap_or_default());
    }
}
