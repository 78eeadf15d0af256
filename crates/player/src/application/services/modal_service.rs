//! Modal visibility and movement gating
//!
//! Each modal moves hidden -> visible -> hidden independently. Opening the
//! riddle or event modal freezes movement and greys out the control panel;
//! closing either releases them again. Château modals are informational and
//! never touch the movement gate, so several modals may be visible at once.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use chateauquest_shared::EventPrompt;

use crate::ports::outbound::{ModalKind, TextField, ViewPort};
use crate::state::InputState;

pub struct ModalService {
    view: Rc<dyn ViewPort>,
    input: Rc<InputState>,
    open: RefCell<HashSet<ModalKind>>,
}

impl ModalService {
    pub fn new(view: Rc<dyn ViewPort>, input: Rc<InputState>) -> Self {
        Self {
            view,
            input,
            open: RefCell::new(HashSet::new()),
        }
    }

    pub fn is_open(&self, modal: ModalKind) -> bool {
        self.open.borrow().contains(&modal)
    }

    /// Show the riddle for the city just entered with an empty, focused
    /// answer box
    pub fn open_riddle(&self, city: Option<&str>, riddle: &str) {
        if let Some(city) = city {
            self.view.set_text(TextField::CityName, city);
        }
        self.view.set_text(TextField::RiddleText, riddle);
        self.show(ModalKind::Riddle);
        self.view.set_riddle_answer("");
        self.view.focus_riddle_answer();
    }

    pub fn close_riddle(&self) {
        self.hide(ModalKind::Riddle);
        self.view.set_riddle_answer("");
    }

    /// Overlay clicks close the riddle only when the overlay itself was hit,
    /// not a child bubbling up through it.
    pub fn on_overlay_click(&self, target_is_overlay: bool) {
        if target_is_overlay {
            self.close_riddle();
        }
    }

    pub fn open_event(&self, event: &EventPrompt) {
        self.view.set_text(TextField::EventTitle, &event.title);
        self.view
            .set_text(TextField::EventDescription, &event.description);
        self.view.render_event_choices(&event.choice_texts());
        self.show(ModalKind::Event);
    }

    pub fn close_event(&self) {
        self.hide(ModalKind::Event);
    }

    pub fn show_chateau_reveal(&self) {
        self.show(ModalKind::ChateauReveal);
    }

    pub fn show_chateau_arrival(&self, html: &str) {
        self.view.set_chateau_arrival_content(html);
        self.show(ModalKind::ChateauArrival);
    }

    pub fn close(&self, modal: ModalKind) {
        match modal {
            ModalKind::Riddle => self.close_riddle(),
            other => self.hide(other),
        }
    }

    fn show(&self, modal: ModalKind) {
        self.view.set_modal_visible(modal, true);
        self.open.borrow_mut().insert(modal);
        if modal.gates_movement() {
            self.input.set_can_move(false);
            self.view.set_controls_disabled(true);
        }
        tracing::debug!(?modal, "Modal opened");
    }

    fn hide(&self, modal: ModalKind) {
        self.view.set_modal_visible(modal, false);
        self.open.borrow_mut().remove(&modal);
        if modal.gates_movement() {
            self.input.set_can_move(true);
            self.view.set_controls_disabled(false);
        }
        tracing::debug!(?modal, "Modal closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::testing::RecordingView;
    use crate::ports::outbound::MockViewPort;
    use chateauquest_shared::EventChoice;
    use mockall::Sequence;

    fn service() -> (ModalService, Rc<RecordingView>, Rc<InputState>) {
        let view = Rc::new(RecordingView::new());
        let input = Rc::new(InputState::new());
        (ModalService::new(view.clone(), input.clone()), view, input)
    }

    #[test]
    fn riddle_modal_gates_movement_until_closed() {
        let (modals, view, input) = service();

        modals.open_riddle(Some("Lyon"), "What has roots nobody sees?");

        assert!(!input.can_move());
        assert!(view.controls_disabled());
        assert!(view.is_visible(ModalKind::Riddle));
        assert_eq!(view.text(TextField::CityName).as_deref(), Some("Lyon"));
        assert_eq!(view.riddle_focus_count(), 1);

        modals.close_riddle();

        assert!(input.can_move());
        assert!(!view.controls_disabled());
        assert!(!view.is_visible(ModalKind::Riddle));
    }

    #[test]
    fn riddle_is_filled_before_it_is_shown_and_focused() {
        let mut seq = Sequence::new();
        let mut view = MockViewPort::new();
        view.expect_set_text()
            .withf(|field, text| *field == TextField::CityName && text == "Lyon")
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        view.expect_set_text()
            .withf(|field, text| *field == TextField::RiddleText && text == "riddle")
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        view.expect_set_modal_visible()
            .withf(|modal, visible| *modal == ModalKind::Riddle && *visible)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        view.expect_set_controls_disabled()
            .withf(|disabled| *disabled)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        view.expect_set_riddle_answer()
            .withf(|value| value.is_empty())
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        view.expect_focus_riddle_answer()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        let input = Rc::new(InputState::new());
        let modals = ModalService::new(Rc::new(view), input.clone());

        modals.open_riddle(Some("Lyon"), "riddle");

        assert!(!input.can_move());
        assert!(modals.is_open(ModalKind::Riddle));
    }

    #[test]
    fn closing_riddle_clears_the_answer() {
        let (modals, view, _) = service();
        modals.open_riddle(None, "riddle");
        view.set_riddle_answer("a mountain");

        modals.close_riddle();

        assert_eq!(view.riddle_answer(), "");
    }

    #[test]
    fn overlay_click_on_child_keeps_riddle_open() {
        let (modals, view, input) = service();
        modals.open_riddle(None, "riddle");

        modals.on_overlay_click(false);
        assert!(view.is_visible(ModalKind::Riddle));
        assert!(!input.can_move());

        modals.on_overlay_click(true);
        assert!(!view.is_visible(ModalKind::Riddle));
        assert!(input.can_move());
    }

    #[test]
    fn event_modal_renders_one_button_per_choice() {
        let (modals, view, input) = service();
        let event = EventPrompt {
            title: "Storm".into(),
            description: "Dark clouds gather".into(),
            choices: vec![
                EventChoice { text: "Seek shelter".into() },
                EventChoice { text: "Press on".into() },
            ],
        };

        modals.open_event(&event);

        assert!(!input.can_move());
        assert!(modals.is_open(ModalKind::Event));
        assert_eq!(view.text(TextField::EventTitle).as_deref(), Some("Storm"));
        assert_eq!(view.event_choices(), vec!["Seek shelter", "Press on"]);
    }

    #[test]
    fn chateau_modals_do_not_touch_movement() {
        let (modals, view, input) = service();

        modals.show_chateau_reveal();
        modals.show_chateau_arrival("<h2>x</h2>");

        assert!(input.can_move());
        assert!(!view.controls_disabled());
        assert!(view.is_visible(ModalKind::ChateauReveal));
        assert!(view.is_visible(ModalKind::ChateauArrival));

        modals.close(ModalKind::ChateauReveal);
        assert!(!modals.is_open(ModalKind::ChateauReveal));
        assert!(modals.is_open(ModalKind::ChateauArrival));
    }
}
