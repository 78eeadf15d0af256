use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::ports::outbound::{MessageKind, ModalKind, TextField, ViewPort};

/// View double that remembers the last value written to every binding
#[derive(Default)]
pub struct RecordingView {
    texts: RefCell<HashMap<TextField, String>>,
    stamina_bar: RefCell<Option<(String, String)>>,
    modals: RefCell<HashMap<ModalKind, bool>>,
    controls_disabled: Cell<bool>,
    riddle_answer: RefCell<String>,
    riddle_focus_count: Cell<u32>,
    event_choices: RefCell<Vec<String>>,
    companions: RefCell<Option<Vec<String>>>,
    chateau_renders: RefCell<Vec<String>>,
    messages: RefCell<Vec<(String, MessageKind)>>,
    blur_count: Cell<u32>,
    navigations: RefCell<Vec<String>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, field: TextField) -> Option<String> {
        self.texts.borrow().get(&field).cloned()
    }

    /// `(width, color)` of the last stamina bar update
    pub fn stamina_bar(&self) -> Option<(String, String)> {
        self.stamina_bar.borrow().clone()
    }

    pub fn is_visible(&self, modal: ModalKind) -> bool {
        self.modals.borrow().get(&modal).copied().unwrap_or(false)
    }

    pub fn controls_disabled(&self) -> bool {
        self.controls_disabled.get()
    }

    pub fn riddle_focus_count(&self) -> u32 {
        self.riddle_focus_count.get()
    }

    pub fn event_choices(&self) -> Vec<String> {
        self.event_choices.borrow().clone()
    }

    /// `None` until the companion list has been rendered at least once
    pub fn companions(&self) -> Option<Vec<String>> {
        self.companions.borrow().clone()
    }

    /// Every château-arrival body rendered, in order
    pub fn chateau_renders(&self) -> Vec<String> {
        self.chateau_renders.borrow().clone()
    }

    pub fn messages(&self) -> Vec<(String, MessageKind)> {
        self.messages.borrow().clone()
    }

    pub fn last_message(&self) -> Option<(String, MessageKind)> {
        self.messages.borrow().last().cloned()
    }

    pub fn blur_count(&self) -> u32 {
        self.blur_count.get()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }
}

impl ViewPort for RecordingView {
    fn set_text(&self, field: TextField, text: &str) {
        self.texts.borrow_mut().insert(field, text.to_string());
    }

    fn set_stamina_bar(&self, width: &str, color: &str) {
        *self.stamina_bar.borrow_mut() = Some((width.to_string(), color.to_string()));
    }

    fn set_modal_visible(&self, modal: ModalKind, visible: bool) {
        self.modals.borrow_mut().insert(modal, visible);
    }

    fn set_controls_disabled(&self, disabled: bool) {
        self.controls_disabled.set(disabled);
    }

    fn riddle_answer(&self) -> String {
        self.riddle_answer.borrow().clone()
    }

    fn set_riddle_answer(&self, value: &str) {
        *self.riddle_answer.borrow_mut() = value.to_string();
    }

    fn focus_riddle_answer(&self) {
        self.riddle_focus_count.set(self.riddle_focus_count.get() + 1);
    }

    fn render_event_choices(&self, choices: &[String]) {
        *self.event_choices.borrow_mut() = choices.to_vec();
    }

    fn render_companions(&self, companions: &[String]) {
        *self.companions.borrow_mut() = Some(companions.to_vec());
    }

    fn set_chateau_arrival_content(&self, html: &str) {
        self.chateau_renders.borrow_mut().push(html.to_string());
    }

    fn show_message(&self, message: &str, kind: MessageKind) {
        self.messages.borrow_mut().push((message.to_string(), kind));
    }

    fn blur_active_element(&self) {
        self.blur_count.set(self.blur_count.get() + 1);
    }

    fn navigate(&self, url: &str) {
        self.navigations.borrow_mut().push(url.to_string());
    }
}
