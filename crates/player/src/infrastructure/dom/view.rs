//! `ViewPort` over the game page's elements

use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

use super::{cast, element_by_id, query, BindError};
use crate::ports::outbound::{MessageKind, ModalKind, TextField, ViewPort};
use crate::ui::presentation::stats::NO_COMPANIONS_PLACEHOLDER;

const FLASH_MESSAGE_TTL_MS: u32 = 5_000;

pub struct DomView {
    window: Window,
    document: Document,
    texts: HashMap<TextField, Element>,
    stamina_fill: HtmlElement,
    modals: HashMap<ModalKind, HtmlElement>,
    overlay: HtmlElement,
    riddle_answer: HtmlInputElement,
    event_choices: Element,
    companions: Element,
    chateau_content: Element,
    controls: Element,
    game_info: Element,
}

impl DomView {
    /// Resolve every element up front. Optional labels that are absent are
    /// skipped on update; anything else missing fails the bind.
    pub fn bind(window: &Window, document: &Document) -> Result<Self, BindError> {
        let mut texts = HashMap::new();
        for field in TextField::ALL {
            match document.get_element_by_id(field.element_id()) {
                Some(element) => {
                    texts.insert(field, element);
                }
                None if field.is_required() => {
                    return Err(BindError::MissingElement(format!("#{}", field.element_id())));
                }
                None => tracing::debug!(id = field.element_id(), "Optional label not on page"),
            }
        }

        let mut modals = HashMap::new();
        for modal in ModalKind::ALL {
            let element = element_by_id(document, modal.element_id())?;
            modals.insert(modal, cast::<HtmlElement>(element, modal.element_id())?);
        }

        Ok(Self {
            window: window.clone(),
            document: document.clone(),
            texts,
            stamina_fill: cast(element_by_id(document, "stamina-fill")?, "stamina-fill")?,
            modals,
            overlay: cast(element_by_id(document, "modalOverlay")?, "modalOverlay")?,
            riddle_answer: cast(element_by_id(document, "riddleAnswer")?, "riddleAnswer")?,
            event_choices: element_by_id(document, "event-modal-choices")?,
            companions: element_by_id(document, "companions-list")?,
            chateau_content: query(document, "#chateau-arrival .chateau-content")?,
            controls: query(document, ".controls")?,
            game_info: query(document, ".game-info")?,
        })
    }

    fn set_display(element: &HtmlElement, display: &str) {
        if let Err(e) = element.style().set_property("display", display) {
            tracing::warn!(error = ?e, "Failed to set display");
        }
    }

    fn create(&self, tag: &str) -> Option<Element> {
        match self.document.create_element(tag) {
            Ok(element) => Some(element),
            Err(e) => {
                tracing::warn!(tag, error = ?e, "Failed to create element");
                None
            }
        }
    }

    fn append(parent: &Element, child: &Element) {
        if let Err(e) = parent.append_child(child) {
            tracing::warn!(error = ?e, "Failed to append element");
        }
    }
}

impl ViewPort for DomView {
    fn set_text(&self, field: TextField, text: &str) {
        if let Some(element) = self.texts.get(&field) {
            element.set_text_content(Some(text));
        }
    }

    fn set_stamina_bar(&self, width: &str, color: &str) {
        let style = self.stamina_fill.style();
        if let Err(e) = style
            .set_property("width", width)
            .and_then(|_| style.set_property("background-color", color))
        {
            tracing::warn!(error = ?e, "Failed to style stamina bar");
        }
    }

    fn set_modal_visible(&self, modal: ModalKind, visible: bool) {
        let display = if visible { modal.display_style() } else { "none" };
        if let Some(element) = self.modals.get(&modal) {
            Self::set_display(element, display);
        }
        if modal == ModalKind::Riddle {
            Self::set_display(&self.overlay, display);
        }
    }

    fn set_controls_disabled(&self, disabled: bool) {
        if let Err(e) = self
            .controls
            .class_list()
            .toggle_with_force("disabled", disabled)
        {
            tracing::warn!(error = ?e, "Failed to toggle controls");
        }
    }

    fn riddle_answer(&self) -> String {
        self.riddle_answer.value()
    }

    fn set_riddle_answer(&self, value: &str) {
        self.riddle_answer.set_value(value);
    }

    fn focus_riddle_answer(&self) {
        if let Err(e) = self.riddle_answer.focus() {
            tracing::debug!(error = ?e, "Could not focus riddle answer");
        }
    }

    fn render_event_choices(&self, choices: &[String]) {
        self.event_choices.set_inner_html("");
        for choice in choices {
            let Some(button) = self.create("button") else {
                continue;
            };
            button.set_text_content(Some(choice));
            if let Err(e) = button.set_attribute("data-choice", choice) {
                tracing::warn!(error = ?e, "Failed to tag event choice");
            }
            Self::append(&self.event_choices, &button);
        }
    }

    fn render_companions(&self, companions: &[String]) {
        self.companions.set_inner_html("");
        if companions.is_empty() {
            if let Some(placeholder) = self.create("p") {
                placeholder.set_text_content(Some(NO_COMPANIONS_PLACEHOLDER));
                Self::append(&self.companions, &placeholder);
            }
            return;
        }
        for name in companions {
            if let Some(entry) = self.create("div") {
                entry.set_class_name("companion");
                entry.set_text_content(Some(name));
                Self::append(&self.companions, &entry);
            }
        }
    }

    fn set_chateau_arrival_content(&self, html: &str) {
        self.chateau_content.set_inner_html(html);
    }

    fn show_message(&self, message: &str, kind: MessageKind) {
        let Some(flash) = self.create("div") else {
            return;
        };
        flash.set_class_name(&format!("flash-message {}", kind.as_class()));
        flash.set_text_content(Some(message));

        let first = self.game_info.first_child();
        if let Err(e) = self.game_info.insert_before(&flash, first.as_ref()) {
            tracing::warn!(error = ?e, "Failed to show message");
            return;
        }
        Timeout::new(FLASH_MESSAGE_TTL_MS, move || flash.remove()).forget();
    }

    fn blur_active_element(&self) {
        if let Some(active) = self
            .document
            .active_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            if let Err(e) = active.blur() {
                tracing::debug!(error = ?e, "Blur failed");
            }
        }
    }

    fn navigate(&self, url: &str) {
        if let Err(e) = self.window.location().set_href(url) {
            tracing::error!(url, error = ?e, "Navigation failed");
        }
    }
}
