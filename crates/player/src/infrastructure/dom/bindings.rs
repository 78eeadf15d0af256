//! DOM event listeners feeding the client
//!
//! Listeners live as long as the page, so their closures are leaked with
//! `forget()`.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, KeyboardEvent};

use super::{element_by_id, BindError};
use crate::runner::GameClient;
use crate::ui::presentation::chateau::COMPLETE_GAME_ACTION;
use crate::ui::presentation::handlers::is_text_entry;

fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), BindError>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| BindError::Listener(format!("{event}: {e:?}")))?;
    closure.forget();
    Ok(())
}

fn target_element(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}

/// Input, textarea or content-editable: key presses there are typing and
/// clicks there keep focus
fn is_typing_target(event: &Event) -> bool {
    target_element(event).is_some_and(|element| {
        let editable = element
            .dyn_ref::<HtmlElement>()
            .is_some_and(|el| el.is_content_editable());
        is_text_entry(&element.tag_name(), editable)
    })
}

pub(super) fn attach(document: &Document, client: &Rc<GameClient>) -> Result<(), BindError> {
    let doc_target: &EventTarget = document.as_ref();

    let dispatcher = Rc::clone(&client.dispatcher);
    listen(doc_target, "keydown", move |event: KeyboardEvent| {
        let typing = is_typing_target(&event);
        if dispatcher.on_key_down(&event.key(), typing).prevents_default() {
            event.prevent_default();
        }
    })?;

    let dispatcher = Rc::clone(&client.dispatcher);
    listen(doc_target, "click", move |event: Event| {
        dispatcher.on_document_click(is_typing_target(&event));
    })?;

    let buttons = document
        .query_selector_all(".controls button")
        .map_err(|e| BindError::Listener(format!("control buttons: {e:?}")))?;
    for index in 0..buttons.length() {
        let Some(button) = buttons.item(index) else {
            continue;
        };
        let dispatcher = Rc::clone(&client.dispatcher);
        let label_source = button.clone();
        listen(&button, "click", move |_: Event| {
            let label = label_source.text_content().unwrap_or_default();
            dispatcher.on_control_button(&label);
        })?;
    }

    let overlay = element_by_id(document, "modalOverlay")?;
    let modals = Rc::clone(&client.modals);
    listen(&overlay, "click", move |event: Event| {
        let on_overlay = match (event.target(), event.current_target()) {
            (Some(target), Some(current)) => target == current,
            _ => false,
        };
        modals.on_overlay_click(on_overlay);
    })?;

    let answer = element_by_id(document, "riddleAnswer")?;
    let submitter = Rc::clone(client);
    listen(&answer, "keypress", move |event: KeyboardEvent| {
        if event.key() == "Enter" {
            event.prevent_default();
            submitter.spawn_riddle_submit();
        }
    })?;

    if let Some(button) = document.query_selector(".riddle-section button").ok().flatten() {
        let submitter = Rc::clone(client);
        listen(&button, "click", move |event: Event| {
            event.prevent_default();
            submitter.spawn_riddle_submit();
        })?;
    }

    let volume = element_by_id(document, "volumeControl")?;
    let audio = Rc::clone(&client.audio);
    listen(&volume, "input", move |event: Event| {
        let Some(input) = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        match input.value().trim().parse::<f64>() {
            Ok(percent) => audio.set_master_volume(percent.clamp(0.0, 100.0).round() as u8),
            Err(e) => tracing::warn!(value = %input.value(), error = %e, "Bad volume value"),
        }
    })?;

    let choices = element_by_id(document, "event-modal-choices")?;
    let chooser = Rc::clone(client);
    listen(&choices, "click", move |event: Event| {
        let choice = target_element(&event)
            .and_then(|el| el.closest("[data-choice]").ok().flatten())
            .and_then(|el| el.get_attribute("data-choice"));
        if let Some(choice) = choice {
            chooser.spawn_event_choice(choice);
        }
    })?;

    let arrival = element_by_id(document, "chateau-arrival")?;
    let completer = Rc::clone(client);
    let selector = format!("[data-action=\"{COMPLETE_GAME_ACTION}\"]");
    listen(&arrival, "click", move |event: Event| {
        let hit = target_element(&event)
            .and_then(|el| el.closest(&selector).ok().flatten())
            .is_some();
        if hit {
            completer.spawn_complete_game();
        }
    })?;

    Ok(())
}
