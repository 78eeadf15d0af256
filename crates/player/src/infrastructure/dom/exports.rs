//! Functions the page template calls directly

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use chateauquest_shared::EventPrompt;

use crate::runner::GameClient;

thread_local! {
    static CLIENT: RefCell<Option<Rc<GameClient>>> = const { RefCell::new(None) };
}

pub(super) fn install(client: Rc<GameClient>) {
    CLIENT.with(|slot| *slot.borrow_mut() = Some(client));
}

fn with_client(f: impl FnOnce(&GameClient)) -> Result<(), JsValue> {
    let client = CLIENT
        .with(|slot| slot.borrow().clone())
        .ok_or_else(|| JsValue::from_str("game client is not running"))?;
    f(&client);
    Ok(())
}

#[wasm_bindgen(js_name = showEventModal)]
pub fn show_event_modal(event: JsValue) -> Result<(), JsValue> {
    let event: EventPrompt = serde_wasm_bindgen::from_value(event)?;
    with_client(|client| client.show_event(&event))
}

#[wasm_bindgen(js_name = completeGameAndRedirect)]
pub fn complete_game_and_redirect() -> Result<(), JsValue> {
    with_client(GameClient::spawn_complete_game)
}

#[wasm_bindgen(js_name = submitRiddleAnswer)]
pub fn submit_riddle_answer() -> Result<(), JsValue> {
    with_client(GameClient::spawn_riddle_submit)
}

#[wasm_bindgen(js_name = closeRiddleModal)]
pub fn close_riddle_modal() -> Result<(), JsValue> {
    with_client(|client| client.modals.close_riddle())
}
