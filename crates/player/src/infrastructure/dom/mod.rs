//! Browser adapters over the server-rendered game page
//!
//! The page ships its markup with fixed element ids; these adapters bind
//! to that markup once at startup and implement the outbound ports on top
//! of it.

mod audio;
mod bindings;
mod exports;
mod map;
mod view;

pub use audio::DomAudio;
pub use map::FrameMap;
pub use view::DomView;

use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::infrastructure::http_client::ApiAdapter;
use crate::infrastructure::platform::create_platform;
use crate::runner::config::{ClientConfig, FocusPolicy};
use crate::runner::{GameClient, RunnerDeps};

/// Failure to attach to the page markup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("No global window")]
    NoWindow,
    #[error("Window has no document")]
    NoDocument,
    #[error("Missing element: {0}")]
    MissingElement(String),
    #[error("Element {0} has an unexpected type")]
    WrongElementType(String),
    #[error("Failed to attach listener: {0}")]
    Listener(String),
}

pub(crate) fn element_by_id(document: &Document, id: &str) -> Result<Element, BindError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| BindError::MissingElement(format!("#{id}")))
}

pub(crate) fn query(document: &Document, selector: &str) -> Result<Element, BindError> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| BindError::MissingElement(selector.to_string()))
}

pub(crate) fn cast<T: JsCast>(element: Element, name: &str) -> Result<T, BindError> {
    element
        .dyn_into::<T>()
        .map_err(|_| BindError::WrongElementType(name.to_string()))
}

/// Bind to the current page and start the client.
pub fn boot() -> Result<(), BindError> {
    let window = web_sys::window().ok_or(BindError::NoWindow)?;
    let document = window.document().ok_or(BindError::NoDocument)?;

    let mut config = ClientConfig::same_origin();
    if document
        .query_selector(map::FOCUS_FRAME_SELECTOR)
        .ok()
        .flatten()
        .is_none()
    {
        config.focus = FocusPolicy::KeepFocus;
    }

    let view = Rc::new(DomView::bind(&window, &document)?);
    let audio = Rc::new(DomAudio::bind(&document)?);
    let client = Rc::new(GameClient::new(RunnerDeps {
        raw_api: Rc::new(ApiAdapter::new(&config.server_url)),
        view,
        map: Rc::new(FrameMap::new(document.clone())),
        audio,
        platform: Rc::new(create_platform()),
        config,
    }));

    bindings::attach(&document, &client)?;
    exports::install(Rc::clone(&client));

    wasm_bindgen_futures::spawn_local(async move {
        client.start().await;
    });
    tracing::info!("Game page bound");
    Ok(())
}
