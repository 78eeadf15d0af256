//! `MapPort` posting structured messages into the map iframe

use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlIFrameElement};

use chateauquest_shared::MapMessage;

use crate::ports::outbound::MapPort;

pub(crate) const FRAME_SELECTOR: &str = "iframe";
/// The frame whose focus is released on document clicks
pub(crate) const FOCUS_FRAME_SELECTOR: &str = ".map-container iframe";

/// Looks the frame up on every send; the map may be re-rendered by the page.
pub struct FrameMap {
    document: Document,
}

impl FrameMap {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn frame(&self) -> Option<HtmlIFrameElement> {
        self.document
            .query_selector(FRAME_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlIFrameElement>().ok())
    }
}

impl MapPort for FrameMap {
    fn send(&self, message: MapMessage) {
        let Some(target) = self.frame().and_then(|frame| frame.content_window()) else {
            tracing::debug!(kind = message.kind(), "No map frame, message dropped");
            return;
        };
        let payload = match message.serialize(&Serializer::json_compatible()) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(kind = message.kind(), error = %e, "Failed to encode map message");
                return;
            }
        };
        if let Err(e) = target.post_message(&payload, "*") {
            tracing::warn!(kind = message.kind(), error = ?e, "postMessage failed");
        }
    }
}
