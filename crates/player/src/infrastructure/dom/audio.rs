//! `AudioPort` over the page's two `<audio>` elements

use chateauquest_domain::Volume;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlAudioElement};

use super::{cast, element_by_id, BindError};
use crate::ports::outbound::{AudioError, AudioPort, Track};

pub struct DomAudio {
    primary: HtmlAudioElement,
    mystery: HtmlAudioElement,
}

impl DomAudio {
    pub fn bind(document: &Document) -> Result<Self, BindError> {
        let load = |track: Track| -> Result<HtmlAudioElement, BindError> {
            let id = track.element_id();
            cast(element_by_id(document, id)?, id)
        };
        Ok(Self {
            primary: load(Track::Primary)?,
            mystery: load(Track::Mystery)?,
        })
    }

    fn element(&self, track: Track) -> &HtmlAudioElement {
        match track {
            Track::Primary => &self.primary,
            Track::Mystery => &self.mystery,
        }
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[async_trait::async_trait(?Send)]
impl AudioPort for DomAudio {
    fn volume(&self, track: Track) -> Volume {
        Volume::clamped(self.element(track).volume())
    }

    fn set_volume(&self, track: Track, volume: Volume) {
        self.element(track).set_volume(volume.value());
    }

    async fn play(&self, track: Track) -> Result<(), AudioError> {
        let promise = self
            .element(track)
            .play()
            .map_err(|e| AudioError::PlaybackRejected(describe(&e)))?;
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| AudioError::PlaybackRejected(describe(&e)))
    }

    fn pause(&self, track: Track) {
        if let Err(e) = self.element(track).pause() {
            tracing::warn!(?track, error = %describe(&e), "Pause failed");
        }
    }
}
