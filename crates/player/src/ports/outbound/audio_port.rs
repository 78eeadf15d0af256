//! AudioPort - the two background music tracks

use chateauquest_domain::Volume;
use thiserror::Error;

/// Background music channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    /// Exploration theme, playing from page load
    Primary,
    /// Theme that takes over once enough cities are solved
    Mystery,
}

impl Track {
    pub fn element_id(&self) -> &'static str {
        match self {
            Track::Primary => "bgMusic",
            Track::Mystery => "mysteryMusic",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    /// Browser refused to start playback (autoplay policy)
    #[error("Playback rejected: {0}")]
    PlaybackRejected(String),
    #[error("Audio element unavailable: {0}")]
    Unavailable(String),
}

#[async_trait::async_trait(?Send)]
pub trait AudioPort {
    fn volume(&self, track: Track) -> Volume;

    fn set_volume(&self, track: Track, volume: Volume);

    /// Start (or resume) playback; resolves once the browser accepted it
    async fn play(&self, track: Track) -> Result<(), AudioError>;

    fn pause(&self, track: Track);
}
