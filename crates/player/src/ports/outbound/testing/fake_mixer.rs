use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use chateauquest_domain::Volume;

use crate::ports::outbound::{AudioError, AudioPort, Track};

/// In-memory audio double with per-track volume and play state
pub struct FakeMixer {
    volumes: RefCell<HashMap<Track, Volume>>,
    playing: RefCell<HashMap<Track, bool>>,
    reject_play: Cell<bool>,
    play_calls: RefCell<Vec<Track>>,
    volume_writes: RefCell<Vec<(Track, Volume)>>,
}

impl Default for FakeMixer {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeMixer {
    /// Both tracks at full volume, neither playing (browser defaults)
    pub fn new() -> Self {
        Self {
            volumes: RefCell::new(HashMap::from([
                (Track::Primary, Volume::FULL),
                (Track::Mystery, Volume::FULL),
            ])),
            playing: RefCell::new(HashMap::new()),
            reject_play: Cell::new(false),
            play_calls: RefCell::new(Vec::new()),
            volume_writes: RefCell::new(Vec::new()),
        }
    }

    /// Simulate an autoplay policy rejecting `play()`
    pub fn reject_playback(&self, reject: bool) {
        self.reject_play.set(reject);
    }

    pub fn is_playing(&self, track: Track) -> bool {
        self.playing.borrow().get(&track).copied().unwrap_or(false)
    }

    pub fn play_calls(&self) -> Vec<Track> {
        self.play_calls.borrow().clone()
    }

    pub fn volume_writes(&self, track: Track) -> Vec<Volume> {
        self.volume_writes
            .borrow()
            .iter()
            .filter(|(t, _)| *t == track)
            .map(|(_, v)| *v)
            .collect()
    }
}

#[async_trait::async_trait(?Send)]
impl AudioPort for FakeMixer {
    fn volume(&self, track: Track) -> Volume {
        self.volumes
            .borrow()
            .get(&track)
            .copied()
            .unwrap_or(Volume::FULL)
    }

    fn set_volume(&self, track: Track, volume: Volume) {
        self.volumes.borrow_mut().insert(track, volume);
        self.volume_writes.borrow_mut().push((track, volume));
    }

    async fn play(&self, track: Track) -> Result<(), AudioError> {
        self.play_calls.borrow_mut().push(track);
        if self.reject_play.get() {
            return Err(AudioError::PlaybackRejected(
                "play() failed because the user didn't interact with the document first".into(),
            ));
        }
        self.playing.borrow_mut().insert(track, true);
        Ok(())
    }

    fn pause(&self, track: Track) {
        self.playing.borrow_mut().insert(track, false);
    }
}
