//! Background music: autoplay, master volume and the mystery crossfade

use std::cell::Cell;
use std::rc::Rc;

use chateauquest_domain::Volume;

use crate::ports::outbound::{AudioPort, PlatformPort, TextField, Track, ViewPort};

/// Timing of the crossfade between the two tracks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeSettings {
    pub tick_ms: u64,
    /// Volume change per tick
    pub step: f64,
    /// Primary volume at or below which the primary track is stopped
    pub floor: f64,
}

impl Default for FadeSettings {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            step: 0.1,
            floor: 0.1,
        }
    }
}

pub struct AudioService {
    audio: Rc<dyn AudioPort>,
    platform: Rc<dyn PlatformPort>,
    view: Rc<dyn ViewPort>,
    fade: FadeSettings,
    initial_volume: Volume,
    mystery_triggered: Cell<bool>,
    autoplay_blocked: Cell<bool>,
}

impl AudioService {
    pub fn new(
        audio: Rc<dyn AudioPort>,
        platform: Rc<dyn PlatformPort>,
        view: Rc<dyn ViewPort>,
        fade: FadeSettings,
        initial_volume: Volume,
    ) -> Self {
        Self {
            audio,
            platform,
            view,
            fade,
            initial_volume,
            mystery_triggered: Cell::new(false),
            autoplay_blocked: Cell::new(false),
        }
    }

    /// Put both tracks at the starting volume
    pub fn initialize(&self) {
        self.audio.set_volume(Track::Primary, self.initial_volume);
        self.audio.set_volume(Track::Mystery, self.initial_volume);
    }

    /// Start the exploration theme. A rejection (autoplay policy) is
    /// remembered so the next user gesture can retry.
    pub async fn start_background_music(&self) {
        match self.audio.play(Track::Primary).await {
            Ok(()) => {
                self.autoplay_blocked.set(false);
                tracing::debug!("Background music started");
            }
            Err(e) => {
                self.autoplay_blocked.set(true);
                tracing::warn!(error = %e, "Autoplay prevented, waiting for user interaction");
            }
        }
    }

    pub fn autoplay_blocked(&self) -> bool {
        self.autoplay_blocked.get()
    }

    /// Retry a blocked autoplay once, on the first user gesture. Skipped
    /// once the mystery theme has taken over.
    pub fn resume_after_gesture(&self) {
        if !self.autoplay_blocked.replace(false) || self.mystery_triggered.get() {
            return;
        }
        let audio = Rc::clone(&self.audio);
        self.platform.spawn_local(Box::pin(async move {
            if let Err(e) = audio.play(Track::Primary).await {
                tracing::warn!(error = %e, "Background music still blocked");
            }
        }));
    }

    /// Slider input: both tracks follow, last writer wins
    pub fn set_master_volume(&self, percent: u8) {
        let percent = percent.min(100);
        let volume = Volume::from_percent(percent);
        self.audio.set_volume(Track::Primary, volume);
        self.audio.set_volume(Track::Mystery, volume);
        self.view
            .set_text(TextField::VolumeDisplay, &format!("{}%", percent));
    }

    pub fn mystery_triggered(&self) -> bool {
        self.mystery_triggered.get()
    }

    /// Fade the exploration theme out and the mystery theme in. Only the
    /// first call has any effect.
    pub fn switch_to_mystery_music(&self) {
        if self.mystery_triggered.replace(true) {
            return;
        }
        let target = self.audio.volume(Track::Primary);
        tracing::info!(target = target.value(), "Switching to mystery music");

        let task = crossfade(
            Rc::clone(&self.audio),
            Rc::clone(&self.platform),
            self.fade,
            target,
        );
        self.platform.spawn_local(Box::pin(task));
    }
}

/// Two-phase fade on one cooperative task.
///
/// Phase one lowers the primary track a step per tick until it is at or
/// below the floor, then stops it. Phase two starts the mystery track from
/// silence and raises it a step per tick until it reaches `target`.
async fn crossfade(
    audio: Rc<dyn AudioPort>,
    platform: Rc<dyn PlatformPort>,
    fade: FadeSettings,
    target: Volume,
) {
    loop {
        platform.sleep_ms(fade.tick_ms).await;
        let current = audio.volume(Track::Primary).value();
        if current > fade.floor {
            audio.set_volume(Track::Primary, Volume::clamped(current - fade.step));
        } else {
            audio.pause(Track::Primary);
            break;
        }
    }

    audio.set_volume(Track::Mystery, Volume::SILENT);
    if let Err(e) = audio.play(Track::Mystery).await {
        tracing::warn!(error = %e, "Mystery music could not start");
    }

    let mut level = 0.0;
    while level < target.value() {
        platform.sleep_ms(fade.tick_ms).await;
        level += fade.step;
        audio.set_volume(Track::Mystery, Volume::clamped(level));
    }
    tracing::debug!(level, "Crossfade finished");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::ManualPlatform;
    use crate::ports::outbound::testing::{FakeMixer, RecordingView};

    struct Fixture {
        service: AudioService,
        mixer: Rc<FakeMixer>,
        platform: Rc<ManualPlatform>,
        view: Rc<RecordingView>,
    }

    fn fixture() -> Fixture {
        let mixer = Rc::new(FakeMixer::new());
        let platform = Rc::new(ManualPlatform::new());
        let view = Rc::new(RecordingView::new());
        let service = AudioService::new(
            mixer.clone(),
            platform.clone(),
            view.clone(),
            FadeSettings::default(),
            Volume::default(),
        );
        service.initialize();
        Fixture {
            service,
            mixer,
            platform,
            view,
        }
    }

    #[test]
    fn crossfade_stops_primary_and_raises_mystery_to_captured_volume() {
        let f = fixture();
        futures_util::FutureExt::now_or_never(f.service.start_background_music());
        assert!(f.mixer.is_playing(Track::Primary));

        f.service.switch_to_mystery_music();
        f.platform.run_until_idle();

        assert!(!f.mixer.is_playing(Track::Primary));
        assert!(f.mixer.volume(Track::Primary).value() <= 0.1);
        assert!(f.mixer.is_playing(Track::Mystery));
        let mystery = f.mixer.volume(Track::Mystery).value();
        assert!(mystery >= 0.5 - 1e-9 && mystery < 0.6, "{mystery}");
        assert!(f.platform.sleeps().iter().all(|ms| *ms == 100));
    }

    #[test]
    fn mystery_track_starts_silent_and_rises_monotonically() {
        let f = fixture();

        f.service.switch_to_mystery_music();
        f.platform.run_until_idle();

        let writes = f.mixer.volume_writes(Track::Mystery);
        // initialize, then the silent start, then one write per tick
        assert_eq!(writes[1], Volume::SILENT);
        assert!(writes[1..].windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn crossfade_runs_once() {
        let f = fixture();

        f.service.switch_to_mystery_music();
        f.service.switch_to_mystery_music();
        assert_eq!(f.platform.pending_tasks(), 1);
        f.platform.run_until_idle();

        assert_eq!(f.mixer.play_calls(), vec![Track::Mystery]);
    }

    #[test]
    fn master_volume_sets_both_tracks_and_display() {
        let f = fixture();

        f.service.set_master_volume(30);

        assert_eq!(f.mixer.volume(Track::Primary), Volume::from_percent(30));
        assert_eq!(f.mixer.volume(Track::Mystery), Volume::from_percent(30));
        assert_eq!(f.view.text(TextField::VolumeDisplay).as_deref(), Some("30%"));
    }

    #[test]
    fn blocked_autoplay_is_retried_once_on_gesture() {
        let f = fixture();
        f.mixer.reject_playback(true);
        futures_util::FutureExt::now_or_never(f.service.start_background_music());
        assert!(f.service.autoplay_blocked());

        f.mixer.reject_playback(false);
        f.service.resume_after_gesture();
        f.service.resume_after_gesture();
        f.platform.run_until_idle();

        assert!(f.mixer.is_playing(Track::Primary));
        assert_eq!(f.mixer.play_calls(), vec![Track::Primary, Track::Primary]);
    }

    #[test]
    fn gesture_does_nothing_when_music_already_plays() {
        let f = fixture();
        futures_util::FutureExt::now_or_never(f.service.start_background_music());

        f.service.resume_after_gesture();

        assert_eq!(f.platform.pending_tasks(), 0);
    }
}
