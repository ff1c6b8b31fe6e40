//! Playback engine - state mirroring and resume orchestration
//!
//! The engine owns one bound media element, folds its notifications
//! into a derived state snapshot, and applies imperative controls to
//! the element directly before eagerly updating the mirror. The next
//! notification acts as the eventual-consistency correction.

use crate::{
    clock::{Clock, SystemClock},
    element::MediaElement,
    events::MediaEvent,
    store::SnapshotStore,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tome_core::{clamp, progress_ratio, PlaybackSnapshot};
use tracing::debug;

/// Slowest allowed playback rate
pub const MIN_RATE: f64 = 0.5;

/// Fastest allowed playback rate
pub const MAX_RATE: f64 = 3.0;

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Audio resource URL pushed into the element on bind
    pub source_url: String,

    /// Rate used before a persisted rate is adopted (default: 1.0)
    pub initial_rate: f64,

    /// Whether resume bookmarks are written and read (default: true)
    pub persist: bool,

    /// Minimum gap between throttled position writes (default: 2000 ms)
    pub persist_interval_ms: u64,

    /// Persisted positions at or below this never produce a resume
    /// offer (default: 5 s)
    pub resume_min_seconds: f64,
}

impl EngineConfig {
    /// Default configuration for the given source URL
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            ..Self::default()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            source_url: String::new(),
            initial_rate: 1.0,
            persist: true,
            persist_interval_ms: 2000,
            resume_min_seconds: 5.0,
        }
    }
}

/// Normalized view of playback, derived from element notifications
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    /// Container metadata has loaded
    pub ready: bool,

    /// Element is currently playing
    pub playing: bool,

    /// Known duration in seconds; 0 until reported
    pub duration_seconds: f64,

    /// Mirrored playback position in seconds
    pub position_seconds: f64,

    /// End of the last contiguous buffered range, monotone within a load
    pub buffered_end_seconds: f64,

    /// Current playback rate
    pub rate: f64,

    /// User-facing error, if the element reported one
    pub error: Option<String>,
}

/// A pending offer to restore a previous session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeOffer {
    /// Position the session would restore to
    pub position_seconds: f64,

    /// Rate the session would restore to
    pub rate: f64,
}

/// Playback state engine over a single media element.
///
/// All operations run on one logical timeline; nothing here blocks,
/// and persistence failures never surface (the stores swallow them).
pub struct PlayerEngine {
    config: EngineConfig,
    store: Arc<dyn SnapshotStore>,
    clock: Arc<dyn Clock>,
    element: Option<Box<dyn MediaElement>>,
    state: PlayerState,
    resume: Option<ResumeOffer>,
    resume_checked: bool,
    last_persist_ms: u64,
}

impl PlayerEngine {
    /// Create an engine using the system wall clock
    pub fn new(config: EngineConfig, store: Arc<dyn SnapshotStore>) -> Self {
        Self::with_clock(config, store, Arc::new(SystemClock))
    }

    /// Create an engine with an injected clock (tests drive the
    /// persistence throttle through this)
    pub fn with_clock(
        config: EngineConfig,
        store: Arc<dyn SnapshotStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let state = PlayerState {
            ready: false,
            playing: false,
            duration_seconds: 0.0,
            position_seconds: 0.0,
            buffered_end_seconds: 0.0,
            rate: clamp(config.initial_rate, MIN_RATE, MAX_RATE),
            error: None,
        };
        Self {
            config,
            store,
            clock,
            element: None,
            state,
            resume: None,
            resume_checked: false,
            last_persist_ms: 0,
        }
    }

    /// Current derived state
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Pending resume offer, if one is active
    pub fn resume_offer(&self) -> Option<ResumeOffer> {
        self.resume
    }

    /// Fraction of the track played, in `[0, 1]`
    pub fn progress(&self) -> f64 {
        progress_ratio(self.state.position_seconds, self.state.duration_seconds)
    }

    /// Seconds left until the end of the track
    pub fn remaining_seconds(&self) -> f64 {
        (self.state.duration_seconds - self.state.position_seconds).max(0.0)
    }

    /// Associate the engine with a live media element.
    ///
    /// Pushes source, preload hint, and the current rate into the
    /// element, and derives the resume offer from the persisted
    /// bookmark the first time a bind happens.
    pub fn bind(&mut self, mut element: Box<dyn MediaElement>) {
        self.derive_resume();
        element.set_source(&self.config.source_url);
        element.set_preload_metadata();
        element.set_playback_rate(self.state.rate);
        self.element = Some(element);
    }

    /// Detach and return the bound element, leaving the mirrored state
    /// as last observed. Notifications arriving with no element bound
    /// are ignored.
    pub fn unbind(&mut self) -> Option<Box<dyn MediaElement>> {
        self.element.take()
    }

    /// Request playback start. Rejections (autoplay policy, decode
    /// failure) become a user-facing error, never a panic or `Err`.
    pub async fn play(&mut self) {
        let Some(element) = self.element.as_mut() else {
            return;
        };
        if let Err(e) = element.play().await {
            debug!(error = %e, "play request rejected");
            self.state.error = Some(e.to_string());
        }
    }

    /// Request playback stop and write a durable checkpoint
    pub fn pause(&mut self) {
        let Some(element) = self.element.as_mut() else {
            return;
        };
        element.pause();
        let position = element.current_time();
        let rate = effective_rate(element.playback_rate(), self.state.rate);
        self.persist_now(position, rate);
    }

    /// Pause if playing, else play; decided by the element's own
    /// paused flag so a stale mirror cannot flip the wrong way.
    pub async fn toggle(&mut self) {
        let paused = match self.element.as_ref() {
            Some(element) => element.paused(),
            None => return,
        };
        if paused {
            self.play().await;
        } else {
            self.pause();
        }
    }

    /// Seek to `target_seconds`, clamped into `[0, duration]` (upper
    /// bound unbounded while the duration is unknown), and eagerly
    /// mirror the new position.
    pub fn seek(&mut self, target_seconds: f64) {
        let Some(element) = self.element.as_mut() else {
            return;
        };
        let reported = element.duration();
        let duration = if reported.is_finite() {
            reported
        } else {
            self.state.duration_seconds
        };
        let upper = if duration > 0.0 { duration } else { f64::MAX };
        let target = clamp(target_seconds, 0.0, upper);
        element.set_current_time(target);
        self.state.position_seconds = target;
    }

    /// Relative seek; negative deltas rewind. Clamping at 0 and at the
    /// duration comes from [`seek`](Self::seek).
    pub fn skip_by(&mut self, delta_seconds: f64) {
        self.seek(self.state.position_seconds + delta_seconds);
    }

    /// Set the playback rate (clamped to `[0.5, 3]`) and write a
    /// durable checkpoint.
    pub fn set_playback_rate(&mut self, rate: f64) {
        let rate = clamp(rate, MIN_RATE, MAX_RATE);
        if let Some(element) = self.element.as_mut() {
            element.set_playback_rate(rate);
        }
        self.state.rate = rate;
        self.persist_now(self.state.position_seconds, rate);
    }

    /// Restore the offered session: push rate and position into the
    /// element, consume the offer, checkpoint, and optionally attempt
    /// playback (rejection swallowed).
    pub async fn apply_resume(&mut self, autoplay: bool) {
        if self.element.is_none() {
            return;
        }
        let Some(offer) = self.resume.take() else {
            return;
        };

        if let Some(element) = self.element.as_mut() {
            element.set_playback_rate(offer.rate);
            element.set_current_time(offer.position_seconds);
        }
        self.state.rate = offer.rate;
        self.state.position_seconds = offer.position_seconds;
        self.persist_now(offer.position_seconds, offer.rate);

        if autoplay {
            if let Some(element) = self.element.as_mut() {
                let _ = element.play().await;
            }
        }
    }

    /// Discard the resume offer and delete the persisted bookmark so
    /// it cannot reappear on the next session.
    pub fn clear_resume(&mut self) {
        self.resume = None;
        self.store.clear();
    }

    /// Fold an element notification into the derived state
    pub fn handle(&mut self, event: MediaEvent) {
        if self.element.is_none() {
            return;
        }
        match event {
            MediaEvent::MetadataLoaded => {
                self.state.ready = true;
                self.state.duration_seconds = self.element_duration();
                self.state.error = None;
            }
            MediaEvent::DurationChanged => {
                self.state.duration_seconds = self.element_duration();
            }
            MediaEvent::TimeUpdated => {
                let (position, element_rate) = match self.element.as_ref() {
                    Some(element) => (element.current_time(), element.playback_rate()),
                    None => return,
                };
                self.state.position_seconds = position;

                let now = self.clock.now_ms();
                if now.saturating_sub(self.last_persist_ms) >= self.config.persist_interval_ms {
                    self.last_persist_ms = now;
                    let rate = effective_rate(element_rate, self.state.rate);
                    self.persist_now(position, rate);
                }
            }
            MediaEvent::Progress => {
                let end = self
                    .element
                    .as_ref()
                    .and_then(|element| element.buffered_ranges().last().copied())
                    .map(|(_, end)| end);
                if let Some(end) = end {
                    if end.is_finite() {
                        self.state.buffered_end_seconds = self.state.buffered_end_seconds.max(end);
                    }
                }
            }
            MediaEvent::Played => {
                self.state.playing = true;
            }
            MediaEvent::Paused => {
                let (position, element_rate) = match self.element.as_ref() {
                    Some(element) => (element.current_time(), element.playback_rate()),
                    None => return,
                };
                self.state.playing = false;
                let rate = effective_rate(element_rate, self.state.rate);
                self.persist_now(position, rate);
            }
            MediaEvent::Error { message } => {
                // duration/position stay as last known
                self.state.error = Some(message);
            }
        }
    }

    /// Read the persisted bookmark once and derive the resume offer.
    ///
    /// The persisted rate is adopted even when the position is too
    /// small to offer a resume, so a rate preference survives trivial
    /// sessions.
    fn derive_resume(&mut self) {
        if !self.config.persist || self.resume_checked {
            return;
        }
        self.resume_checked = true;

        let Some(snapshot) = self.store.load() else {
            return;
        };
        if !snapshot.is_valid() {
            debug!("ignoring stale or malformed resume snapshot");
            return;
        }

        let position = snapshot.position_seconds.max(0.0);
        let rate = clamp(snapshot.rate, MIN_RATE, MAX_RATE);
        self.state.rate = rate;

        if position > self.config.resume_min_seconds {
            self.resume = Some(ResumeOffer {
                position_seconds: position,
                rate,
            });
        }
    }

    fn element_duration(&self) -> f64 {
        self.element
            .as_ref()
            .map(|element| element.duration())
            .filter(|d| d.is_finite())
            .unwrap_or(0.0)
    }

    fn persist_now(&mut self, position_seconds: f64, rate: f64) {
        if !self.config.persist {
            return;
        }
        let snapshot =
            PlaybackSnapshot::new(position_seconds.max(0.0), rate, self.clock.now_ms());
        self.store.save(&snapshot);
    }
}

/// The element's live rate when usable, else the engine's cached rate
fn effective_rate(element_rate: f64, fallback: f64) -> f64 {
    if element_rate.is_finite() && element_rate > 0.0 {
        element_rate
    } else {
        fallback
    }
}
