//! Tome Playback
//!
//! Playback state engine for a single long audio track.
//!
//! This crate provides:
//! - A normalized reactive view over a native media element
//!   (position, duration, buffered range, rate, playing/ready/error)
//! - Imperative controls (play/pause/toggle/seek/skip/rate) whose
//!   effects are eagerly mirrored into that view
//! - A persisted resume bookmark, throttled during playback and
//!   checkpointed on pause and rate changes
//! - A resume offer reconciled against the bookmark at bind time
//!
//! # Architecture
//!
//! `tome-playback` is platform-agnostic. The actual audio element
//! (a browser `<audio>` tag, a native decoder, a test fake) is
//! provided via the [`MediaElement`] trait, and bookmark storage via
//! the [`SnapshotStore`] trait. Everything runs on a single logical
//! timeline: the host forwards element notifications as
//! [`MediaEvent`]s and the engine folds each into the next state.
//!
//! # Example
//!
//! ```rust,no_run
//! use tome_playback::{EngineConfig, MemorySnapshotStore, PlayerEngine};
//! use std::sync::Arc;
//!
//! # fn example(element: Box<dyn tome_playback::MediaElement>) {
//! let store = Arc::new(MemorySnapshotStore::new());
//! let mut engine = PlayerEngine::new(
//!     EngineConfig::new("https://example.com/book.m4b"),
//!     store,
//! );
//! engine.bind(element);
//!
//! engine.seek(90.0);
//! engine.skip_by(-15.0);
//! engine.set_playback_rate(1.25);
//! # }
//! ```

mod clock;
mod element;
mod engine;
mod error;
mod events;
mod store;

// Public exports
pub use clock::{Clock, SystemClock};
pub use element::MediaElement;
pub use engine::{EngineConfig, PlayerEngine, PlayerState, ResumeOffer, MAX_RATE, MIN_RATE};
pub use error::{PlaybackError, Result};
pub use events::MediaEvent;
pub use store::{JsonFileSnapshotStore, MemorySnapshotStore, SnapshotStore};
