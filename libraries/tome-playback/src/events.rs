//! Media element notifications
//!
//! The host forwards each element notification as a `MediaEvent`; the
//! engine folds it into the mirrored state. Events carry no payload
//! other than error text because the engine re-reads the element's
//! live state on every fold.

use serde::{Deserialize, Serialize};

/// Notifications emitted by the media element
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MediaEvent {
    /// Container metadata parsed; duration is now known
    MetadataLoaded,

    /// Reported duration changed (containers may refine it mid-download)
    DurationChanged,

    /// Playback position advanced (fires many times per second)
    TimeUpdated,

    /// More data was buffered
    Progress,

    /// Playback started
    Played,

    /// Playback paused
    Paused,

    /// The element failed to load or play
    Error {
        /// User-facing error message
        message: String,
    },
}
