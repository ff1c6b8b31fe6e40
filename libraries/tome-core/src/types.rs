//! Core types for chapter metadata and persisted playback state

use serde::{Deserialize, Serialize};

/// Schema version for persisted playback snapshots.
///
/// A snapshot with any other version is discarded on read.
pub const SNAPSHOT_VERSION: u32 = 1;

/// A named chapter marker within an audiobook
///
/// Produced transiently by chapter extraction and handed to the
/// presentation layer; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    /// Chapter title
    pub title: String,

    /// Start offset from the beginning of the audio, in seconds (>= 0, finite)
    pub start_seconds: f64,
}

impl Chapter {
    /// Create a new chapter marker
    pub fn new(title: impl Into<String>, start_seconds: f64) -> Self {
        Self {
            title: title.into(),
            start_seconds,
        }
    }

    /// The synthetic chapter substituted when extraction yields nothing
    pub fn fallback() -> Self {
        Self::new("Start", 0.0)
    }
}

/// Persisted resume bookmark
///
/// Written on a throttled cadence during playback and on durable
/// checkpoint events (pause, rate change), read once at session start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackSnapshot {
    /// Schema version, must equal [`SNAPSHOT_VERSION`]
    pub version: u32,

    /// Playback position in seconds (>= 0)
    pub position_seconds: f64,

    /// Playback rate, clamped to [0.5, 3] on read
    pub rate: f64,

    /// Wall-clock time of the write, in milliseconds since the Unix epoch
    pub updated_at_epoch_ms: u64,
}

impl PlaybackSnapshot {
    /// Create a snapshot at the current schema version
    pub fn new(position_seconds: f64, rate: f64, updated_at_epoch_ms: u64) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            position_seconds,
            rate,
            updated_at_epoch_ms,
        }
    }

    /// Whether the record is structurally usable: current schema
    /// version and finite numeric fields.
    pub fn is_valid(&self) -> bool {
        self.version == SNAPSHOT_VERSION
            && self.position_seconds.is_finite()
            && self.rate.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chapter_wire_format_is_camel_case() {
        let json = serde_json::to_string(&Chapter::new("Intro", 12.5)).unwrap();
        assert_eq!(json, r#"{"title":"Intro","startSeconds":12.5}"#);
    }

    #[test]
    fn fallback_chapter_starts_at_zero() {
        let ch = Chapter::fallback();
        assert_eq!(ch.title, "Start");
        assert_eq!(ch.start_seconds, 0.0);
    }

    #[test]
    fn snapshot_round_trip() {
        let snap = PlaybackSnapshot::new(123.4, 1.5, 1_700_000_000_000);
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains(r#""version":1"#));
        assert!(json.contains(r#""positionSeconds":123.4"#));
        assert!(json.contains(r#""updatedAtEpochMs":1700000000000"#));

        let back: PlaybackSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }

    #[test]
    fn snapshot_validity() {
        assert!(PlaybackSnapshot::new(10.0, 1.0, 0).is_valid());

        let mut wrong_version = PlaybackSnapshot::new(10.0, 1.0, 0);
        wrong_version.version = 2;
        assert!(!wrong_version.is_valid());

        let nan_position = PlaybackSnapshot::new(f64::NAN, 1.0, 0);
        assert!(!nan_position.is_valid());

        let infinite_rate = PlaybackSnapshot::new(10.0, f64::INFINITY, 0);
        assert!(!infinite_rate.is_valid());
    }
}
