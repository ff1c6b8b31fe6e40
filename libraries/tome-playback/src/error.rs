//! Error types for the playback engine

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No media element is currently bound
    #[error("No media element bound")]
    NotBound,

    /// The element rejected a play request (autoplay policy, decode failure)
    #[error("Playback request rejected: {0}")]
    PlayRejected(String),

    /// The element reported a failure
    #[error("Media element error: {0}")]
    Element(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
