//! Chapter-extraction errors

use thiserror::Error;

/// Result type alias using `ChapterError`
pub type Result<T> = std::result::Result<T, ChapterError>;

/// Chapter extraction error types
#[derive(Debug, Error)]
pub enum ChapterError {
    /// Upstream returned a non-success status
    #[error("Upstream fetch failed with status {0}")]
    UpstreamStatus(u16),

    /// Upstream response declared an empty body
    #[error("Upstream response had no body")]
    EmptyBody,

    /// Transport-level failure talking to the upstream host
    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Container probe or demux failure
    #[error("Container parse error: {0}")]
    Parse(String),

    /// Wall-clock budget exhausted
    #[error("Chapter extraction timed out after {0}s")]
    Timeout(u64),
}

impl ChapterError {
    /// Whether the failure happened before any bytes could be parsed
    /// (the HTTP boundary maps these to 502, everything else to 500).
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            ChapterError::UpstreamStatus(_) | ChapterError::EmptyBody | ChapterError::Transport(_)
        )
    }

    /// The upstream HTTP status, when one was received
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            ChapterError::UpstreamStatus(status) => Some(*status),
            ChapterError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
