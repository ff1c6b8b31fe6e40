//! Media element seam
//!
//! The engine never touches a platform audio API directly. The host
//! supplies whatever actually decodes audio (a browser `<audio>`
//! element behind FFI, a native pipeline, a test fake) through this
//! trait, and the engine mirrors its state.

use crate::error::Result;
use async_trait::async_trait;

/// A native media-playback primitive.
///
/// Getter methods report the primitive's live state; the engine treats
/// the primitive as the source of truth and its own mirror as
/// eventually consistent.
#[async_trait]
pub trait MediaElement: Send {
    /// Point the element at an audio resource URL
    fn set_source(&mut self, url: &str);

    /// Hint the element to prefetch container metadata only
    fn set_preload_metadata(&mut self);

    /// Current playback position in seconds
    fn current_time(&self) -> f64;

    /// Seek the element to a position in seconds
    fn set_current_time(&mut self, seconds: f64);

    /// Total duration in seconds; NaN while unknown
    fn duration(&self) -> f64;

    /// Contiguous buffered ranges as `(start, end)` second pairs,
    /// in load order
    fn buffered_ranges(&self) -> Vec<(f64, f64)>;

    /// Current playback rate
    fn playback_rate(&self) -> f64;

    /// Set the playback rate
    fn set_playback_rate(&mut self, rate: f64);

    /// Whether the element is currently paused
    fn paused(&self) -> bool;

    /// Request playback start.
    ///
    /// Fails when the platform refuses (autoplay policy, decode
    /// error); redundant requests while already playing are tolerated.
    async fn play(&mut self) -> Result<()>;

    /// Request playback stop; always succeeds
    fn pause(&mut self);
}
