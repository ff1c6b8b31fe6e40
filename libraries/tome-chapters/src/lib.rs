//! Tome Chapters
//!
//! Chapter-marker extraction from a remote audiobook container.
//!
//! This crate provides:
//! - Streaming fetch of a remote audio resource (no full-file buffering)
//! - Incremental container probing for chapter cues (MPEG-4/M4B and
//!   anything else symphonia can demux)
//! - Normalization into a sorted, floor-second-deduplicated chapter list
//! - A wall-clock budget suitable for multi-hour audio files
//!
//! Each extraction is an independent request/response operation with no
//! retained state, no caching, and no retry.
//!
//! # Example
//!
//! ```rust,no_run
//! use tome_chapters::ChapterExtractor;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = ChapterExtractor::new(Duration::from_secs(60));
//! let chapters = extractor.extract("https://example.com/book.m4b").await?;
//! assert!(!chapters.is_empty());
//! # Ok(())
//! # }
//! ```

mod error;
mod extractor;
mod fetch;
mod normalize;

pub use error::{ChapterError, Result};
pub use extractor::ChapterExtractor;
pub use normalize::{normalize, RawChapter};
