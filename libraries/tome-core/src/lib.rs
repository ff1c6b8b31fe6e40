//! Tome Core
//!
//! Shared domain types and time math for Tome.
//!
//! This crate provides the building blocks used by both the chapter
//! extraction service and the playback state engine:
//! - **Domain Types**: `Chapter`, `PlaybackSnapshot`
//! - **Time Math**: `clamp`, `format_time`, `progress_ratio`
//!
//! # Example
//!
//! ```rust
//! use tome_core::{Chapter, format_time};
//!
//! let chapter = Chapter::new("Chapter 1", 65.0);
//! assert_eq!(format_time(chapter.start_seconds), "1:05");
//! ```

#![forbid(unsafe_code)]

pub mod time;
pub mod types;

// Re-export commonly used items
pub use time::{clamp, format_time, progress_ratio};
pub use types::{Chapter, PlaybackSnapshot, SNAPSHOT_VERSION};
