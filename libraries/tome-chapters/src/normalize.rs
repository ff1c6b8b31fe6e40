//! Raw marker normalization
//!
//! Converts container cue markers into the orderly chapter list the
//! player consumes: seconds resolved against the container time-scale,
//! grouped by floor-second with the first-seen title winning, sorted
//! ascending, and never empty.

use std::collections::BTreeMap;
use tome_core::Chapter;

/// Title used when a marker carries none
const UNTITLED: &str = "Chapter";

/// A chapter marker as it appears in the container, before normalization
#[derive(Debug, Clone, PartialEq)]
pub struct RawChapter {
    /// Marker title, if the container carries one
    pub title: Option<String>,

    /// Raw start timestamp in container ticks (or seconds when no
    /// time-scale applies)
    pub start: f64,

    /// Ticks per second; zero, negative, or non-finite means `start`
    /// is already in seconds
    pub time_scale: f64,
}

/// Normalize raw markers into the final chapter list.
///
/// Start times collapse to their floor second; the first marker seen
/// for a given second keeps its title and later ones are dropped. An
/// empty input yields the single synthetic `Start` chapter at zero.
pub fn normalize(raw: Vec<RawChapter>) -> Vec<Chapter> {
    let mut by_start: BTreeMap<u64, String> = BTreeMap::new();

    for marker in raw {
        let RawChapter {
            title,
            start,
            time_scale,
        } = marker;

        let seconds = if time_scale > 0.0 {
            start / time_scale
        } else {
            start
        };
        let seconds = if seconds.is_finite() {
            seconds.max(0.0)
        } else {
            0.0
        };

        by_start.entry(seconds.floor() as u64).or_insert_with(|| {
            title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| UNTITLED.to_string())
        });
    }

    let mut chapters: Vec<Chapter> = by_start
        .into_iter()
        .map(|(start, title)| Chapter::new(title, start as f64))
        .collect();

    if chapters.is_empty() {
        chapters.push(Chapter::fallback());
    }

    chapters
}
