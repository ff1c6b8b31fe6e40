//! Property-based tests for chapter normalization
//!
//! Whatever the container hands us, the normalized list must be
//! sorted, deduplicated by floor second, and never empty.

use proptest::prelude::*;
use tome_chapters::{normalize, RawChapter};

fn raw_chapter_strategy() -> impl Strategy<Value = RawChapter> {
    (
        proptest::option::of("[a-zA-Z0-9 ]{0,24}"),
        -1_000.0f64..10_000_000.0,
        prop_oneof![
            Just(0.0f64),
            Just(1.0f64),
            Just(44_100.0f64),
            -10.0f64..100_000.0,
        ],
    )
        .prop_map(|(title, start, time_scale)| RawChapter {
            title,
            start,
            time_scale,
        })
}

proptest! {
    #[test]
    fn normalized_list_is_sorted_and_unique(raw in proptest::collection::vec(raw_chapter_strategy(), 0..64)) {
        let chapters = normalize(raw);

        prop_assert!(!chapters.is_empty());

        for pair in chapters.windows(2) {
            prop_assert!(pair[0].start_seconds < pair[1].start_seconds);
            prop_assert!(pair[0].start_seconds.floor() != pair[1].start_seconds.floor());
        }
    }

    #[test]
    fn normalized_starts_are_non_negative_whole_seconds(raw in proptest::collection::vec(raw_chapter_strategy(), 0..64)) {
        for chapter in normalize(raw) {
            prop_assert!(chapter.start_seconds >= 0.0);
            prop_assert!(chapter.start_seconds.is_finite());
            prop_assert_eq!(chapter.start_seconds, chapter.start_seconds.floor());
            prop_assert!(!chapter.title.is_empty());
        }
    }
}
