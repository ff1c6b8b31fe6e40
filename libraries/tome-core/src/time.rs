//! Time math shared by the extractor and the playback engine

/// Clamp `n` into `[min, max]`.
///
/// Applies the lower bound first, then the upper bound, so the upper
/// bound takes precedence in the degenerate `min > max` case.
pub fn clamp(n: f64, min: f64, max: f64) -> f64 {
    f64::min(max, f64::max(min, n))
}

/// Format a second count as `m:ss`, or `h:mm:ss` past one hour.
///
/// Negative or non-finite input renders as `"0:00"`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let s = seconds.floor() as u64;
    let h = s / 3600;
    let m = (s % 3600) / 60;
    let r = s % 60;
    if h > 0 {
        format!("{h}:{m:02}:{r:02}")
    } else {
        format!("{m}:{r:02}")
    }
}

/// Fraction of the track played, clamped to `[0, 1]`.
///
/// Defined as 0 when the duration is zero, negative, or not yet known.
pub fn progress_ratio(position_seconds: f64, duration_seconds: f64) -> f64 {
    if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
        return 0.0;
    }
    clamp(position_seconds / duration_seconds, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp(5.0, 0.5, 3.0), 3.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(2.0, 0.5, 3.0), 2.0);
    }

    #[test]
    fn clamp_degenerate_range_caps_at_max() {
        // min > max: the upper bound is applied last and wins
        assert_eq!(clamp(7.0, 5.0, 3.0), 3.0);
    }

    #[test]
    fn format_short_times() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(599.9), "9:59");
    }

    #[test]
    fn format_with_hours() {
        assert_eq!(format_time(3661.0), "1:01:01");
        assert_eq!(format_time(36_000.0), "10:00:00");
    }

    #[test]
    fn format_rejects_bad_input() {
        assert_eq!(format_time(-1.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(progress_ratio(30.0, 60.0), 0.5);
        assert_eq!(progress_ratio(90.0, 60.0), 1.0);
        assert_eq!(progress_ratio(-5.0, 60.0), 0.0);
    }

    #[test]
    fn progress_with_unknown_duration_is_zero() {
        assert_eq!(progress_ratio(30.0, 0.0), 0.0);
        assert_eq!(progress_ratio(30.0, f64::NAN), 0.0);
        assert_eq!(progress_ratio(30.0, -1.0), 0.0);
    }
}
