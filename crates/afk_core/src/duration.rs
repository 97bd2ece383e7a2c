//! Compact elapsed-time formatting

use chrono::Duration;

const SECS_PER_DAY: i64 = 86_400;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_MINUTE: i64 = 60;

/// Format a non-negative elapsed duration as a compact `d`/`h`/`m` label.
///
/// Leading zero-valued units are omitted, seconds are truncated, and
/// minutes are always shown when no larger unit is present, so anything
/// under one minute renders as `0m` rather than an empty string.
///
/// ```
/// use afk_core::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(Duration::minutes(125)), "2h 5m");
/// ```
pub fn format_duration(elapsed: Duration) -> String {
    let total_seconds = elapsed.num_seconds();
    let days = total_seconds / SECS_PER_DAY;
    let remainder = total_seconds % SECS_PER_DAY;
    let hours = remainder / SECS_PER_HOUR;
    let minutes = (remainder % SECS_PER_HOUR) / SECS_PER_MINUTE;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    // Minutes are the unit of last resort.
    if minutes > 0 || parts.is_empty() {
        parts.push(format!("{}m", minutes));
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_minute_durations_render_as_zero_minutes() {
        assert_eq!(format_duration(Duration::seconds(0)), "0m");
        assert_eq!(format_duration(Duration::seconds(59)), "0m");
    }

    #[test]
    fn test_seconds_are_truncated_not_rounded() {
        assert_eq!(format_duration(Duration::seconds(119)), "1m");
    }

    #[test]
    fn test_hours_and_minutes() {
        assert_eq!(format_duration(Duration::minutes(125)), "2h 5m");
    }

    #[test]
    fn test_zero_valued_middle_unit_is_omitted() {
        let elapsed = Duration::days(1) + Duration::minutes(3);
        assert_eq!(format_duration(elapsed), "1d 3m");
    }

    #[test]
    fn test_zero_valued_trailing_unit_is_omitted() {
        let elapsed = Duration::days(3) + Duration::hours(4);
        assert_eq!(format_duration(elapsed), "3d 4h");
    }

    #[test]
    fn test_all_units_present() {
        let elapsed = Duration::days(2) + Duration::hours(3) + Duration::minutes(15);
        assert_eq!(format_duration(elapsed), "2d 3h 15m");
    }
}
