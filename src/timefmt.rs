//! Humanized relative-time labels for event cards.
//!
//! Event cards show "Starts in 3 days" / "Ends in about 2 months" rather
//! than raw dates. The page is statically generated, so labels are
//! computed once against the build's `now` and bake into the HTML; the
//! revalidation cadence keeps them fresh enough.
//!
//! Granularity buckets, coarsest that fits:
//! under a minute, minutes, hours, days, months, years. Hours, months,
//! and years are approximate and labelled "about"; a month is 30 days
//! and a year 365 for bucketing purposes.

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Distance from `now` to `target` as a human phrase with direction:
/// `"in 3 days"` for the future, `"3 days ago"` for the past.
pub fn distance_from_now(now: DateTime<Utc>, target: DateTime<Utc>) -> String {
    let seconds = (target - now).num_seconds();
    let phrase = distance_phrase(seconds.abs());
    if seconds >= 0 {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

/// The undirected distance phrase for an absolute span in seconds.
fn distance_phrase(seconds: i64) -> String {
    match seconds {
        s if s < MINUTE => "less than a minute".to_string(),
        s if s < HOUR => plural(s / MINUTE, "minute", ""),
        s if s < DAY => plural(div_round(s, HOUR), "hour", "about "),
        s if s < MONTH => plural(div_round(s, DAY), "day", ""),
        s if s < YEAR => plural(div_round(s, MONTH), "month", "about "),
        s => plural(div_round(s, YEAR), "year", "about "),
    }
}

fn plural(n: i64, unit: &str, prefix: &str) -> String {
    let n = n.max(1);
    if n == 1 {
        format!("{prefix}1 {unit}")
    } else {
        format!("{prefix}{n} {unit}s")
    }
}

/// Integer division rounded to nearest, so 90 minutes reads as 2 hours
/// rather than 1.
fn div_round(value: i64, unit: i64) -> i64 {
    (value + unit / 2) / unit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(rfc3339: &str) -> DateTime<Utc> {
        rfc3339.parse().unwrap()
    }

    #[test]
    fn under_a_minute() {
        let now = at("2026-08-07T12:00:00Z");
        assert_eq!(
            distance_from_now(now, at("2026-08-07T12:00:30Z")),
            "in less than a minute"
        );
    }

    #[test]
    fn minutes_are_exact() {
        let now = at("2026-08-07T12:00:00Z");
        assert_eq!(
            distance_from_now(now, at("2026-08-07T12:05:00Z")),
            "in 5 minutes"
        );
        assert_eq!(
            distance_from_now(now, at("2026-08-07T12:01:00Z")),
            "in 1 minute"
        );
    }

    #[test]
    fn hours_are_approximate_and_rounded() {
        let now = at("2026-08-07T12:00:00Z");
        assert_eq!(
            distance_from_now(now, at("2026-08-07T15:00:00Z")),
            "in about 3 hours"
        );
        // 90 minutes rounds up to 2 hours
        assert_eq!(
            distance_from_now(now, at("2026-08-07T13:30:00Z")),
            "in about 2 hours"
        );
    }

    #[test]
    fn days_and_direction() {
        let now = at("2026-08-07T12:00:00Z");
        assert_eq!(
            distance_from_now(now, at("2026-08-10T12:00:00Z")),
            "in 3 days"
        );
        assert_eq!(
            distance_from_now(now, at("2026-08-04T12:00:00Z")),
            "3 days ago"
        );
    }

    #[test]
    fn months_and_years() {
        let now = at("2026-08-07T12:00:00Z");
        assert_eq!(
            distance_from_now(now, at("2026-10-10T12:00:00Z")),
            "in about 2 months"
        );
        assert_eq!(
            distance_from_now(now, at("2028-08-07T12:00:00Z")),
            "in about 2 years"
        );
    }

    #[test]
    fn zero_distance_reads_as_under_a_minute() {
        let now = at("2026-08-07T12:00:00Z");
        assert_eq!(distance_from_now(now, now), "in less than a minute");
    }
}
