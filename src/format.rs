//! Fixed US-English renderings of dates, clock time and remaining days.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

use crate::calendar::YearStats;
use crate::consts::{CLOCK_FORMAT, DATE_FORMAT};

/// Formats a date as `<Weekday>, <Month> <Day>, <Year>`,
/// e.g. "Monday, March 3, 2025". The year is not zero-padded.
pub fn format_date(date: NaiveDate) -> String {
    format!("{}, {}", date.format(DATE_FORMAT), date.year())
}

/// 24-hour `HH:MM:SS` wall clock time of `now` in its own zone.
pub fn format_clock<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format(CLOCK_FORMAT).to_string()
}

/// "42 days remain", singular for exactly one day.
pub fn format_remaining(stats: &YearStats) -> String {
    match stats.days_left() {
        1 => "1 day remains".to_owned(),
        n => format!("{n} days remain"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::year_statistics;
    use chrono::{FixedOffset, Utc};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_format_date() {
        struct TestCase {
            date: NaiveDate,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                date: date(2024, 1, 1),
                expected: "Monday, January 1, 2024",
            },
            TestCase {
                date: date(2025, 3, 3),
                expected: "Monday, March 3, 2025",
            },
            TestCase {
                date: date(2024, 2, 29),
                expected: "Thursday, February 29, 2024",
            },
            TestCase {
                date: date(1999, 12, 31),
                expected: "Friday, December 31, 1999",
            },
            TestCase {
                date: date(999, 1, 1),
                expected: "Tuesday, January 1, 999",
            },
            TestCase {
                date: date(42, 7, 4),
                expected: "Friday, July 4, 42",
            },
        ];

        for case in &cases {
            assert_eq!(format_date(case.date), case.expected);
        }
    }

    #[test]
    fn test_format_clock_uses_local_offset() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 7, 5, 9).unwrap();
        assert_eq!(format_clock(&now), "07:05:09");

        let minus_five = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(format_clock(&now.with_timezone(&minus_five)), "02:05:09");
    }

    #[test]
    fn test_format_remaining() {
        let now = Utc.with_ymd_and_hms(2023, 12, 30, 12, 0, 0).unwrap();
        assert_eq!(format_remaining(&year_statistics(2023, &now)), "1 day remains");
        assert_eq!(format_remaining(&year_statistics(2024, &now)), "366 days remain");
        assert_eq!(format_remaining(&year_statistics(2022, &now)), "0 days remain");
    }
}
