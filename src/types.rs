use crate::consts::{
    CENTURY_CYCLE, COMMON_YEAR_DAYS, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, LEAP_YEAR_DAYS, MAX_YEAR,
    MIN_YEAR,
};
use crate::error::CalendarError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A year value guaranteed to be in the navigable range `MIN_YEAR..=MAX_YEAR` (1900..=2100).
///
/// The calendar functions accept any `i32`; this type carries the range
/// policy of whoever lets a user pick the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Year(i32);

impl Year {
    /// Creates a new Year, validating that it's within `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` if the value is outside the range.
    pub const fn new(value: i32) -> Result<Self, CalendarError> {
        if value < MIN_YEAR || value > MAX_YEAR {
            return Err(CalendarError::YearOutOfRange {
                year: value,
                min: MIN_YEAR,
                max: MAX_YEAR,
            });
        }
        Ok(Self(value))
    }

    /// Returns the year value as i32
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Whether this year has a February 29th
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.0)
    }
}

impl TryFrom<i32> for Year {
    type Error = CalendarError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the days already passed in the current year are counted.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum DayCountMethod {
    /// Whole 24-hour periods since local midnight of January 1st, plus one.
    /// Drifts by a day around DST transitions.
    #[default]
    #[display(fmt = "elapsed")]
    Elapsed,
    /// Ordinal of the reference instant's local calendar date.
    #[display(fmt = "calendar-days")]
    CalendarDays,
}

// Helper functions

/// Gregorian leap year rule, defined for every integer year.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// 366 for leap years, 365 otherwise.
pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        LEAP_YEAR_DAYS
    } else {
        COMMON_YEAR_DAYS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1900).is_ok());
        assert!(Year::new(2024).is_ok());
        assert!(Year::new(2100).is_ok());
    }

    #[test]
    fn test_year_new_invalid_too_small() {
        let result = Year::new(1899);
        assert!(matches!(
            result,
            Err(CalendarError::YearOutOfRange { year: 1899, .. })
        ));
    }

    #[test]
    fn test_year_new_invalid_too_large() {
        let result = Year::new(2101);
        assert!(matches!(
            result,
            Err(CalendarError::YearOutOfRange {
                year: 2101,
                min: 1900,
                max: 2100
            })
        ));
    }

    #[test]
    fn test_year_display() {
        let year = Year::new(2024).unwrap();
        assert_eq!(year.to_string(), "2024");
    }

    #[test]
    fn test_year_try_from_i32() {
        let year: Year = 2024.try_into().unwrap();
        assert_eq!(year.get(), 2024);

        let result: Result<Year, _> = 0.try_into();
        assert!(result.is_err());

        let result: Result<Year, _> = (-2024).try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_year_into_i32() {
        let year = Year::new(1999).unwrap();
        let value: i32 = year.into();
        assert_eq!(value, 1999);
    }

    #[test]
    fn test_year_ordering() {
        let y1 = Year::new(2020).unwrap();
        let y2 = Year::new(2024).unwrap();
        assert!(y1 < y2);
        assert_eq!(y1, y1);
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(2024).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "2024");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);

        let rejected: Result<Year, _> = serde_json::from_str("1800");
        assert!(rejected.is_err());
    }

    #[test]
    fn test_year_is_leap() {
        assert!(Year::new(2000).unwrap().is_leap());
        assert!(!Year::new(1900).unwrap().is_leap());
    }

    #[test]
    fn test_day_count_method_serde() {
        let json = serde_json::to_string(&DayCountMethod::CalendarDays).unwrap();
        assert_eq!(json, r#""calendar-days""#);

        let parsed: DayCountMethod = serde_json::from_str(r#""elapsed""#).unwrap();
        assert_eq!(parsed, DayCountMethod::Elapsed);
        assert_eq!(DayCountMethod::default(), DayCountMethod::Elapsed);
    }

    #[test]
    fn test_day_count_method_display() {
        assert_eq!(DayCountMethod::Elapsed.to_string(), "elapsed");
        assert_eq!(DayCountMethod::CalendarDays.to_string(), "calendar-days");
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i32,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 2400,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 0,
                is_leap: true,
                description: "year zero is divisible by 400",
            },
            TestCase {
                year: -4,
                is_leap: true,
                description: "negative, divisible by 4",
            },
            TestCase {
                year: -100,
                is_leap: false,
                description: "negative century",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap {
                    "leap year"
                } else {
                    "not leap year"
                }
            );
        }
    }

    #[test]
    fn test_is_leap_year_matches_rule_everywhere() {
        for year in -1000..=3000 {
            let expected = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
            assert_eq!(is_leap_year(year), expected, "Year {year}");
        }
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2023), 365);
        assert_eq!(days_in_year(1900), 365);
        assert_eq!(days_in_year(2000), 366);
    }
}
