/// Earliest year the navigator accepts (inclusive)
pub const MIN_YEAR: i32 = 1900;

/// Latest year the navigator accepts (inclusive)
pub const MAX_YEAR: i32 = 2100;

/// Days in a common year
pub const COMMON_YEAR_DAYS: u16 = 365;
/// Days in a leap year
pub const LEAP_YEAR_DAYS: u16 = 366;

/// Milliseconds in a 24-hour period
pub const MS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Weekday, month and day, e.g. "Monday, March 3"; the year follows unpadded
pub const DATE_FORMAT: &str = "%A, %B %-d";
/// 24-hour wall clock, e.g. "07:05:09"
pub const CLOCK_FORMAT: &str = "%H:%M:%S";

/// Reflection used when the generator answers with nothing
pub const EMPTY_REFLECTION_FALLBACK: &str = "Life is long if you know how to use it.";
/// Reflection used when the generator fails outright
pub const FAILED_REFLECTION_FALLBACK: &str = "The time is always right to do what is right.";

/// Drift (in whole seconds) at or below which the clock counts as in sync
pub const DRIFT_TOLERANCE_SECS: i64 = 1;
/// Notice shown when the location gate refuses the network time lookup
pub const LOCATION_DENIED_NOTICE: &str = "GPS location denied. Using local time.";
