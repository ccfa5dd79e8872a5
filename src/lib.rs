//! Year-at-a-glance calendar: how much of a year has passed, and which of its
//! days lie in the past, the present or the future.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use memento::{day_grid, format_date, year_statistics};
//!
//! let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
//!
//! let stats = year_statistics(2024, &now);
//! assert_eq!((stats.days_passed(), stats.days_left()), (61, 305));
//!
//! let days = day_grid(2024, &now).unwrap();
//! assert!(days[60].is_today());
//! assert_eq!(format_date(days[60].date()), "Friday, March 1, 2024");
//! ```

mod calendar;
mod consts;
mod drift;
mod error;
mod format;
mod navigator;
mod prelude;
mod reflection;
mod types;

pub use calendar::{DayData, DayStatus, YearStats, day_grid, year_statistics, year_statistics_with};
pub use consts::*;
pub use drift::{
    Clock, DriftReport, FixedClock, FixedTimeSource, LocationPermission, NetworkTimeSource, SystemClock,
    TimeSyncError, format_drift, measure_drift, synchronize,
};
pub use error::CalendarError;
pub use format::{format_clock, format_date, format_remaining};
pub use navigator::{YearNavigator, YearView};
pub use reflection::{
    ReflectionError, ReflectionRequest, ReflectionSource, StaticReflection, reflection_or_fallback,
};
pub use types::{DayCountMethod, Year, days_in_year, is_leap_year};
