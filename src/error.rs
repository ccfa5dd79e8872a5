//! Error types for calendar computations.

/// Error type for the fallible calendar operations.
///
/// The core arithmetic is total; these variants cover the year policy
/// enforced by [`Year`](crate::Year) and years outside the range chrono can
/// represent as dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year falls outside the navigable policy range.
    #[error("year {year} is outside the supported range {min}..={max}")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
        /// Lower bound of the policy range (inclusive).
        min: i32,
        /// Upper bound of the policy range (inclusive).
        max: i32,
    },

    /// Returned when a year has no calendar dates chrono can represent.
    #[error("year {0} cannot be represented as a calendar date")]
    UnrepresentableYear(i32),
}
