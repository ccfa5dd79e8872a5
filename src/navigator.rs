use chrono::{DateTime, Datelike, TimeZone};
use serde::Serialize;
use tracing::{debug, trace};

use crate::calendar::{DayData, YearStats, day_grid, year_statistics_with};
use crate::error::CalendarError;
use crate::types::{DayCountMethod, Year};

/// The selected year of a year-at-a-glance view.
///
/// Holds no clock; every [`view`](Self::view) is computed fresh from the
/// reference instant it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearNavigator {
    current: Year,
}

impl YearNavigator {
    pub const fn new(year: Year) -> Self {
        Self { current: year }
    }

    /// Starts at the year of `now`, as long as it is navigable.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` if `now` falls outside the policy range.
    pub fn starting_at<Tz: TimeZone>(now: &DateTime<Tz>) -> Result<Self, CalendarError> {
        Year::new(now.year()).map(Self::new)
    }

    pub const fn current(&self) -> Year {
        self.current
    }

    /// Selects `year`. A rejected year leaves the selection untouched.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` if `year` is not navigable.
    pub fn go_to(&mut self, year: i32) -> Result<Year, CalendarError> {
        let year = Year::new(year)?;
        trace!(from = %self.current, to = %year, "changing year");
        self.current = year;
        Ok(year)
    }

    /// Steps one year back.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` when already at the first navigable year.
    pub fn previous(&mut self) -> Result<Year, CalendarError> {
        self.go_to(self.current.get() - 1)
    }

    /// Steps one year forward.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` when already at the last navigable year.
    pub fn next(&mut self) -> Result<Year, CalendarError> {
        self.go_to(self.current.get() + 1)
    }

    /// Statistics and day grid of the selected year as seen from `now`.
    ///
    /// # Errors
    /// Propagates errors from [`day_grid`]; none occur inside the policy range.
    pub fn view<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
        method: DayCountMethod,
    ) -> Result<YearView, CalendarError> {
        let year = self.current.get();
        let view = YearView {
            stats: year_statistics_with(year, now, method),
            days: day_grid(year, now)?,
        };
        debug!(%year, days_left = view.stats.days_left(), "built year view");
        Ok(view)
    }
}

/// One snapshot of a year: its statistics and classified days.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearView {
    stats: YearStats,
    days: Vec<DayData>,
}

impl YearView {
    pub const fn stats(&self) -> &YearStats {
        &self.stats
    }

    pub fn days(&self) -> &[DayData] {
        &self.days
    }

    /// Looks a day up by its 1-based number.
    pub fn day(&self, day_number: u16) -> Option<&DayData> {
        let index = usize::from(day_number).checked_sub(1)?;
        self.days.get(index)
    }

    /// The entry for the reference day, if it falls in this year.
    pub fn today(&self) -> Option<&DayData> {
        self.days.iter().find(|day| day.is_today())
    }
}
