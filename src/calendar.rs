//! Year statistics and the per-day classification grid.
//!
//! Every function here is pure: the reference instant is passed in, never read
//! from a clock, so the same `(year, now)` always yields the same result.

use std::cmp::Ordering;

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, TimeDelta, TimeZone};
use serde::Serialize;
use tracing::debug;

use crate::consts::MS_PER_DAY;
use crate::error::CalendarError;
use crate::format::format_date;
use crate::prelude::*;
use crate::types::{DayCountMethod, days_in_year};

/// Longest DST gap we step over when local midnight of January 1st is skipped.
const MAX_MIDNIGHT_GAP_HOURS: i64 = 3;

/// Aggregate progress of one calendar year relative to a reference instant.
///
/// `days_passed + days_left == total_days` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearStats {
    year: i32,
    total_days: u16,
    days_passed: u16,
    days_left: u16,
    percent_complete: f64,
}

impl YearStats {
    /// Builds the stats for `year`, clamping `days_passed` into `0..=total_days`.
    fn from_days_passed(year: i32, days_passed: i64) -> Self {
        let total_days = days_in_year(year);
        let days_passed =
            u16::try_from(days_passed.clamp(0, i64::from(total_days))).unwrap_or(total_days);
        Self {
            year,
            total_days,
            days_passed,
            days_left: total_days - days_passed,
            percent_complete: f64::from(days_passed) / f64::from(total_days) * 100.0,
        }
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// 365 or 366
    pub const fn total_days(&self) -> u16 {
        self.total_days
    }

    /// Days at or before the reference date, today included.
    pub const fn days_passed(&self) -> u16 {
        self.days_passed
    }

    pub const fn days_left(&self) -> u16 {
        self.days_left
    }

    /// `days_passed / total_days * 100`, in `0.0..=100.0`
    pub const fn percent_complete(&self) -> f64 {
        self.percent_complete
    }
}

/// Where a day sits relative to the reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    #[display(fmt = "The Past")]
    Past,
    #[display(fmt = "The Present")]
    Today,
    #[display(fmt = "The Future")]
    Future,
}

impl DayStatus {
    /// Sentence shown next to a selected day.
    pub const fn caption(self) -> &'static str {
        match self {
            Self::Past => "This day has returned to the void of time.",
            Self::Today => "This is the only moment you truly possess.",
            Self::Future => "A shadow in the future, waiting to be lived.",
        }
    }
}

/// One calendar day of a year grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayData {
    day_number: u16,
    date: NaiveDate,
    is_past: bool,
    is_today: bool,
}

impl DayData {
    /// Classifies `date` against the reference calendar day `today`.
    ///
    /// A day is past when it lies strictly before `today`; `today` itself is
    /// never past.
    pub fn classify(day_number: u16, date: NaiveDate, today: NaiveDate) -> Self {
        let is_today = date == today;
        Self {
            day_number,
            date,
            is_past: date < today,
            is_today,
        }
    }

    /// 1-based ordinal within the year
    pub const fn day_number(&self) -> u16 {
        self.day_number
    }

    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    pub const fn is_past(&self) -> bool {
        self.is_past
    }

    pub const fn is_today(&self) -> bool {
        self.is_today
    }

    pub const fn status(&self) -> DayStatus {
        if self.is_today {
            DayStatus::Today
        } else if self.is_past {
            DayStatus::Past
        } else {
            DayStatus::Future
        }
    }

    /// Human-readable date, e.g. "Friday, March 1, 2024"
    pub fn label(&self) -> String {
        format_date(self.date)
    }
}

/// Computes the progress of `year` as seen from `now`, counting elapsed
/// 24-hour periods since local midnight of January 1st.
///
/// See [`year_statistics_with`] to choose the day count method.
pub fn year_statistics<Tz: TimeZone>(year: i32, now: &DateTime<Tz>) -> YearStats {
    year_statistics_with(year, now, DayCountMethod::Elapsed)
}

/// Computes the progress of `year` as seen from `now`.
///
/// Years entirely before `now` are complete, years after it have zero days
/// passed. For the current year the count includes today.
pub fn year_statistics_with<Tz: TimeZone>(
    year: i32,
    now: &DateTime<Tz>,
    method: DayCountMethod,
) -> YearStats {
    let days_passed = match now.year().cmp(&year) {
        Ordering::Greater => i64::from(days_in_year(year)),
        Ordering::Less => 0,
        Ordering::Equal => match method {
            DayCountMethod::Elapsed => elapsed_day_count(year, now),
            DayCountMethod::CalendarDays => i64::from(now.ordinal()),
        },
    };

    let stats = YearStats::from_days_passed(year, days_passed);
    debug!(
        year,
        %method,
        total_days = stats.total_days,
        days_passed = stats.days_passed,
        "computed year statistics"
    );
    stats
}

/// Floor of elapsed milliseconds since local midnight of January 1st over
/// `MS_PER_DAY`, plus one.
fn elapsed_day_count<Tz: TimeZone>(year: i32, now: &DateTime<Tz>) -> i64 {
    match start_of_year(year, &now.timezone()) {
        Some(start) => {
            let elapsed = now.clone().signed_duration_since(start);
            elapsed.num_milliseconds().div_euclid(MS_PER_DAY) + 1
        }
        None => i64::from(now.ordinal()),
    }
}

/// First existing local instant of January 1st of `year` in `tz`.
fn start_of_year<Tz: TimeZone>(year: i32, tz: &Tz) -> Option<DateTime<Tz>> {
    let midnight = NaiveDate::from_yo_opt(year, 1)?.and_time(NaiveTime::MIN);
    (0..=MAX_MIDNIGHT_GAP_HOURS).find_map(|hours| {
        let local = midnight.checked_add_signed(TimeDelta::hours(hours))?;
        tz.from_local_datetime(&local).earliest()
    })
}

/// Builds the ordered grid of every day in `year`, classified against the
/// calendar day of `now` in its own time zone.
///
/// The grid always has `days_in_year(year)` entries numbered `1..=total`.
///
/// # Errors
/// Returns `CalendarError::UnrepresentableYear` if chrono cannot represent
/// the dates of `year`.
#[tracing::instrument(level = "debug", skip(now))]
pub fn day_grid<Tz: TimeZone>(year: i32, now: &DateTime<Tz>) -> Result<Vec<DayData>, CalendarError> {
    let first = NaiveDate::from_yo_opt(year, 1).ok_or(CalendarError::UnrepresentableYear(year))?;
    let today = now.date_naive();

    let days = (1..=days_in_year(year))
        .map(|day_number| {
            first
                .checked_add_days(Days::new(u64::from(day_number - 1)))
                .map(|date| DayData::classify(day_number, date, today))
                .ok_or(CalendarError::UnrepresentableYear(year))
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(days = days.len(), %today, "generated day grid");
    Ok(days)
}
