//! Device clock drift against an external time reference.
//!
//! The lookup is optional and gated on location permission; any failure
//! means "drift unknown" and nothing else.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use crate::consts::{DRIFT_TOLERANCE_SECS, LOCATION_DENIED_NOTICE};
use crate::prelude::*;

const MS_PER_SECOND: i64 = 1000;
const SECONDS_PER_MINUTE: u64 = 60;

/// Source of the device's current time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stopped at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Error type for network time lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeSyncError {
    #[error("time reference unreachable: {0}")]
    Unreachable(String),

    #[error("malformed time reference: {0}")]
    Malformed(String),
}

/// An external reference for the current time.
pub trait NetworkTimeSource {
    /// Fetches the reference time.
    ///
    /// # Errors
    /// Returns `TimeSyncError` if the reference cannot be read.
    fn fetch(&self) -> Result<DateTime<Utc>, TimeSyncError>;
}

/// A reference time known up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTimeSource(pub DateTime<Utc>);

impl NetworkTimeSource for FixedTimeSource {
    fn fetch(&self) -> Result<DateTime<Utc>, TimeSyncError> {
        Ok(self.0)
    }
}

/// Outcome of the location prompt that gates the network lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum LocationPermission {
    #[display(fmt = "granted")]
    Granted,
    #[display(fmt = "denied")]
    Denied,
}

/// Whole seconds the device clock is ahead (positive) or behind (negative)
/// the reference, or `None` when the lookup failed.
///
/// Half of the round trip is credited to the reference as latency.
pub fn measure_drift<C, S>(clock: &C, source: &S) -> Option<i64>
where
    C: Clock + ?Sized,
    S: NetworkTimeSource + ?Sized,
{
    let sent = clock.now();
    let fetched = match source.fetch() {
        Ok(time) => time,
        Err(err) => {
            warn!(error = %err, "time sync failed, drift unknown");
            return None;
        }
    };
    let received = clock.now();

    let latency = received.signed_duration_since(sent) / 2;
    let reference = fetched.checked_add_signed(latency)?;
    let drift_ms = received.signed_duration_since(reference).num_milliseconds();

    // round half up
    let drift = (drift_ms + MS_PER_SECOND / 2).div_euclid(MS_PER_SECOND);
    debug!(drift, latency_ms = latency.num_milliseconds(), "measured clock drift");
    Some(drift)
}

/// Result of a time synchronization attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriftReport {
    pub drift_seconds: Option<i64>,
    pub notice: Option<&'static str>,
}

impl DriftReport {
    /// "Clock is 1m 5s ahead" when the drift is significant,
    /// "Synchronization optimal" otherwise (including unknown drift).
    pub fn status_line(&self) -> String {
        match self.drift_seconds {
            Some(drift) if drift.abs() > DRIFT_TOLERANCE_SECS => format_drift(drift),
            _ => "Synchronization optimal".to_owned(),
        }
    }
}

/// Measures drift if `permission` allows it.
pub fn synchronize<C, S>(permission: LocationPermission, clock: &C, source: &S) -> DriftReport
where
    C: Clock + ?Sized,
    S: NetworkTimeSource + ?Sized,
{
    match permission {
        LocationPermission::Granted => DriftReport {
            drift_seconds: measure_drift(clock, source),
            notice: None,
        },
        LocationPermission::Denied => {
            debug!(%permission, "skipping time sync");
            DriftReport {
                drift_seconds: None,
                notice: Some(LOCATION_DENIED_NOTICE),
            }
        }
    }
}

/// Describes a drift in seconds, e.g. "Clock is 2m 3s behind".
pub fn format_drift(drift_seconds: i64) -> String {
    let direction = if drift_seconds > 0 { "ahead" } else { "behind" };
    let total = drift_seconds.unsigned_abs();
    let minutes = total / SECONDS_PER_MINUTE;
    let seconds = total % SECONDS_PER_MINUTE;

    if minutes > 0 {
        format!("Clock is {minutes}m {seconds}s {direction}")
    } else {
        format!("Clock is {seconds}s {direction}")
    }
}
