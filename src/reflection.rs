//! The short reflection shown under the grid.
//!
//! Text generation lives outside this crate behind [`ReflectionSource`];
//! whatever the source does, [`reflection_or_fallback`] always yields a
//! sentence and never touches calendar state.

use serde::Serialize;
use tracing::{debug, warn};

use crate::calendar::YearStats;
use crate::consts::{EMPTY_REFLECTION_FALLBACK, FAILED_REFLECTION_FALLBACK};

/// Error type for reflection sources.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReflectionError {
    /// No generator is configured.
    #[error("no reflection source available")]
    Unavailable,

    /// The generator was reached but did not produce text.
    #[error("reflection request failed: {0}")]
    Failed(String),
}

/// What a reflection is asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectionRequest {
    pub days_passed: u16,
    pub total_days: u16,
    pub year: i32,
}

impl ReflectionRequest {
    /// Share of the year gone, rounded to a whole percent.
    pub fn percent(&self) -> u8 {
        if self.total_days == 0 {
            return 0;
        }
        let rounded = (u32::from(self.days_passed) * 100 + u32::from(self.total_days) / 2)
            / u32::from(self.total_days);
        u8::try_from(rounded.min(100)).unwrap_or(100)
    }

    /// Instruction text for a text generator.
    pub fn prompt(&self) -> String {
        format!(
            "A minimalist calendar shows the passage of time. \
             Today is day {days} of {year}; {percent}% of the year has passed.\n\
             Write one short, stoic and elegant sentence about the value of life and the flow of time.\n\
             Focus on living. Never use the words \"death\", \"die\", \"dying\" or \"mortal\".\n\
             Answer with the sentence only: no introduction, no closing remark, no quotation marks.",
            days = self.days_passed,
            year = self.year,
            percent = self.percent(),
        )
    }
}

impl From<&YearStats> for ReflectionRequest {
    fn from(stats: &YearStats) -> Self {
        Self {
            days_passed: stats.days_passed(),
            total_days: stats.total_days(),
            year: stats.year(),
        }
    }
}

/// Something that can produce a reflection sentence.
pub trait ReflectionSource {
    /// Produces a reflection for `request`.
    ///
    /// # Errors
    /// Returns `ReflectionError` when no sentence could be obtained.
    fn reflect(&self, request: &ReflectionRequest) -> Result<String, ReflectionError>;
}

/// A fixed sentence, or nothing at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticReflection(pub Option<String>);

impl ReflectionSource for StaticReflection {
    fn reflect(&self, _request: &ReflectionRequest) -> Result<String, ReflectionError> {
        self.0.clone().ok_or(ReflectionError::Unavailable)
    }
}

/// Asks `source` once and substitutes a fixed sentence on blank output or failure.
pub fn reflection_or_fallback<S>(source: &S, request: &ReflectionRequest) -> String
where
    S: ReflectionSource + ?Sized,
{
    match source.reflect(request) {
        Ok(text) if !text.trim().is_empty() => text.trim().to_owned(),
        Ok(_) => {
            debug!(year = request.year, "empty reflection, using fallback");
            EMPTY_REFLECTION_FALLBACK.to_owned()
        }
        Err(err) => {
            warn!(year = request.year, error = %err, "reflection unavailable, using fallback");
            FAILED_REFLECTION_FALLBACK.to_owned()
        }
    }
}
