//! Relative time windows for metric queries.
//!
//! A window is "the last N hours" or "the last N days" ending now, encoded
//! for the metrics endpoint as an ISO-8601 interval `start/end` in UTC.

use chrono::{DateTime, Duration, SecondsFormat, Utc};

use crate::error::MetricsError;

/// Relative look-back window for a metric query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    Hours(u32),
    Days(u32),
}

impl TimeWindow {
    /// Pick the window from the two optional caller inputs.
    ///
    /// Exactly one of `hours` / `days` must be set and it must be non-zero.
    pub fn from_options(hours: Option<u32>, days: Option<u32>) -> Result<Self, MetricsError> {
        let window = match (hours, days) {
            (Some(h), None) => Self::Hours(h),
            (None, Some(d)) => Self::Days(d),
            (None, None) => return Err(MetricsError::MissingTimeWindow),
            (Some(_), Some(_)) => return Err(MetricsError::ConflictingTimeWindow),
        };
        window.ensure_not_empty()?;
        Ok(window)
    }

    fn ensure_not_empty(self) -> Result<(), MetricsError> {
        if matches!(self, Self::Hours(0) | Self::Days(0)) {
            return Err(MetricsError::InvalidTimeWindow(format!(
                "{} must be greater than zero",
                self.unit()
            )));
        }
        Ok(())
    }

    fn unit(self) -> &'static str {
        match self {
            Self::Hours(_) => "hours",
            Self::Days(_) => "days",
        }
    }

    /// Length of the window.
    pub fn duration(self) -> Duration {
        match self {
            Self::Hours(h) => Duration::hours(i64::from(h)),
            Self::Days(d) => Duration::days(i64::from(d)),
        }
    }

    /// Interval string for a window ending at `end`.
    ///
    /// Empty windows are rejected.
    pub fn timespan_ending_at(self, end: DateTime<Utc>) -> Result<String, MetricsError> {
        self.ensure_not_empty()?;
        let start = end.checked_sub_signed(self.duration()).ok_or_else(|| {
            MetricsError::InvalidTimeWindow(format!("{} {} is too far back", self.count(), self.unit()))
        })?;
        Ok(format!("{}/{}", format_instant(start), format_instant(end)))
    }

    /// Interval string for a window ending now.
    pub fn timespan(self) -> Result<String, MetricsError> {
        self.timespan_ending_at(Utc::now())
    }

    fn count(self) -> u32 {
        match self {
            Self::Hours(n) | Self::Days(n) => n,
        }
    }
}

/// ISO-8601 with microseconds and a `Z` suffix, e.g. `2024-03-01T12:00:00.000000Z`.
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Micros, true)
}
