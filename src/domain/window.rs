use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;

use crate::domain::EarningRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowError {
    /// Zero or negative length
    NonPositiveHours(i64),
    /// Start would fall outside the representable date range
    OutOfRange(i64),
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowError::NonPositiveHours(hours) => {
                write!(f, "Window length must be positive, got {} hours", hours)
            }
            WindowError::OutOfRange(hours) => {
                write!(f, "A window of {} hours is out of range", hours)
            }
        }
    }
}

impl std::error::Error for WindowError {}

/// Closed time range `[start, end]` requested from the submission history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EarningsWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl EarningsWindow {
    /// The `hours` leading up to `now`.
    pub fn trailing(now: DateTime<Utc>, hours: i64) -> Result<Self, WindowError> {
        if hours <= 0 {
            return Err(WindowError::NonPositiveHours(hours));
        }
        let start = TimeDelta::try_hours(hours)
            .and_then(|span| now.checked_sub_signed(span))
            .ok_or(WindowError::OutOfRange(hours))?;
        Ok(Self { start, end: now })
    }

    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.start <= ts && ts <= self.end
    }

    /// Records inside the window, in input order.
    pub fn filter<'a>(
        &self,
        records: impl IntoIterator<Item = &'a EarningRecord>,
    ) -> Vec<EarningRecord> {
        records
            .into_iter()
            .filter(|r| self.contains(r.timestamp))
            .cloned()
            .collect()
    }
}
