//! Calendar-date deadlines.

use super::TaskDomainError;
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

const ISO_DATE: &str = "%Y-%m-%d";

/// Task deadline as a calendar date without time or zone.
///
/// Stored and displayed as ISO `YYYY-MM-DD`. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Deadline(NaiveDate);

impl Deadline {
    /// Wraps a calendar date.
    #[must_use]
    pub const fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parses an ISO `YYYY-MM-DD` date.
    ///
    /// Only the canonical spelling is accepted: zero-padded month and day,
    /// no sign and no surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDeadline`] when the value is not a
    /// valid calendar date in that format.
    pub fn parse(value: &str) -> Result<Self, TaskDomainError> {
        NaiveDate::parse_from_str(value, ISO_DATE)
            .ok()
            .map(Self)
            .filter(|deadline| deadline.to_string() == value)
            .ok_or_else(|| TaskDomainError::InvalidDeadline(value.to_owned()))
    }

    /// Returns today's date in UTC according to `clock`.
    #[must_use]
    pub fn today(clock: &impl Clock) -> Self {
        Self(clock.utc().date_naive())
    }

    /// Returns the wrapped date.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }
}

impl TryFrom<String> for Deadline {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Deadline> for String {
    fn from(value: Deadline) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_DATE))
    }
}
