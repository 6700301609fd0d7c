//! Closed date/time intervals.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta};

use crate::error::{ModelError, ModelResult};

/// ISO 8601 basic offset form, e.g. `2016-01-01T00:00:00+0000`.
const ISO8601: &str = "%Y-%m-%dT%H:%M:%S%z";

/// An inclusive range between two instants.
///
/// The endpoints are ordered on construction, so `from <= to` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    from: DateTime<FixedOffset>,
    to: DateTime<FixedOffset>,
    interval: TimeDelta,
}

impl DateRange {
    /// Creates a range from two instants given in either order.
    #[must_use]
    pub fn new(a: impl Into<DateTime<FixedOffset>>, b: impl Into<DateTime<FixedOffset>>) -> Self {
        let (a, b) = (a.into(), b.into());
        let (from, to) = if b < a { (b, a) } else { (a, b) };
        Self {
            from,
            to,
            interval: to - from,
        }
    }

    /// Creates a range spanning midnight UTC of each date.
    #[must_use]
    pub fn from_dates(a: NaiveDate, b: NaiveDate) -> Self {
        Self::new(midnight_utc(a), midnight_utc(b))
    }

    #[must_use]
    pub const fn from(&self) -> DateTime<FixedOffset> {
        self.from
    }

    #[must_use]
    pub const fn to(&self) -> DateTime<FixedOffset> {
        self.to
    }

    /// Time elapsed between the two endpoints.
    #[must_use]
    pub const fn interval(&self) -> TimeDelta {
        self.interval
    }

    /// Returns whether `date` falls within the range, endpoints included.
    #[must_use]
    pub fn contains(&self, date: impl Into<DateTime<FixedOffset>>) -> bool {
        let date = date.into();
        self.from <= date && date <= self.to
    }

    /// Returns whether the two ranges share at least one instant.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || (other.from <= self.to && other.to >= self.from)
    }

    /// ## Summary
    /// Merges two overlapping ranges into one spanning both.
    ///
    /// ## Errors
    /// Returns `ModelError::InvalidArgument` if the ranges do not intersect.
    pub fn combine(&self, other: &Self) -> ModelResult<Self> {
        if !self.intersects(other) {
            tracing::debug!(left = %self, right = %other, "Refusing to combine disjoint ranges");
            return Err(ModelError::InvalidArgument(
                "Cannot combine date ranges that do not intersect".to_string(),
            ));
        }

        Ok(Self::new(self.from.min(other.from), self.to.max(other.to)))
    }
}

fn midnight_utc(date: NaiveDate) -> DateTime<FixedOffset> {
    date.and_time(NaiveTime::MIN).and_utc().fixed_offset()
}

/// Renders both endpoints in ISO 8601 joined by an en dash.
impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\u{2013}{}",
            self.from.format(ISO8601),
            self.to.format(ISO8601)
        )
    }
}
