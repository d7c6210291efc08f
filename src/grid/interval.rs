use std::cmp;
use std::fmt;

use chrono::NaiveDateTime;

/// A half-open span of time `[start, end)`.
///
/// Adjacent intervals sharing an endpoint do not overlap: a lesson ending at
/// 10:00 leaves the 10:00 slot untouched. An interval with `end <= start` is
/// empty; it overlaps nothing and intersects nothing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl fmt::Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

impl Interval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether the two intervals share at least one instant.
    pub fn overlaps(&self, other: &Self) -> bool {
        !self.is_empty() && !other.is_empty() && self.start < other.end && other.start < self.end
    }

    /// The shared sub-interval `[max(starts), min(ends))`, or `None` if the
    /// intervals do not overlap.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let start = cmp::max(self.start, other.start);
        let end = cmp::min(self.end, other.end);
        (start < end).then_some(Self { start, end })
    }

    /// Length in minutes. Fractional when the endpoints are not on a full
    /// minute.
    pub fn minutes(&self) -> f64 {
        (self.end - self.start).num_seconds() as f64 / 60.0
    }
}
