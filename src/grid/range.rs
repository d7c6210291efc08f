use std::cmp;

use chrono::{NaiveDate, NaiveDateTime};

use super::Interval;

/// An inclusive, contiguous range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: NaiveDate,
    until: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, until: NaiveDate) -> Option<Self> {
        if from <= until {
            Some(Self { from, until })
        } else {
            None
        }
    }

    /// Derive the browsable day range from the availability windows.
    ///
    /// The range starts on the day of the earliest window and reaches the day
    /// of the latest window end or of `horizon`, whichever is later, so a
    /// short or empty schedule still leaves a minimum browsing window. With
    /// no windows at all it runs from `today` to the horizon.
    ///
    /// `None` means the inputs place the first day after the last one (a
    /// single inverted window far in the future can do this); callers render
    /// zero day columns in that case.
    pub fn browse(windows: &[Interval], horizon: NaiveDateTime, today: NaiveDate) -> Option<Self> {
        let from = windows
            .iter()
            .map(|w| w.start().date())
            .min()
            .unwrap_or(today);
        let last_scheduled = windows
            .iter()
            .map(|w| w.end().date())
            .max()
            .unwrap_or(today);
        Self::new(from, cmp::max(last_scheduled, horizon.date()))
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn until(&self) -> NaiveDate {
        self.until
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.until
    }

    /// Every day of the range in order, both ends included.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let until = self.until;
        self.from.iter_days().take_while(move |day| *day <= until)
    }
}
