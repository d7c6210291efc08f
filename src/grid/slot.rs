use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveTime};

use super::Interval;

/// One row of the day grid, as wall-clock hour and minute. The row sequence
/// is the same for every day.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot {
    pub hour: u8,
    pub min: u8,
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.min)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.min)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid slot time {0:?}, expected HH:MM")]
pub struct ParseSlotError(String);

impl FromStr for Slot {
    type Err = ParseSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseSlotError(s.to_string());
        let (hour, min) = s.split_once(':').ok_or_else(err)?;
        let hour: u8 = hour.parse().map_err(|_| err())?;
        let min: u8 = min.parse().map_err(|_| err())?;
        if hour < 24 && min < 60 {
            Ok(Self { hour, min })
        } else {
            Err(err())
        }
    }
}

impl Slot {
    pub fn new(hour: u32, min: u32) -> Self {
        Self {
            hour: hour as u8,
            min: min as u8,
        }
    }

    /// How many minutes into the day this slot starts.
    pub fn minutes(&self) -> i64 {
        (self.hour as i64) * 60 + (self.min as i64)
    }

    /// The concrete half-open interval this slot covers on `day`. A slot in
    /// the last row of the day may end exactly on the next midnight.
    pub fn interval(&self, day: NaiveDate, step_minutes: u32) -> Interval {
        let time = NaiveTime::from_hms_opt(self.hour.into(), self.min.into(), 0)
            .expect("slot within day bounds");
        let start = day.and_time(time);
        Interval::new(start, start + Duration::minutes(step_minutes.into()))
    }
}

/// The ordered slot rows for one day: every `step_minutes` minutes from
/// `start_hour` (inclusive) to `end_hour` (exclusive).
///
/// If `step_minutes` does not divide 60, the rows of each hour simply stop
/// short of the hour boundary; the grid does not realign.
pub fn rows(start_hour: u32, end_hour: u32, step_minutes: u32) -> Vec<Slot> {
    assert!(step_minutes > 0, "slot granularity must be positive");
    let mut rows = vec![];
    for hour in start_hour..end_hour {
        let mut min = 0;
        while min < 60 {
            rows.push(Slot::new(hour, min));
            min += step_minutes;
        }
    }
    rows
}
