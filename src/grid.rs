//! The interval-geometry engine behind the calendar.
//!
//! Everything here is a pure function over an immutable schedule snapshot:
//! deriving the browsable day range, discretizing days into slot rows,
//! classifying cells by interval overlap, and projecting lessons onto
//! visible days as overlay blocks. The hosting layer re-runs these
//! computations in full whenever an input changes; nothing is cached.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::schedule::{Lesson, Schedule};
use crate::view::ViewWindow;

pub use self::block::LessonBlock;
pub use self::cell::CellState;
pub use self::interval::Interval;
pub use self::range::DateRange;
pub use self::slot::Slot;

mod block;
mod cell;
mod interval;
mod range;
mod slot;

/// Visible-hours bounds and slot granularity for the day grid.
#[derive(Debug, Clone, Copy)]
pub struct GridConfig {
    /// First visible hour of each day.
    pub start_hour: u32,
    /// First hour past the visible range, at most 24.
    pub end_hour: u32,
    /// Slot length in minutes.
    pub step_minutes: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start_hour: 0,
            end_hour: 24,
            step_minutes: 30,
        }
    }
}

/// What a click on a grid cell or an overlay block resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection<'a> {
    /// An open slot was picked; carries the cell's own slot interval.
    Slot(Interval),
    /// A booked cell or block was picked; carries the lesson and its
    /// day-local clamped overlap, which may be shorter than the lesson.
    Lesson { lesson: &'a Lesson, overlap: Interval },
}

/// The day as a half-open interval from its midnight to the next.
pub fn day_interval(day: NaiveDate) -> Interval {
    let midnight = day.and_time(NaiveTime::MIN);
    Interval::new(midnight, midnight + Duration::days(1))
}

/// One schedule snapshot plus the grid settings to view it through.
#[derive(Debug, Clone, Copy)]
pub struct Grid<'a> {
    schedule: &'a Schedule,
    config: GridConfig,
}

impl<'a> Grid<'a> {
    pub fn new(schedule: &'a Schedule, config: GridConfig) -> Self {
        Self { schedule, config }
    }

    /// The ordered slot rows of a single day. Identical for every day.
    pub fn rows(&self) -> Vec<Slot> {
        slot::rows(
            self.config.start_hour,
            self.config.end_hour,
            self.config.step_minutes,
        )
    }

    pub fn slot_interval(&self, day: NaiveDate, slot: Slot) -> Interval {
        slot.interval(day, self.config.step_minutes)
    }

    /// Classify one cell of the grid.
    pub fn state(&self, day: NaiveDate, slot: Slot) -> CellState<'a> {
        cell::state(self.schedule, self.slot_interval(day, slot))
    }

    /// Resolve a click on a cell, if it resolves to anything.
    pub fn select(&self, day: NaiveDate, slot: Slot) -> Option<Selection<'a>> {
        cell::select(self.schedule, day, self.slot_interval(day, slot))
    }

    /// Project every lesson onto the visible days as overlay blocks.
    pub fn blocks(&self, window: &ViewWindow) -> Vec<LessonBlock<'a>> {
        block::project(&self.schedule.lessons, window.days())
    }
}
