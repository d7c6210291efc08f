use chrono::NaiveDate;

use crate::schedule::Schedule;

use super::{day_interval, Interval, Lesson, Selection};

/// Display state of a single (day, slot) cell. A booked slot is `Occupied`
/// even when an availability window also covers it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellState<'a> {
    Empty,
    Available,
    Occupied(&'a Lesson),
}

/// Classify the cell covering `slot_interval`. The occupying lesson is the
/// first one in input order that overlaps the slot.
pub fn state<'a>(schedule: &'a Schedule, slot_interval: Interval) -> CellState<'a> {
    let occupying = schedule
        .lessons
        .iter()
        .find(|lesson| slot_interval.overlaps(&lesson.interval));
    if let Some(lesson) = occupying {
        CellState::Occupied(lesson)
    } else if schedule
        .availability
        .iter()
        .any(|window| slot_interval.overlaps(window))
    {
        CellState::Available
    } else {
        CellState::Empty
    }
}

/// Resolve a click on the cell covering `slot_interval` on `day`.
///
/// An open cell selects its own slot interval, not the availability window
/// behind it. A booked cell inspects the lesson, clamped to the clicked day.
/// An empty cell selects nothing.
pub fn select<'a>(
    schedule: &'a Schedule,
    day: NaiveDate,
    slot_interval: Interval,
) -> Option<Selection<'a>> {
    match state(schedule, slot_interval) {
        CellState::Occupied(lesson) => {
            let overlap = lesson.interval.intersect(&day_interval(day))?;
            Some(Selection::Lesson { lesson, overlap })
        }
        CellState::Available => Some(Selection::Slot(slot_interval)),
        CellState::Empty => None,
    }
}
