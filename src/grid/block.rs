use chrono::NaiveDate;

use super::{day_interval, Interval, Lesson};

/// The clamped portion of one lesson on one visible day, positioned as
/// minute offsets from that day's midnight.
///
/// Blocks exist so a multi-slot lesson can be drawn as one continuous shape
/// instead of a run of colored cells. Consumers turn the minute offsets into
/// pixels with their own row height; the engine never deals in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LessonBlock<'a> {
    pub lesson: &'a Lesson,
    /// Index into the visible day window, not into the full day range.
    pub day_index: usize,
    pub start_minutes: f64,
    pub duration_minutes: f64,
    pub overlap: Interval,
}

/// Project each lesson onto each visible day.
///
/// A lesson wholly inside one day yields one block. A lesson crossing
/// midnight yields one block per day it touches, each confined to its own
/// day and each independently selectable. Lessons outside the visible days
/// yield nothing, as do empty or inverted lesson intervals.
///
/// Blocks are additive overlays: they never feed back into per-cell states,
/// which are computed independently from the same lesson list.
pub fn project<'a>(lessons: &'a [Lesson], days: &[NaiveDate]) -> Vec<LessonBlock<'a>> {
    let mut blocks = vec![];
    for lesson in lessons {
        for (day_index, day) in days.iter().enumerate() {
            let day_bounds = day_interval(*day);
            if let Some(overlap) = lesson.interval.intersect(&day_bounds) {
                let offset = overlap.start() - day_bounds.start();
                blocks.push(LessonBlock {
                    lesson,
                    day_index,
                    start_minutes: offset.num_seconds() as f64 / 60.0,
                    duration_minutes: overlap.minutes(),
                    overlap,
                });
            }
        }
    }
    blocks
}
