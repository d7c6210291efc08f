//! Raw record shapes and timestamp validation for the schedule file.

use std::result;

use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;

use crate::grid::Interval;

use super::{Lesson, Schedule};

#[derive(Debug, Deserialize)]
pub(super) struct RawSchedule {
    #[serde(default)]
    availability: Vec<RawWindow>,
    #[serde(default)]
    lessons: Vec<RawLesson>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawWindow {
    start_time: String,
    end_time: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLesson {
    id: i64,
    #[serde(default)]
    duration: i64,
    start_time: String,
    end_time: String,
    #[serde(default)]
    student: Option<String>,
}

/// A record whose timestamps could not be parsed. The record is dropped;
/// its siblings are kept.
#[derive(Debug, thiserror::Error)]
#[error("{record}: malformed timestamp {value:?}: {source}")]
pub struct MalformedTimestamp {
    pub record: String,
    pub value: String,
    #[source]
    pub source: chrono::ParseError,
}

/// Parse an ISO-8601 timestamp. A trailing UTC offset is accepted and
/// normalized away; without one the string is taken as naive wall time.
fn parse_timestamp(s: &str) -> result::Result<NaiveDateTime, chrono::ParseError> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(s) {
        return Ok(with_offset.naive_utc());
    }
    s.parse()
}

fn parse_interval(
    record: &str,
    start: &str,
    end: &str,
) -> result::Result<Interval, MalformedTimestamp> {
    let malformed = |value: &str, source| MalformedTimestamp {
        record: record.to_string(),
        value: value.to_string(),
        source,
    };
    let start_at = parse_timestamp(start).map_err(|e| malformed(start, e))?;
    let end_at = parse_timestamp(end).map_err(|e| malformed(end, e))?;
    Ok(Interval::new(start_at, end_at))
}

pub(super) fn validate(raw: RawSchedule) -> (Schedule, Vec<MalformedTimestamp>) {
    let mut schedule = Schedule::default();
    let mut malformed = vec![];

    for (i, window) in raw.availability.iter().enumerate() {
        let record = format!("availability window {}", i + 1);
        match parse_interval(&record, &window.start_time, &window.end_time) {
            Ok(interval) => schedule.availability.push(interval),
            Err(e) => malformed.push(e),
        }
    }

    for lesson in raw.lessons {
        let record = format!("lesson {}", lesson.id);
        match parse_interval(&record, &lesson.start_time, &lesson.end_time) {
            Ok(interval) => schedule.lessons.push(Lesson {
                id: lesson.id,
                duration: lesson.duration,
                interval,
                student: lesson.student,
            }),
            Err(e) => malformed.push(e),
        }
    }

    (schedule, malformed)
}
