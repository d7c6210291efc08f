//! The teacher's schedule: open availability windows and booked lessons,
//! loaded from a JSON file.

use std::path::Path;
use std::{fs, io, result};

use crate::grid::Interval;

pub use self::parse::MalformedTimestamp;

mod parse;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = result::Result<T, Error>;

/// A booked lesson.
#[derive(Debug, Clone, PartialEq)]
pub struct Lesson {
    pub id: i64,
    /// What the booking claims the lesson lasts, in minutes. Display-only:
    /// all geometry derives from `interval`, even when the two disagree.
    pub duration: i64,
    pub interval: Interval,
    pub student: Option<String>,
}

impl Lesson {
    /// Name to show for the lesson when there is no student on record.
    pub fn label(&self) -> &str {
        self.student.as_deref().unwrap_or("Lesson")
    }
}

/// Availability windows and lessons, kept in supplied order. The caller
/// conventionally supplies disjoint ascending windows, but nothing here
/// requires that.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    pub availability: Vec<Interval>,
    pub lessons: Vec<Lesson>,
}

impl Schedule {
    /// Load a schedule file.
    ///
    /// Records whose timestamps do not parse are returned separately and
    /// left out of the schedule; one bad record never discards the rest.
    pub fn load(path: &Path) -> Result<(Self, Vec<MalformedTimestamp>)> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<(Self, Vec<MalformedTimestamp>)> {
        let raw = serde_json::from_str(content)?;
        Ok(parse::validate(raw))
    }
}
