//! Paging over the day range: viewport classification, page arithmetic, and
//! the immutable window of currently visible days.

use std::cmp;

use chrono::NaiveDate;
use clap::ValueEnum;

/// Coarse viewport width. This is the only resize input the calendar needs;
/// measuring and debouncing actual widths is the host's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WidthClass {
    Narrow,
    Medium,
    Wide,
}

impl WidthClass {
    /// Classify a raw pixel width against the configured thresholds.
    pub fn classify(width: u32, narrow_max: u32, medium_max: u32) -> Self {
        if width <= narrow_max {
            Self::Narrow
        } else if width <= medium_max {
            Self::Medium
        } else {
            Self::Wide
        }
    }

    /// How many day columns fit a viewport of this class.
    pub fn page_size(self) -> usize {
        match self {
            Self::Narrow => 1,
            Self::Medium => 3,
            Self::Wide => 7,
        }
    }
}

/// Number of pages needed for `day_count` days, never less than one even
/// for an empty day list.
pub fn total_pages(day_count: usize, page_size: usize) -> usize {
    cmp::max(1, (day_count + page_size - 1) / page_size)
}

/// Step one page forward, stopping at the last page.
pub fn next_page(page_index: usize, total_pages: usize) -> usize {
    cmp::min(page_index + 1, total_pages - 1)
}

/// Step one page back, stopping at the first page.
pub fn prev_page(page_index: usize) -> usize {
    page_index.saturating_sub(1)
}

/// The page whose window contains `anchor`, or 0 if the date is not in the
/// range at all.
pub fn page_containing(days: &[NaiveDate], anchor: NaiveDate, page_size: usize) -> usize {
    match days.iter().position(|day| *day == anchor) {
        Some(i) => i / page_size,
        None => 0,
    }
}

/// The contiguous run of days currently on screen.
///
/// A window is a value: it is rebuilt from scratch whenever the day range,
/// page size or page index changes, never patched in place. Changing the
/// page size reinterprets the page index as-is; the visible dates may jump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewWindow {
    days: Vec<NaiveDate>,
    page_index: usize,
    page_size: usize,
}

impl ViewWindow {
    /// Slice the visible days out of the full range.
    ///
    /// The page index is not clamped here; an out-of-range index yields an
    /// empty window. Navigation is expected to clamp through [`next_page`]
    /// and [`prev_page`] before constructing the window, not to lean on the
    /// empty result.
    pub fn new(all_days: &[NaiveDate], page_index: usize, page_size: usize) -> Self {
        let from = page_index.saturating_mul(page_size);
        let until = cmp::min(from.saturating_add(page_size), all_days.len());
        let days = if from < until {
            all_days[from..until].to_vec()
        } else {
            vec![]
        };
        Self {
            days,
            page_index,
            page_size,
        }
    }

    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Header title for the window, e.g. `23 Aug - 29 Aug`. Empty when no
    /// days are visible.
    pub fn title(&self) -> String {
        match (self.days.first(), self.days.last()) {
            (Some(first), Some(last)) => {
                format!("{} - {}", first.format("%-d %b"), last.format("%-d %b"))
            }
            _ => String::new(),
        }
    }
}
