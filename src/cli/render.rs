//! Turn grid queries into colored terminal output. All layout here is
//! character cells; the engine only supplies day indices and minute offsets.

use std::fmt::Write;

use colored::Colorize;

use crate::grid::{CellState, Grid, LessonBlock, Selection};
use crate::view::ViewWindow;

const TIME_WIDTH: usize = 5;
const CELL_WIDTH: usize = 12;

/// Render one page of the grid: header, day captions, then one line per
/// slot row.
pub fn page(grid: &Grid<'_>, window: &ViewWindow, total_pages: usize) -> String {
    let mut out = String::new();

    let title = window.title();
    let paging = format!("page {}/{}", window.page_index() + 1, total_pages);
    if title.is_empty() {
        let _ = writeln!(out, "{} ({})", paging, "no days to show".dimmed());
        return out;
    }
    let _ = writeln!(out, "{}  {}", title.bold(), paging.dimmed());

    let mut captions = format!("{:>tw$}", "", tw = TIME_WIDTH);
    for day in window.days() {
        let caption = format!("{}", day.format("%a %-d %b"));
        let _ = write!(captions, " {:^cw$}", caption, cw = CELL_WIDTH);
    }
    let _ = writeln!(out, "{}", captions);

    for slot in grid.rows() {
        let _ = write!(out, "{:>tw$}", format!("{slot}"), tw = TIME_WIDTH);
        for day in window.days() {
            let _ = write!(out, " {}", cell(&grid.state(*day, slot)));
        }
        let _ = writeln!(out);
    }

    out
}

fn cell(state: &CellState<'_>) -> String {
    match state {
        CellState::Empty => {
            let text = format!("{:^cw$}", "\u{b7}", cw = CELL_WIDTH);
            text.dimmed().to_string()
        }
        CellState::Available => {
            let text = format!("{:^cw$}", "open", cw = CELL_WIDTH);
            text.black().on_green().to_string()
        }
        CellState::Occupied(lesson) => {
            let mut label = lesson.label().to_string();
            label.truncate(CELL_WIDTH - 2);
            let text = format!("{:^cw$}", label, cw = CELL_WIDTH);
            text.white().on_red().to_string()
        }
    }
}

/// What the user is told after a click resolves.
pub fn selection(selection: &Selection<'_>) -> String {
    match selection {
        Selection::Slot(interval) => format!(
            "Selected slot: {} - {}\n",
            interval.start().format("%-d %b %Y, %H:%M"),
            interval.end().format("%H:%M"),
        ),
        Selection::Lesson { lesson, overlap } => format!(
            "{} \u{2022} {}m\n{} - {}\nOn this day: {} - {}\n",
            lesson.label().bold(),
            lesson.duration,
            lesson.interval.start().format("%-d %b, %H:%M"),
            lesson.interval.end().format("%-d %b, %H:%M"),
            overlap.start().format("%H:%M"),
            overlap.end().format("%H:%M"),
        ),
    }
}

/// One line of the overlay-block listing.
pub fn block_line(block: &LessonBlock<'_>, window: &ViewWindow) -> String {
    let day = window.days()[block.day_index];
    format!(
        "{} {} +{}m for {}m ({})",
        day.format("%a %-d %b"),
        block.lesson.label(),
        block.start_minutes,
        block.duration_minutes,
        block.overlap,
    )
}
