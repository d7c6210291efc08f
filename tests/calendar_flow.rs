//! End-to-end flow over a realistic schedule: load from disk, derive the
//! day range, paginate, classify cells, project overlay blocks and resolve
//! selections.

use std::fs;

use chrono::NaiveDate;
use tempfile::tempdir;

use openhours::grid::{CellState, DateRange, Grid, GridConfig, Selection, Slot};
use openhours::schedule::Schedule;
use openhours::view::{self, ViewWindow, WidthClass};

const SCHEDULE_JSON: &str = r#"{
    "availability": [
        {"startTime": "2025-08-23T22:30:00+00:00", "endTime": "2025-08-24T02:29:59+00:00"},
        {"startTime": "2025-08-25T01:30:00+00:00", "endTime": "2025-08-25T04:59:59+00:00"},
        {"startTime": "2025-08-25T11:00:00+00:00", "endTime": "2025-08-25T19:29:59+00:00"},
        {"startTime": "2025-08-27T02:30:00+00:00", "endTime": "2025-08-27T06:59:59+00:00"},
        {"startTime": "2025-08-28T23:00:00+00:00", "endTime": "2025-08-29T08:29:59+00:00"},
        {"startTime": "2025-08-30T22:30:00+00:00", "endTime": "2025-08-31T02:29:59+00:00"},
        {"startTime": "2025-09-01T01:30:00+00:00", "endTime": "2025-09-01T04:59:59+00:00"},
        {"startTime": "2025-09-01T11:00:00+00:00", "endTime": "2025-09-01T19:29:59+00:00"}
    ],
    "lessons": [
        {"id": 1, "duration": 60, "startTime": "2025-08-25T09:00:00",
         "endTime": "2025-08-25T10:00:00", "student": "Alex"},
        {"id": 2, "duration": 90, "startTime": "2025-08-27T03:00:00",
         "endTime": "2025-08-27T04:30:00", "student": "Sam"},
        {"id": 3, "duration": 90, "startTime": "2025-08-28T23:30:00",
         "endTime": "2025-08-29T01:00:00", "student": "John"}
    ]
}"#;

fn date(s: &str) -> NaiveDate {
    s.parse().expect("date")
}

#[test]
fn full_calendar_flow() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("schedule.json");
    fs::write(&path, SCHEDULE_JSON).expect("write schedule");

    let (schedule, malformed) = Schedule::load(&path).expect("load schedule");
    assert!(malformed.is_empty());
    assert_eq!(schedule.availability.len(), 8);
    assert_eq!(schedule.lessons.len(), 3);

    // Day range: from the earliest window through the horizon, inclusive.
    let horizon = "2025-09-05T23:59:59".parse().expect("horizon");
    let range =
        DateRange::browse(&schedule.availability, horizon, date("2025-08-20")).expect("range");
    let days: Vec<NaiveDate> = range.days().collect();
    assert_eq!(days.first(), Some(&date("2025-08-23")));
    assert_eq!(days.last(), Some(&date("2025-09-05")));
    assert_eq!(days.len(), 14);

    // Wide viewport: seven days per page, two pages, clamped navigation.
    let class = WidthClass::classify(1200, 640, 1024);
    assert_eq!(class, WidthClass::Wide);
    let size = class.page_size();
    let total = view::total_pages(days.len(), size);
    assert_eq!(total, 2);
    assert_eq!(view::next_page(1, total), 1);
    assert_eq!(view::prev_page(0), 0);

    let grid = Grid::new(&schedule, GridConfig::default());

    // Sam's lesson sits inside an availability window; booked wins.
    match grid.state(date("2025-08-27"), Slot::new(3, 0)) {
        CellState::Occupied(lesson) => assert_eq!(lesson.id, 2),
        state => panic!("expected an occupied cell, got {state:?}"),
    }

    // An open cell selects its own slot interval, not the window behind it.
    match grid.select(date("2025-08-25"), Slot::new(12, 0)) {
        Some(Selection::Slot(interval)) => {
            assert_eq!(interval.start(), "2025-08-25T12:00:00".parse().unwrap());
            assert_eq!(interval.end(), "2025-08-25T12:30:00".parse().unwrap());
        }
        other => panic!("expected a slot selection, got {other:?}"),
    }

    // A booked cell inspects the lesson, clamped to the clicked day.
    match grid.select(date("2025-08-28"), Slot::new(23, 30)) {
        Some(Selection::Lesson { lesson, overlap }) => {
            assert_eq!(lesson.id, 3);
            assert_eq!(overlap.start(), "2025-08-28T23:30:00".parse().unwrap());
            assert_eq!(overlap.end(), "2025-08-29T00:00:00".parse().unwrap());
        }
        other => panic!("expected a lesson selection, got {other:?}"),
    }

    // John's lesson crosses midnight inside the first page: two blocks.
    let window = ViewWindow::new(&days, 0, size);
    let blocks = grid.blocks(&window);
    let johns: Vec<_> = blocks.iter().filter(|b| b.lesson.id == 3).collect();
    assert_eq!(johns.len(), 2);
    assert_eq!(johns[0].day_index, 5);
    assert_eq!(johns[0].start_minutes, 1410.0);
    assert_eq!(johns[0].duration_minutes, 30.0);
    assert_eq!(johns[1].day_index, 6);
    assert_eq!(johns[1].start_minutes, 0.0);
    assert_eq!(johns[1].duration_minutes, 60.0);

    // Re-deriving everything from the same inputs changes nothing.
    let days_again: Vec<NaiveDate> = range.days().collect();
    assert_eq!(days, days_again);
    assert_eq!(blocks, grid.blocks(&window));
    assert_eq!(grid.rows(), grid.rows());
}

#[test]
fn second_page_only_projects_its_own_days() {
    let (schedule, _) = Schedule::from_json(SCHEDULE_JSON).expect("parse");
    let horizon = "2025-09-05T23:59:59".parse().expect("horizon");
    let range =
        DateRange::browse(&schedule.availability, horizon, date("2025-08-20")).expect("range");
    let days: Vec<NaiveDate> = range.days().collect();

    // Page 1 holds 30 Aug - 5 Sep; none of the lessons touch it.
    let window = ViewWindow::new(&days, 1, 7);
    assert_eq!(window.days().first(), Some(&date("2025-08-30")));
    assert!(Grid::new(&schedule, GridConfig::default())
        .blocks(&window)
        .is_empty());
}

#[test]
fn empty_schedule_is_stable() {
    let (schedule, malformed) = Schedule::from_json("{}").expect("parse");
    assert!(malformed.is_empty());

    let today = date("2025-08-20");
    let horizon = "2025-09-05T23:59:59".parse().expect("horizon");
    let range = DateRange::browse(&schedule.availability, horizon, today).expect("range");
    let days: Vec<NaiveDate> = range.days().collect();
    assert_eq!(days.first(), Some(&today));
    assert_eq!(days.last(), Some(&date("2025-09-05")));

    let grid = Grid::new(&schedule, GridConfig::default());
    for day in &days {
        for slot in grid.rows() {
            assert_eq!(grid.state(*day, slot), CellState::Empty);
            assert_eq!(grid.select(*day, slot), None);
        }
    }
    assert!(view::total_pages(days.len(), 7) >= 1);

    let window = ViewWindow::new(&days, 0, 7);
    assert!(grid.blocks(&window).is_empty());
}

#[test]
fn narrow_viewport_pages_one_day_at_a_time() {
    let (schedule, _) = Schedule::from_json(SCHEDULE_JSON).expect("parse");
    let horizon = "2025-09-05T23:59:59".parse().expect("horizon");
    let range =
        DateRange::browse(&schedule.availability, horizon, date("2025-08-20")).expect("range");
    let days: Vec<NaiveDate> = range.days().collect();

    let size = WidthClass::classify(480, 640, 1024).page_size();
    assert_eq!(size, 1);
    assert_eq!(view::total_pages(days.len(), size), 14);

    // Anchor on Alex's lesson day and walk forward one page.
    let page = view::page_containing(&days, date("2025-08-25"), size);
    assert_eq!(page, 2);
    let window = ViewWindow::new(&days, page, size);
    assert_eq!(window.days(), &[date("2025-08-25")]);

    let next = view::next_page(page, view::total_pages(days.len(), size));
    let window = ViewWindow::new(&days, next, size);
    assert_eq!(window.days(), &[date("2025-08-26")]);
}
