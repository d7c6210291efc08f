//! Interactive paging over the grid. Every action rebuilds the view window
//! from scratch; the only state carried between iterations is the page index
//! and the width class.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::Config;
use crate::grid::{Grid, Slot};
use crate::view::{self, ViewWindow, WidthClass};

use super::error::Result;
use super::render;

const HELP: &str = "n next, p prev, g <date> go, w <pixels> resize, s <date> <HH:MM> select, q quit";

pub fn browse(
    grid: &Grid<'_>,
    config: &Config,
    days: &[NaiveDate],
    class: WidthClass,
    page: usize,
) -> Result<()> {
    let mut class = class;
    let mut page = page;

    loop {
        let page_size = class.page_size();
        let total = view::total_pages(days.len(), page_size);
        let window = ViewWindow::new(days, page, page_size);
        print!("{}", render::page(grid, &window, total));
        println!();
        println!("{HELP}");

        let line: String = promptly::prompt("openhours")?;
        let mut words = line.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some("n"), None, None) => page = view::next_page(page, total),
            (Some("p"), None, None) => page = view::prev_page(page),
            (Some("g"), Some(date), None) => match date.parse() {
                Ok(date) => page = view::page_containing(days, date, page_size),
                Err(_) => println!("Not a date: {date}"),
            },
            (Some("w"), Some(width), None) => match width.parse() {
                Ok(width) => {
                    // The page index is deliberately kept as-is across a
                    // page-size change; the visible dates may jump.
                    class = WidthClass::classify(
                        width,
                        config.narrow_max_width,
                        config.medium_max_width,
                    );
                    debug!(?class, "reclassified viewport");
                }
                Err(_) => println!("Not a width: {width}"),
            },
            (Some("s"), Some(date), Some(time)) => select(grid, date, time),
            (Some("q"), None, None) => break,
            (None, _, _) => {}
            _ => println!("Unrecognized command: {line}"),
        }
    }

    Ok(())
}

fn select(grid: &Grid<'_>, date: &str, time: &str) {
    let Ok(day) = date.parse::<NaiveDate>() else {
        println!("Not a date: {date}");
        return;
    };
    let Ok(slot) = time.parse::<Slot>() else {
        println!("Not a slot time: {time}");
        return;
    };
    match grid.select(day, slot) {
        Some(selection) => print!("{}", render::selection(&selection)),
        None => println!("Nothing to select at {day} {slot}"),
    }
}
