//! Command-line host around the calendar engine: flag parsing, schedule and
//! config loading, and dispatch to rendering, selection and browsing.

use std::cmp;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{ArgAction, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{self, Config};
use crate::grid::{DateRange, Grid, Slot};
use crate::schedule::Schedule;
use crate::view::{self, ViewWindow, WidthClass};

mod browse;
mod error;
mod render;

#[derive(Debug, Parser)]
#[command(name = "openhours", about = "Browse a teacher's bookable time grid")]
pub struct Opt {
    /// Schedule file to load
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// Config file to load
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Viewport width in pixels, classified via the configured thresholds
    #[arg(short, long)]
    width: Option<u32>,
    /// View class to use, overriding --width
    #[arg(long, value_enum)]
    view: Option<WidthClass>,
    /// Date whose page is shown first
    #[arg(short, long)]
    date: Option<NaiveDate>,
    /// Overwrite the current date
    #[arg(long)]
    today: Option<NaiveDate>,
    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a page of the availability grid [default]
    Show {
        /// Page to show instead of the one containing --date
        #[arg(long)]
        page: Option<usize>,
    },
    /// Step through the grid interactively
    Browse,
    /// Resolve a click on the cell at DAY TIME
    Select { day: NaiveDate, time: Slot },
    /// List the overlay blocks of the visible page
    Blocks {
        /// Page to project instead of the one containing --date
        #[arg(long)]
        page: Option<usize>,
    },
}

pub fn run() -> anyhow::Result<()> {
    let opt = Opt::parse();
    init_tracing(opt.verbose);

    let config = Config::load(opt.config.as_deref())?;
    let file = opt.file.unwrap_or_else(config::default_schedule_file);
    let (schedule, malformed) = Schedule::load(&file)?;
    for record in &malformed {
        warn!("{record}");
    }

    let today = opt.today.unwrap_or_else(|| Local::now().date_naive());
    let range = DateRange::browse(&schedule.availability, config.horizon(today), today);
    let days: Vec<NaiveDate> = range.map(|r| r.days().collect()).unwrap_or_default();

    let class = match (opt.view, opt.width) {
        (Some(class), _) => class,
        (None, Some(width)) => {
            WidthClass::classify(width, config.narrow_max_width, config.medium_max_width)
        }
        (None, None) => WidthClass::Wide,
    };
    let page_size = class.page_size();
    let total = view::total_pages(days.len(), page_size);
    info!(
        days = days.len(),
        pages = total,
        ?class,
        "derived browsing range"
    );

    let anchor_page = match opt.date {
        Some(date) => view::page_containing(&days, date, page_size),
        None => 0,
    };

    let grid = Grid::new(&schedule, config.grid());

    match opt.command.unwrap_or(Command::Show { page: None }) {
        Command::Show { page } => {
            let page = clamp_page(page, anchor_page, total);
            let window = ViewWindow::new(&days, page, page_size);
            print!("{}", render::page(&grid, &window, total));
        }
        Command::Browse => browse::browse(&grid, &config, &days, class, anchor_page)?,
        Command::Select { day, time } => match grid.select(day, time) {
            Some(selection) => print!("{}", render::selection(&selection)),
            None => println!("Nothing to select at {} {}", day, time),
        },
        Command::Blocks { page } => {
            let page = clamp_page(page, anchor_page, total);
            let window = ViewWindow::new(&days, page, page_size);
            for block in grid.blocks(&window) {
                println!("{}", render::block_line(&block, &window));
            }
        }
    }

    Ok(())
}

/// An explicit `--page` is clamped into range; without one the anchor page
/// (already in range) is used.
fn clamp_page(explicit: Option<usize>, anchor_page: usize, total: usize) -> usize {
    match explicit {
        Some(page) => cmp::min(page, total - 1),
        None => anchor_page,
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .expect("default log filter is valid");
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
