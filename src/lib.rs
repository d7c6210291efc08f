//! A paginated, time-gridded availability calendar for one teacher,
//! rendered in the terminal.
//!
//! The engine modules ([`grid`], [`view`]) are pure interval geometry:
//! half-open overlap checks, day-range derivation, slot discretization,
//! pagination, and per-day lesson projection. [`schedule`] loads and
//! validates the input data, [`config`] holds the tunables, and [`cli`]
//! hosts it all behind a command-line interface.

pub mod cli;
pub mod config;
pub mod grid;
pub mod schedule;
pub mod view;
