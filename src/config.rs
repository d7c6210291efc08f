//! Calendar configuration: visible hours, slot granularity, the minimum
//! browsing horizon, and the viewport width thresholds. Loaded from a TOML
//! file, with built-in defaults for everything.

use std::path::{Path, PathBuf};
use std::{fs, io, result};

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::grid::GridConfig;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Toml(#[from] toml::de::Error),
    #[error("granularity must be at least one minute")]
    ZeroGranularity,
    #[error("visible hours {start}..{end} are not a valid range")]
    BadHours { start: u32, end: u32 },
    #[error("width thresholds must satisfy narrow < medium")]
    BadThresholds,
}

pub type Result<T> = result::Result<T, Error>;

/// How many days past today the browsable range reaches when the schedule
/// ends earlier and no explicit horizon is configured.
const DEFAULT_HORIZON_DAYS: i64 = 14;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// First visible hour of each day.
    pub start_hour: u32,
    /// First hour past the visible range.
    pub end_hour: u32,
    /// Slot length in minutes.
    pub granularity: u32,
    /// The browsable day range reaches at least this instant.
    pub horizon: Option<NaiveDateTime>,
    /// Widths up to this many pixels show a single day.
    pub narrow_max_width: u32,
    /// Widths up to this many pixels show three days.
    pub medium_max_width: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_hour: 0,
            end_hour: 24,
            granularity: 30,
            horizon: None,
            narrow_max_width: 640,
            medium_max_width: 1024,
        }
    }
}

impl Config {
    /// Load the config file, falling back to defaults if there is none.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => default_config_file(),
        };
        let config = match fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(e.into()),
        };
        config.validated()
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validated()
    }

    fn validated(self) -> Result<Self> {
        if self.granularity == 0 {
            return Err(Error::ZeroGranularity);
        }
        if self.start_hour >= self.end_hour || self.end_hour > 24 {
            return Err(Error::BadHours {
                start: self.start_hour,
                end: self.end_hour,
            });
        }
        if self.narrow_max_width >= self.medium_max_width {
            return Err(Error::BadThresholds);
        }
        Ok(self)
    }

    pub fn grid(&self) -> GridConfig {
        GridConfig {
            start_hour: self.start_hour,
            end_hour: self.end_hour,
            step_minutes: self.granularity,
        }
    }

    /// The instant the browsable day range must reach even when the
    /// schedule ends earlier.
    pub fn horizon(&self, today: NaiveDate) -> NaiveDateTime {
        self.horizon.unwrap_or_else(|| {
            (today + Duration::days(DEFAULT_HORIZON_DAYS)).and_time(NaiveTime::MIN)
        })
    }
}

pub fn default_config_file() -> PathBuf {
    project_dirs().config_dir().join("config.toml")
}

pub fn default_schedule_file() -> PathBuf {
    project_dirs().config_dir().join("schedule.json")
}

fn project_dirs() -> ProjectDirs {
    ProjectDirs::from("", "", "openhours").expect("could not determine config dir")
}
