//! Configuration data models and validation

use crate::defaults;
use crate::error::{AppError, Result};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Ordering applied to matching students
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Day-of-year of the birthday
    #[default]
    Birthday,
    /// Student name
    Name,
    /// Days until the next birthday
    Upcoming,
}

impl SortOrder {
    /// Order used when none is requested.
    ///
    /// A window can wrap past the end of the year, so it lists the soonest
    /// birthdays first.
    pub fn default_for(within_days: Option<u32>) -> Self {
        match within_days {
            Some(_) => SortOrder::Upcoming,
            None => SortOrder::Birthday,
        }
    }
}

/// Configuration for the birthday reminder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderConfig {
    /// Roster file; the bundled roster is used when absent
    #[serde(default)]
    pub roster_path: Option<PathBuf>,

    /// Month to list birthdays for
    pub month: u32,

    /// List birthdays falling within this many days instead of a month
    #[serde(default)]
    pub within_days: Option<u32>,

    /// Output ordering
    #[serde(default)]
    pub sort: SortOrder,

    /// Reference date for "current month" and "upcoming"
    pub today: NaiveDate,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        let today = Local::now().date_naive();
        Self {
            roster_path: None,
            month: today.month(),
            within_days: None,
            sort: SortOrder::default(),
            today,
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl ReminderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if !(1..=12).contains(&self.month) {
            return Err(AppError::validation(format!("Month must be between 1 and 12, got: {}", self.month)));
        }

        if let Some(days) = self.within_days {
            if days > defaults::MAX_WITHIN_DAYS {
                return Err(AppError::validation(format!(
                    "Reminder window cannot exceed {} days, got: {}",
                    defaults::MAX_WITHIN_DAYS,
                    days
                )));
            }
        }

        validate_path(&self.roster_path, "Roster")
    }

    /// Merge environment variables into this configuration
    pub fn merge_from_env(&mut self) -> Result<()> {
        if let Ok(roster) = std::env::var("STUDENT_ROSTER") {
            let roster = roster.trim();
            if !roster.is_empty() {
                self.roster_path = Some(PathBuf::from(roster));
            }
        }

        if let Ok(enable_color) = std::env::var("ENABLE_COLOR") {
            self.enable_color = enable_color.parse()
                .map_err(|e| AppError::config(format!("Invalid ENABLE_COLOR value '{}': {}", enable_color, e)))?;
        }

        Ok(())
    }
}

/// Configuration for the task timer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Word list file; the bundled list is used when absent
    #[serde(default)]
    pub wordlist_path: Option<PathBuf>,

    /// Cap on words appended by the appending tasks
    #[serde(default = "default_max_count")]
    pub max_count: usize,

    /// 1-based task numbers to run; empty runs every task
    #[serde(default)]
    pub tasks: Vec<usize>,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            wordlist_path: None,
            max_count: default_max_count(),
            tasks: Vec::new(),
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl TimerConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if self.max_count == 0 {
            return Err(AppError::validation("Max count must be greater than 0"));
        }

        if self.max_count > defaults::MAX_COUNT_LIMIT {
            return Err(AppError::validation(format!(
                "Max count cannot exceed {}",
                defaults::MAX_COUNT_LIMIT
            )));
        }

        for task in &self.tasks {
            if !(1..=defaults::TASK_COUNT).contains(task) {
                return Err(AppError::validation(format!(
                    "Task number must be between 1 and {}, got: {}",
                    defaults::TASK_COUNT,
                    task
                )));
            }
        }

        validate_path(&self.wordlist_path, "Word list")
    }

    /// Whether the 1-based task number is selected
    pub fn runs_task(&self, number: usize) -> bool {
        self.tasks.is_empty() || self.tasks.contains(&number)
    }

    /// Merge environment variables into this configuration
    pub fn merge_from_env(&mut self) -> Result<()> {
        if let Ok(wordlist) = std::env::var("TASKTIMER_WORDLIST") {
            let wordlist = wordlist.trim();
            if !wordlist.is_empty() {
                self.wordlist_path = Some(PathBuf::from(wordlist));
            }
        }

        if let Ok(max_count) = std::env::var("TASKTIMER_MAX_COUNT") {
            self.max_count = max_count.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid TASKTIMER_MAX_COUNT value '{}': {}", max_count, e)))?;
        }

        if let Ok(enable_color) = std::env::var("ENABLE_COLOR") {
            self.enable_color = enable_color.parse()
                .map_err(|e| AppError::config(format!("Invalid ENABLE_COLOR value '{}': {}", enable_color, e)))?;
        }

        Ok(())
    }
}

fn validate_path(path: &Option<PathBuf>, what: &str) -> Result<()> {
    match path {
        Some(path) if path.as_os_str().is_empty() => {
            Err(AppError::config(format!("{} path cannot be empty", what)))
        }
        _ => Ok(()),
    }
}

fn default_max_count() -> usize {
    defaults::DEFAULT_MAX_COUNT
}

fn default_enable_color() -> bool {
    defaults::DEFAULT_ENABLE_COLOR
}
