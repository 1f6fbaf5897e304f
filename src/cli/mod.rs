//! Command-line interfaces for the two binaries

use crate::config::EnvManager;
use crate::models::SortOrder;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Birthday Reminder - list students with birthdays coming up
#[derive(Parser, Debug, Clone)]
#[command(name = "birthdays")]
#[command(version, about, long_about = None)]
#[command(after_help = EnvManager::display_env_help())]
pub struct BirthdayCli {
    /// Month to list birthdays for (1-12, default: current month)
    #[arg(short, long, value_parser = parse_month)]
    pub month: Option<u32>,

    /// List birthdays within this many days instead of a whole month
    #[arg(short, long, value_name = "DAYS", value_parser = parse_window)]
    pub within: Option<u32>,

    /// Ordering of the reminders [default: birthday, or upcoming with --within]
    #[arg(short, long, value_enum)]
    pub sort: Option<SortOrder>,

    /// Roster JSON file to use instead of the bundled roster
    #[arg(long, value_name = "PATH")]
    pub roster: Option<PathBuf>,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl BirthdayCli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        validate_color_flags(self.color, self.no_color)?;

        if self.month.is_some() && self.within.is_some() {
            return Err("Cannot specify both --month and --within".to_string());
        }

        Ok(())
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        resolve_colors(self.color, self.no_color)
    }
}

/// Task Timer - time different ways of reading a word list
#[derive(Parser, Debug, Clone)]
#[command(name = "tasktimer")]
#[command(version, about, long_about = None)]
#[command(after_help = EnvManager::display_env_help())]
pub struct TimerCli {
    /// Word list file (one word per line) to use instead of the bundled list
    #[arg(long, value_name = "PATH")]
    pub wordlist: Option<PathBuf>,

    /// Maximum number of words the appending tasks process
    #[arg(long, value_parser = parse_max_count)]
    pub max_count: Option<usize>,

    /// Run only this task (1-6, can be used multiple times)
    #[arg(short, long = "task", action = ArgAction::Append, value_parser = clap::value_parser!(u8).range(1..=6))]
    pub tasks: Vec<u8>,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl TimerCli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        validate_color_flags(self.color, self.no_color)
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        resolve_colors(self.color, self.no_color)
    }

    /// Selected task numbers, deduplicated and in run order
    pub fn selected_tasks(&self) -> Vec<usize> {
        let mut tasks: Vec<usize> = self.tasks.iter().map(|&t| usize::from(t)).collect();
        tasks.sort_unstable();
        tasks.dedup();
        tasks
    }
}

fn validate_color_flags(color: bool, no_color: bool) -> Result<(), String> {
    if color && no_color {
        return Err("Cannot specify both --color and --no-color".to_string());
    }
    Ok(())
}

fn resolve_colors(color: bool, no_color: bool) -> bool {
    if color {
        true
    } else if no_color {
        false
    } else {
        supports_color()
    }
}

/// Parse a month number
fn parse_month(s: &str) -> Result<u32, String> {
    s.parse::<u32>()
        .map_err(|_| format!("Invalid month: {}", s))
        .and_then(|month| {
            if (1..=12).contains(&month) {
                Ok(month)
            } else {
                Err("Month must be between 1 and 12".to_string())
            }
        })
}

/// Parse a reminder window in days
fn parse_window(s: &str) -> Result<u32, String> {
    s.parse::<u32>()
        .map_err(|_| format!("Invalid number of days: {}", s))
        .and_then(|days| {
            if days > crate::defaults::MAX_WITHIN_DAYS {
                Err(format!("Window cannot exceed {} days", crate::defaults::MAX_WITHIN_DAYS))
            } else {
                Ok(days)
            }
        })
}

/// Parse the appending cap
fn parse_max_count(s: &str) -> Result<usize, String> {
    if s.starts_with('+') {
        return Err(format!("Invalid count: {}", s));
    }

    s.replace('_', "")
        .parse::<usize>()
        .map_err(|_| format!("Invalid count: {}", s))
        .and_then(|count| {
            if count == 0 {
                Err("Count must be greater than 0".to_string())
            } else if count > crate::defaults::MAX_COUNT_LIMIT {
                Err(format!("Count cannot exceed {}", crate::defaults::MAX_COUNT_LIMIT))
            } else {
                Ok(count)
            }
        })
}

/// Check if the terminal supports color output
fn supports_color() -> bool {
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    #[cfg(target_os = "windows")]
    {
        if std::env::var("ANSICON").is_ok() || std::env::var("ConEmuANSI").is_ok() {
            return true;
        }
    }

    // Default to true on Unix-like systems, false on Windows
    #[cfg(unix)]
    {
        true
    }
    #[cfg(not(unix))]
    {
        false
    }
}
