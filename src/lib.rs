//! Classroom Tools
//!
//! Two small command-line programs sharing one library: `birthdays` lists
//! the students of a roster whose birthdays fall in a month or a window of
//! days, and `tasktimer` times six ways of reading a word list.

pub mod birthday;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod timer;
pub mod words;

// Re-export commonly used types
pub use birthday::{filter_and_print, select, BirthdayReminder, Registrar, StudentSource};
pub use error::{AppError, Result};
pub use models::{
    ReminderConfig, SortOrder, Student, TaskFailure, TaskOutcome, TimerConfig, TimingResult, WordStats,
};
pub use output::{ColoredFormatter, OutputFormatter, OutputFormatterFactory, PlainFormatter};
pub use timer::{Stopwatch, Task, TaskTimer};
pub use words::WordSource;

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Build information recorded by the build script
pub const BUILD_TIME: Option<&str> = option_env!("BUILD_TIME");
pub const GIT_COMMIT: Option<&str> = option_env!("GIT_COMMIT");
pub const TARGET_TRIPLE: Option<&str> = option_env!("TARGET_TRIPLE");

/// One-line version banner used by `--debug`
pub fn version_banner(binary: &str) -> String {
    let mut banner = format!("{} v{} ({})", binary, VERSION, PKG_NAME);
    if let Some(commit) = GIT_COMMIT {
        banner.push_str(&format!(" commit {}", commit));
    }
    if let Some(built) = BUILD_TIME {
        banner.push_str(&format!(" built {}", built));
    }
    if let Some(target) = TARGET_TRIPLE {
        banner.push_str(&format!(" for {}", target));
    }
    banner
}

/// Default configuration values
pub mod defaults {
    /// Words processed by the appending tasks
    pub const DEFAULT_MAX_COUNT: usize = 50_000;
    pub const MAX_COUNT_LIMIT: usize = 1_000_000;
    /// Number of timed strategies
    pub const TASK_COUNT: usize = 6;
    pub const MAX_WITHIN_DAYS: u32 = 366;
    pub const DEFAULT_ENABLE_COLOR: bool = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_banner() {
        let banner = version_banner("tasktimer");
        assert!(banner.starts_with(&format!("tasktimer v{}", VERSION)));
        assert!(banner.contains(PKG_NAME));
        if let Some(target) = TARGET_TRIPLE {
            assert!(banner.ends_with(&format!(" for {}", target)));
        }
    }
}
