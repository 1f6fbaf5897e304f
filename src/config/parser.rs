//! Configuration parsing from CLI arguments and environment variables

use crate::{
    cli::{BirthdayCli, TimerCli},
    config::env::EnvManager,
    error::{AppError, Result},
    models::{ReminderConfig, SortOrder, TimerConfig},
};

/// Combines defaults, the `.env` file, environment variables and CLI arguments
pub struct ConfigParser<C> {
    cli: C,
}

impl<C> ConfigParser<C> {
    /// Create a new configuration parser with CLI arguments
    pub fn new(cli: C) -> Self {
        Self { cli }
    }
}

impl ConfigParser<BirthdayCli> {
    /// Parse and build the reminder configuration
    pub fn parse(&self) -> Result<ReminderConfig> {
        self.cli.validate().map_err(AppError::validation)?;
        let mut config = ReminderConfig::default();

        EnvManager::load_env_file(self.cli.debug)?;
        config.merge_from_env()?;

        if let Some(month) = self.cli.month {
            config.month = month;
        }
        config.within_days = self.cli.within;
        config.sort = self.cli.sort.unwrap_or_else(|| SortOrder::default_for(config.within_days));
        if let Some(ref roster) = self.cli.roster {
            config.roster_path = Some(roster.clone());
        }
        if self.cli.color || self.cli.no_color || std::env::var("ENABLE_COLOR").is_err() {
            config.enable_color = self.cli.use_colors();
        }
        config.verbose = self.cli.verbose;
        config.debug = self.cli.debug;

        config.validate()?;
        Ok(config)
    }
}

impl ConfigParser<TimerCli> {
    /// Parse and build the timer configuration
    pub fn parse(&self) -> Result<TimerConfig> {
        self.cli.validate().map_err(AppError::validation)?;
        let mut config = TimerConfig::default();

        EnvManager::load_env_file(self.cli.debug)?;
        config.merge_from_env()?;

        if let Some(ref wordlist) = self.cli.wordlist {
            config.wordlist_path = Some(wordlist.clone());
        }
        if let Some(max_count) = self.cli.max_count {
            config.max_count = max_count;
        }
        config.tasks = self.cli.selected_tasks();
        if self.cli.color || self.cli.no_color || std::env::var("ENABLE_COLOR").is_err() {
            config.enable_color = self.cli.use_colors();
        }
        config.verbose = self.cli.verbose;
        config.debug = self.cli.debug;

        config.validate()?;
        Ok(config)
    }
}

/// Convenience function to load the reminder configuration from CLI arguments
pub fn load_reminder_config(cli: BirthdayCli) -> Result<ReminderConfig> {
    ConfigParser::new(cli).parse()
}

/// Convenience function to load the timer configuration from CLI arguments
pub fn load_timer_config(cli: TimerCli) -> Result<TimerConfig> {
    ConfigParser::new(cli).parse()
}

/// Display reminder configuration for debug purposes
pub fn display_reminder_summary(config: &ReminderConfig) -> String {
    let mut summary = Vec::new();

    summary.push(format!(
        "Roster: {}",
        config.roster_path.as_ref().map_or("bundled".to_string(), |p| p.display().to_string())
    ));
    match config.within_days {
        Some(days) => summary.push(format!("Window: {} days from {}", days, config.today)),
        None => summary.push(format!("Month: {}", config.month)),
    }
    summary.push(format!("Sort: {:?}", config.sort));
    summary.push(format!("Color Output: {}", config.enable_color));
    summary.push(format!("Verbose: {}", config.verbose));

    summary.join("\n")
}

/// Display timer configuration for debug purposes
pub fn display_timer_summary(config: &TimerConfig) -> String {
    let mut summary = Vec::new();

    summary.push(format!(
        "Word list: {}",
        config.wordlist_path.as_ref().map_or("bundled".to_string(), |p| p.display().to_string())
    ));
    summary.push(format!("Max append count: {}", config.max_count));
    if config.tasks.is_empty() {
        summary.push("Tasks: all".to_string());
    } else {
        let tasks: Vec<String> = config.tasks.iter().map(|t| t.to_string()).collect();
        summary.push(format!("Tasks: {}", tasks.join(", ")));
    }
    summary.push(format!("Color Output: {}", config.enable_color));
    summary.push(format!("Verbose: {}", config.verbose));

    summary.join("\n")
}
