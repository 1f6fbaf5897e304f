//! Configuration management module

pub mod env;
pub mod parser;

// Re-export main functionality
pub use env::EnvManager;
pub use parser::{display_reminder_summary, display_timer_summary, load_reminder_config, load_timer_config, ConfigParser};

// Re-export from models for convenience
pub use crate::models::{ReminderConfig, TimerConfig};

// Tests that touch process-wide environment variables hold this lock
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
