//! Environment variable handling and .env file management

use crate::defaults;
use crate::error::{AppError, Result};
use std::path::Path;

/// Environment variable configuration manager
pub struct EnvManager;

impl EnvManager {
    /// Load .env file if it exists
    pub fn load_env_file(debug: bool) -> Result<()> {
        if Path::new(".env").exists() {
            dotenv::from_filename(".env")
                .map_err(|e| AppError::config(format!("Failed to load .env file: {}", e)))?;

            if debug {
                eprintln!("Loaded configuration from .env file");
            }
        } else if debug {
            eprintln!("No .env file found, using defaults and CLI arguments");
        }

        Ok(())
    }

    /// Validate environment variable format before parsing
    pub fn validate_env_var(key: &str, value: &str) -> Result<()> {
        match key {
            "STUDENT_ROSTER" | "TASKTIMER_WORDLIST" => {
                if value.trim().is_empty() {
                    return Err(AppError::config(format!("{} cannot be empty", key)));
                }
            }
            "TASKTIMER_MAX_COUNT" => {
                let count: usize = value.trim().parse()
                    .map_err(|e| AppError::config(format!("Invalid TASKTIMER_MAX_COUNT value '{}': {}", value, e)))?;
                if count == 0 || count > defaults::MAX_COUNT_LIMIT {
                    return Err(AppError::config(format!(
                        "TASKTIMER_MAX_COUNT must be between 1 and {}, got: {}",
                        defaults::MAX_COUNT_LIMIT,
                        count
                    )));
                }
            }
            "ENABLE_COLOR" => {
                value.parse::<bool>()
                    .map_err(|e| AppError::config(format!("Invalid ENABLE_COLOR value '{}': {}", value, e)))?;
            }
            _ => {}
        }

        Ok(())
    }

    /// Get list of all supported environment variables with descriptions
    pub fn get_supported_env_vars() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            ("STUDENT_ROSTER", "Roster JSON file used by birthdays", "data/students.json"),
            ("TASKTIMER_WORDLIST", "Word list file used by tasktimer", "data/wordlist.txt"),
            ("TASKTIMER_MAX_COUNT", "Words processed by the appending tasks", "50000"),
            ("ENABLE_COLOR", "Enable colored output", "true"),
        ]
    }

    /// Display environment variable help
    pub fn display_env_help() -> String {
        let mut help = String::new();
        help.push_str("Supported Environment Variables:\n\n");

        for (var, description, example) in Self::get_supported_env_vars() {
            help.push_str(&format!("  {:<20} {}\n", var, description));
            help.push_str(&format!("  {:<20} Example: {}\n\n", "", example));
        }

        help.push_str("Configuration Priority (highest to lowest):\n");
        help.push_str("  1. Command-line arguments\n");
        help.push_str("  2. Environment variables\n");
        help.push_str("  3. .env file values\n");
        help.push_str("  4. Default values\n");

        help
    }

    /// Validate all currently set environment variables
    pub fn validate_current_env() -> Vec<String> {
        Self::get_supported_env_vars()
            .into_iter()
            .filter_map(|(var_name, _, _)| {
                let value = std::env::var(var_name).ok()?;
                Self::validate_env_var(var_name, &value)
                    .err()
                    .map(|e| format!("Warning: {}", e))
            })
            .collect()
    }
}
