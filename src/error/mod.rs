//! Error handling for the classroom tools

use thiserror::Error;

/// Custom error types shared by the birthday reminder and the task timer
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(String),

    /// Parsing errors (JSON, dates, numbers)
    #[error("Parsing error: {0}")]
    Parse(String),

    /// A word list or roster could not be opened
    #[error("Could not open {0}")]
    ResourceOpen(String),

    /// Reading failed part-way through a resource
    #[error("Read error: {0}")]
    Read(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io(message.into())
    }

    /// Create a new parsing error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    /// Create a new resource-open error
    pub fn resource_open<S: Into<String>>(message: S) -> Self {
        Self::ResourceOpen(message.into())
    }

    /// Create a new mid-stream read error
    pub fn read<S: Into<String>>(message: S) -> Self {
        Self::Read(message.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG",
            Self::Validation(_) => "VALIDATION",
            Self::Io(_) => "IO",
            Self::Parse(_) => "PARSE",
            Self::ResourceOpen(_) => "OPEN",
            Self::Read(_) => "READ",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Whether the error only affects a single timing task
    pub fn is_task_local(&self) -> bool {
        matches!(self, Self::ResourceOpen(_) | Self::Read(_))
    }

    /// Get user-friendly error message with suggestions
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Config(msg) => {
                format!("Configuration problem: {}\n\nSuggestion: Check your .env file or command line arguments.", msg)
            }
            Self::Validation(msg) => {
                format!("Invalid input: {}\n\nSuggestion: Check the month, day counts and other values you passed.", msg)
            }
            Self::Io(msg) => {
                format!("File operation failed: {}\n\nSuggestion: Check that the file exists and is readable.", msg)
            }
            Self::Parse(msg) => {
                format!("Failed to parse data: {}\n\nSuggestion: Check the format of your roster or configuration values.", msg)
            }
            Self::ResourceOpen(msg) => {
                format!("Could not open {}\n\nSuggestion: Check the --wordlist path or TASKTIMER_WORDLIST.", msg)
            }
            Self::Read(msg) => {
                format!("Reading stopped early: {}\n\nSuggestion: The word list must be UTF-8 text with one word per line.", msg)
            }
            Self::Internal(msg) => {
                format!("Internal error: {}\n\nThis is likely a bug. Please report this issue with the error details.", msg)
            }
        }
    }

    /// Same error kind with `context` prepended to its message
    pub fn prefixed(self, context: &str) -> Self {
        match self {
            Self::Config(msg) => Self::Config(format!("{}: {}", context, msg)),
            Self::Validation(msg) => Self::Validation(format!("{}: {}", context, msg)),
            Self::Io(msg) => Self::Io(format!("{}: {}", context, msg)),
            Self::Parse(msg) => Self::Parse(format!("{}: {}", context, msg)),
            Self::ResourceOpen(msg) => Self::ResourceOpen(format!("{}: {}", context, msg)),
            Self::Read(msg) => Self::Read(format!("{}: {}", context, msg)),
            Self::Internal(msg) => Self::Internal(format!("{}: {}", context, msg)),
        }
    }

    /// Get exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Validation(_) | Self::Parse(_) => 1,  // Invalid configuration/usage
            Self::Io(_) | Self::ResourceOpen(_) | Self::Read(_) => 5,  // I/O issues
            Self::Internal(_) => 99,  // Internal/unexpected errors
        }
    }

    /// Format error for console display with color coding
    pub fn format_for_console(&self, use_color: bool) -> String {
        let category = self.category();
        let message = self.to_string();

        if use_color {
            use colored::Colorize;
            match self {
                Self::Config(_) | Self::Validation(_) | Self::Parse(_) => {
                    format!("[{}] {}", category.red().bold(), message.red())
                }
                Self::Io(_) | Self::ResourceOpen(_) | Self::Read(_) => {
                    format!("[{}] {}", category.yellow().bold(), message.yellow())
                }
                Self::Internal(_) => {
                    format!("[{}] {}", category.bright_red().bold(), message.bright_red())
                }
            }
        } else {
            format!("[{}] {}", category, message)
        }
    }
}

// Standard library error conversions
impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::parse(format!("JSON parse error: {}", error))
    }
}

impl From<dotenv::Error> for AppError {
    fn from(error: dotenv::Error) -> Self {
        Self::config(format!("Environment file error: {}", error))
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(error: chrono::ParseError) -> Self {
        Self::parse(format!("Date parse error: {}", error))
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(error: std::num::ParseIntError) -> Self {
        Self::parse(format!("Integer parse error: {}", error))
    }
}

impl From<std::str::ParseBoolError> for AppError {
    fn from(error: std::str::ParseBoolError) -> Self {
        Self::parse(format!("Boolean parse error: {}", error))
    }
}

// Anyhow integration
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::internal(error.to_string())
    }
}

/// Custom Result type for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Error context trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add context to an error
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    /// Add static context to an error
    fn context(self, message: &'static str) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<AppError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let original_error: AppError = e.into();
            original_error.prefixed(&f())
        })
    }

    fn context(self, message: &'static str) -> Result<T> {
        self.with_context(|| message.to_string())
    }
}

/// Error reporter for user feedback on stderr
pub struct ErrorReporter {
    pub use_color: bool,
    pub verbose: bool,
}

impl ErrorReporter {
    /// Create a new error reporter
    pub fn new(use_color: bool, verbose: bool) -> Self {
        Self { use_color, verbose }
    }

    /// Report an error to the user
    pub fn report_error(&self, error: &AppError) {
        eprintln!("{}", error.format_for_console(self.use_color));

        if self.verbose {
            eprintln!();
            eprintln!("{}", error.user_friendly_message());
        }
    }

    /// Get formatted error summary
    pub fn format_error_summary(&self, errors: &[&AppError]) -> String {
        if errors.is_empty() {
            return "No errors".to_string();
        }

        let mut summary = format!("Found {} error(s):", errors.len());

        // Group errors by category, keeping first-seen order
        let mut groups: Vec<(&'static str, Vec<&AppError>)> = Vec::new();
        for error in errors {
            match groups.iter_mut().find(|(category, _)| *category == error.category()) {
                Some((_, group)) => group.push(error),
                None => groups.push((error.category(), vec![error])),
            }
        }

        for (category, group_errors) in groups {
            summary.push_str(&format!("\n  {}: {} error(s)", category, group_errors.len()));
            if self.verbose {
                for error in group_errors {
                    summary.push_str(&format!("\n    - {}", error));
                }
            }
        }

        summary
    }
}

impl Default for ErrorReporter {
    fn default() -> Self {
        Self::new(true, false)
    }
}
