//! Structured logging for the classroom tools
//!
//! This module provides:
//! - Leveled logging with console, compact and JSON output formats
//! - Correlated operations tracked by UUID (one per timed task)
//! - Structured key/value fields attached through a builder
//!
//! Log lines go to stderr so that stdout carries only the program's report.

use crate::error::{AppError, Result};
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{self, Write};
use uuid::Uuid;

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    /// Trace level - most detailed
    Trace = 0,
    /// Debug level - detailed information for debugging
    Debug = 1,
    /// Info level - general application information
    Info = 2,
    /// Warning level - potentially harmful situations
    Warn = 3,
    /// Error level - error events but application can continue
    Error = 4,
    /// Fatal level - the application is about to exit
    Fatal = 5,
}

impl LogLevel {
    /// Get log level name as string
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    fn painted(&self) -> String {
        let padded = format!("{:>5}", self.as_str());
        match self {
            LogLevel::Trace => padded.white().to_string(),
            LogLevel::Debug => padded.cyan().to_string(),
            LogLevel::Info => padded.green().to_string(),
            LogLevel::Warn => padded.yellow().to_string(),
            LogLevel::Error => padded.red().to_string(),
            LogLevel::Fatal => padded.magenta().bold().to_string(),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(AppError::parse(format!("Invalid log level: {}", s))),
        }
    }
}

/// Log entry structure for structured logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Timestamp when log entry was created
    pub timestamp: DateTime<Utc>,
    /// Log level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Logger name/component
    pub logger: String,
    /// Correlation ID for tracking related events
    pub correlation_id: Option<String>,
    /// Additional structured fields
    pub fields: BTreeMap<String, serde_json::Value>,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogFormat {
    /// Human-readable console format
    Console,
    /// JSON format for structured logging
    Json,
    /// Compact single-line format
    Compact,
}

/// Logger writing structured entries to stderr
#[derive(Debug, Clone)]
pub struct Logger {
    /// Minimum log level to output
    min_level: LogLevel,
    /// Whether to use colored output
    use_color: bool,
    /// Output format
    format: LogFormat,
    /// Logger name
    name: String,
    /// Identifier shared by every entry of one program run
    session_id: String,
}

impl Logger {
    /// Create a new logger at Info level
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            min_level: LogLevel::Info,
            use_color: false,
            format: LogFormat::Console,
            name: name.into(),
            session_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create a logger from the usual command line switches.
    ///
    /// Warnings only by default, Info with `verbose`, Debug as JSON with `debug`.
    pub fn with_level_flags<S: Into<String>>(name: S, verbose: bool, debug: bool, use_color: bool) -> Self {
        let min_level = if debug {
            LogLevel::Debug
        } else if verbose {
            LogLevel::Info
        } else {
            LogLevel::Warn
        };

        Self {
            min_level,
            use_color,
            format: if debug { LogFormat::Json } else { LogFormat::Console },
            ..Self::new(name)
        }
    }

    /// Set minimum log level
    pub fn set_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }

    /// Set output format
    pub fn set_format(&mut self, format: LogFormat) {
        self.format = format;
    }

    /// Enable or disable colored output
    pub fn set_color(&mut self, use_color: bool) {
        self.use_color = use_color;
    }

    /// Session identifier attached to every entry
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Start a correlated operation and return its correlation ID
    pub fn start_operation(&self, operation_name: &str) -> String {
        let correlation_id = Uuid::new_v4().to_string();

        self.debug(&format!("Started operation: {}", operation_name))
            .correlation_id(&correlation_id)
            .field("operation", operation_name)
            .field("operation_type", "start")
            .log();

        correlation_id
    }

    /// End a correlated operation
    pub fn end_operation(&self, correlation_id: &str, operation_name: &str, success: bool) {
        let level = if success { LogLevel::Debug } else { LogLevel::Warn };
        self.log(level, &format!("Completed operation: {} (success: {})", operation_name, success))
            .correlation_id(correlation_id)
            .field("operation", operation_name)
            .field("operation_type", "end")
            .field("success", success)
            .log();
    }

    /// Create a log entry builder
    pub fn log(&self, level: LogLevel, message: &str) -> LogEntryBuilder<'_> {
        LogEntryBuilder::new(self, level, message.to_string())
    }

    /// Convenience methods for different log levels
    pub fn trace(&self, message: &str) -> LogEntryBuilder<'_> {
        self.log(LogLevel::Trace, message)
    }

    pub fn debug(&self, message: &str) -> LogEntryBuilder<'_> {
        self.log(LogLevel::Debug, message)
    }

    pub fn info(&self, message: &str) -> LogEntryBuilder<'_> {
        self.log(LogLevel::Info, message)
    }

    pub fn warn(&self, message: &str) -> LogEntryBuilder<'_> {
        self.log(LogLevel::Warn, message)
    }

    pub fn error(&self, message: &str) -> LogEntryBuilder<'_> {
        self.log(LogLevel::Error, message)
    }

    pub fn fatal(&self, message: &str) -> LogEntryBuilder<'_> {
        self.log(LogLevel::Fatal, message)
    }

    /// Check if a log level would be output
    pub fn would_log(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Render an entry, or `None` when it is below the minimum level
    pub fn render(&self, entry: &LogEntry) -> Option<String> {
        if !self.would_log(entry.level) {
            return None;
        }

        Some(match self.format {
            LogFormat::Console => self.format_console(entry),
            LogFormat::Json => self.format_json(entry),
            LogFormat::Compact => self.format_compact(entry),
        })
    }

    fn write_entry(&self, mut entry: LogEntry) {
        entry.fields.insert(
            "session_id".to_string(),
            serde_json::Value::String(self.session_id.clone()),
        );

        if let Some(output) = self.render(&entry) {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }

    /// Format log entry for console output
    fn format_console(&self, entry: &LogEntry) -> String {
        let timestamp = entry.timestamp.format("%Y-%m-%d %H:%M:%S%.3f");

        let formatted_level = if self.use_color {
            entry.level.painted()
        } else {
            format!("{:>5}", entry.level.as_str())
        };

        let mut output = format!("{} {} [{}] {}",
            timestamp,
            formatted_level,
            entry.logger,
            entry.message
        );

        if let Some(correlation_id) = &entry.correlation_id {
            let short: String = correlation_id.chars().take(8).collect();
            output.push_str(&format!(" [{}]", short));
        }

        // session_id is noise on a terminal
        let fields: Vec<String> = entry.fields.iter()
            .filter(|(k, _)| k.as_str() != "session_id")
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        if !fields.is_empty() {
            output.push_str(&format!(" {{{}}}", fields.join(", ")));
        }

        output
    }

    /// Format log entry as JSON
    fn format_json(&self, entry: &LogEntry) -> String {
        match serde_json::to_string(entry) {
            Ok(json) => json,
            Err(_) => format!("{{\"error\": \"Failed to serialize log entry\", \"message\": \"{}\"}}", entry.message),
        }
    }

    /// Format log entry in compact format
    fn format_compact(&self, entry: &LogEntry) -> String {
        let timestamp = entry.timestamp.format("%H:%M:%S");
        format!("{} {} {}: {}",
            timestamp,
            entry.level.as_str().chars().next().unwrap_or('?'),
            entry.logger,
            entry.message
        )
    }
}

/// Builder pattern for creating log entries
pub struct LogEntryBuilder<'a> {
    logger: &'a Logger,
    entry: LogEntry,
}

impl<'a> LogEntryBuilder<'a> {
    fn new(logger: &'a Logger, level: LogLevel, message: String) -> Self {
        Self {
            logger,
            entry: LogEntry {
                timestamp: Utc::now(),
                level,
                message,
                logger: logger.name.clone(),
                correlation_id: None,
                fields: BTreeMap::new(),
            },
        }
    }

    /// Attach a correlation ID
    pub fn correlation_id(mut self, correlation_id: &str) -> Self {
        self.entry.correlation_id = Some(correlation_id.to_string());
        self
    }

    /// Attach a structured field; values that fail to serialize are dropped
    pub fn field<T: Serialize>(mut self, key: &str, value: T) -> Self {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.entry.fields.insert(key.to_string(), json_value);
        }
        self
    }

    /// Finish the entry without writing it
    pub fn build(self) -> LogEntry {
        self.entry
    }

    /// Write the entry
    pub fn log(self) {
        if self.logger.would_log(self.entry.level) {
            self.logger.write_entry(self.entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Fatal);
    }

    #[test]
    fn test_log_level_from_str() {
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        let err = "loud".parse::<LogLevel>().unwrap_err();
        assert_eq!(err.category(), "PARSE");
    }

    #[test]
    fn test_level_flags() {
        let quiet = Logger::with_level_flags("t", false, false, false);
        assert!(!quiet.would_log(LogLevel::Info));
        assert!(quiet.would_log(LogLevel::Warn));

        let verbose = Logger::with_level_flags("t", true, false, false);
        assert!(verbose.would_log(LogLevel::Info));
        assert!(!verbose.would_log(LogLevel::Debug));

        let debug = Logger::with_level_flags("t", true, true, false);
        assert!(debug.would_log(LogLevel::Debug));
        assert_eq!(debug.format, LogFormat::Json);
    }

    #[test]
    fn test_console_format() {
        let logger = Logger::new("tasktimer");
        let entry = logger.info("Task finished")
            .correlation_id("0123456789abcdef")
            .field("words", 5)
            .build();
        let line = logger.render(&entry).unwrap();
        assert!(line.contains(" INFO [tasktimer] Task finished [01234567]"));
        assert!(line.ends_with("{words=5}"));
    }

    #[test]
    fn test_json_format() {
        let mut logger = Logger::new("birthdays");
        logger.set_format(LogFormat::Json);
        let entry = logger.warn("Roster empty").field("source", "bundled").build();
        let line = logger.render(&entry).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["level"], "Warn");
        assert_eq!(parsed["message"], "Roster empty");
        assert_eq!(parsed["fields"]["source"], "bundled");
    }

    #[test]
    fn test_compact_format() {
        let mut logger = Logger::new("tasktimer");
        logger.set_format(LogFormat::Compact);
        let entry = logger.error("boom").build();
        let line = logger.render(&entry).unwrap();
        assert!(line.ends_with("E tasktimer: boom"));
    }

    #[test]
    fn test_below_level_not_rendered() {
        let mut logger = Logger::new("t");
        logger.set_level(LogLevel::Error);
        let entry = logger.info("hidden").build();
        assert!(logger.render(&entry).is_none());
    }

    #[test]
    fn test_operations_get_distinct_ids() {
        let logger = Logger::with_level_flags("t", false, false, false);
        let first = logger.start_operation("one");
        let second = logger.start_operation("two");
        assert_ne!(first, second);
        assert_eq!(first.len(), 36);
        logger.end_operation(&first, "one", true);
        assert_eq!(logger.session_id().len(), 36);
    }
}
