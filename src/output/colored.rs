//! Colored terminal output using the `colored` crate

use super::formatter::{birthday_label, elapsed_line, outcome_line, summary_table, FormattingOptions, OutputFormatter};
use crate::{
    error::AppError,
    models::{Student, TaskOutcome, TimingResult},
};
use colored::{Color, Colorize};
use std::time::Duration;

/// Colors used for the different kinds of output
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub header: Color,
    pub task: Color,
    pub success: Color,
    pub timing: Color,
    pub error: Color,
    pub highlight: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            header: Color::BrightBlue,
            task: Color::Cyan,
            success: Color::Green,
            timing: Color::Yellow,
            error: Color::Red,
            highlight: Color::BrightWhite,
        }
    }
}

/// Formatter that decorates the plain text with ANSI colors
pub struct ColoredFormatter {
    options: FormattingOptions,
    scheme: ColorScheme,
}

impl ColoredFormatter {
    /// Create a new colored formatter with the default scheme
    pub fn new(options: FormattingOptions) -> Self {
        Self::with_scheme(options, ColorScheme::default())
    }

    /// Create a colored formatter with a custom scheme
    pub fn with_scheme(options: FormattingOptions, scheme: ColorScheme) -> Self {
        Self { options, scheme }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn format_header(&self, title: &str) -> String {
        format!("{}", title.color(self.scheme.header).bold())
    }

    fn format_task_start(&self, description: &str) -> String {
        format!("{} {}", "Starting task:".color(self.scheme.task).bold(), description)
    }

    fn format_outcome(&self, outcome: &TaskOutcome) -> String {
        outcome_line(outcome).color(self.scheme.success).to_string()
    }

    fn format_elapsed(&self, elapsed: Duration) -> String {
        elapsed_line(elapsed).color(self.scheme.timing).to_string()
    }

    fn format_error(&self, error: &AppError) -> String {
        error.to_string().color(self.scheme.error).to_string()
    }

    fn format_reminder(&self, student: &Student) -> String {
        format!(
            "{} will have birthday on {}",
            student.name.color(self.scheme.highlight).bold(),
            birthday_label(student).color(self.scheme.success)
        )
    }

    fn format_summary(&self, results: &[TimingResult]) -> String {
        let table = summary_table(results, self.options.label_width, |status, ok| {
            let color = if ok { self.scheme.success } else { self.scheme.error };
            status.color(color).to_string()
        });
        table.replacen("Task Summary", &self.format_header("Task Summary"), 1)
    }
}
