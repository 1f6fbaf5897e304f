//! Core formatting trait and the plain text implementation

use crate::{
    error::AppError,
    models::{Student, TaskOutcome, TimingResult},
};
use chrono::Month;
use std::fmt::Write as _;
use std::time::Duration;

/// Main trait for output formatting
pub trait OutputFormatter {
    /// Format a header section
    fn format_header(&self, title: &str) -> String;

    /// Announce a task before it runs
    fn format_task_start(&self, description: &str) -> String;

    /// Format the summary a task produced
    fn format_outcome(&self, outcome: &TaskOutcome) -> String;

    /// Format a task's wall-clock time
    fn format_elapsed(&self, elapsed: Duration) -> String;

    /// Format the error that stopped a task
    fn format_error(&self, error: &AppError) -> String;

    /// Format one birthday reminder line
    fn format_reminder(&self, student: &Student) -> String;

    /// Format a closing table over all timed tasks
    fn format_summary(&self, results: &[TimingResult]) -> String;
}

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormattingOptions {
    /// Enable colored output
    pub enable_color: bool,
    /// Width of the description column in the summary table
    pub label_width: usize,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            enable_color: false,
            label_width: 60,
        }
    }
}

/// Plain text formatter
pub struct PlainFormatter {
    options: FormattingOptions,
}

impl PlainFormatter {
    /// Create a new plain formatter
    pub fn new(options: FormattingOptions) -> Self {
        Self { options }
    }
}

impl Default for PlainFormatter {
    fn default() -> Self {
        Self::new(FormattingOptions::default())
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_header(&self, title: &str) -> String {
        format!("{}\n{}", title, "=".repeat(title.chars().count()))
    }

    fn format_task_start(&self, description: &str) -> String {
        format!("Starting task: {}", description)
    }

    fn format_outcome(&self, outcome: &TaskOutcome) -> String {
        outcome_line(outcome)
    }

    fn format_elapsed(&self, elapsed: Duration) -> String {
        elapsed_line(elapsed)
    }

    fn format_error(&self, error: &AppError) -> String {
        error.to_string()
    }

    fn format_reminder(&self, student: &Student) -> String {
        format!("{} will have birthday on {}", student.name, birthday_label(student))
    }

    fn format_summary(&self, results: &[TimingResult]) -> String {
        summary_table(results, self.options.label_width, |status, _ok| status.to_string())
    }
}

/// Summary line shared by all formatters
pub(crate) fn outcome_line(outcome: &TaskOutcome) -> String {
    match outcome {
        TaskOutcome::Average(stats) => format!(
            "Average length of {} words is {:.2}",
            format_count(stats.count),
            stats.average()
        ),
        TaskOutcome::Appended { count, target } => {
            format!("Done appending {} words to {}.", count, target.label())
        }
    }
}

pub(crate) fn elapsed_line(elapsed: Duration) -> String {
    format!("Elapsed time is {:.6} sec", elapsed.as_secs_f64())
}

/// "5 October" style day and month of a student's birthday
pub fn birthday_label(student: &Student) -> String {
    format!("{} {}", student.birth_day(), month_name(student.birth_month()))
}

/// English month name for a 1-based month number
pub fn month_name(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map_or_else(|| month.to_string(), |m| m.name().to_string())
}

/// Render a count with comma thousands separators
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Table of every timed task, with the fastest successful one called out.
///
/// `paint` receives the status text and whether the task succeeded.
pub(crate) fn summary_table<F>(results: &[TimingResult], label_width: usize, paint: F) -> String
where
    F: Fn(&str, bool) -> String,
{
    let mut output = String::new();
    let _ = writeln!(output, "Task Summary");
    let _ = writeln!(output, "{}", "-".repeat(label_width + 26));

    for (i, result) in results.iter().enumerate() {
        let status = match &result.outcome {
            Ok(outcome) => format!("{} words", format_count(outcome.word_count())),
            Err(failure) => match &failure.partial {
                Some(partial) => format!("{} after {} words", failure.category(), format_count(partial.word_count())),
                None => failure.category().to_string(),
            },
        };
        let _ = writeln!(
            output,
            "{:>2}. {:<width$} {:>10.6}s  {}",
            i + 1,
            truncate(&result.label, label_width),
            result.elapsed_secs(),
            paint(&status, result.is_success()),
            width = label_width
        );
    }

    let fastest = results
        .iter()
        .filter(|r| r.is_success())
        .min_by_key(|r| r.elapsed);
    match fastest {
        Some(result) => {
            let _ = write!(output, "Fastest: {} ({:.6} sec)", result.label, result.elapsed_secs());
        }
        None => {
            let _ = write!(output, "Fastest: none (no task completed)");
        }
    }

    output
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(3)).collect();
        cut.push_str("...");
        cut
    }
}
