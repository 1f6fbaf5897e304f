//! Word statistics and timing result data models

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Count and total length of the words a task processed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordStats {
    /// Number of words seen
    pub count: usize,

    /// Sum of word lengths in characters
    pub total_length: u64,
}

impl WordStats {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one word
    pub fn add_word(&mut self, word: &str) {
        self.add_length(word.chars().count());
    }

    /// Record one word by its length
    pub fn add_length(&mut self, length: usize) {
        self.count += 1;
        self.total_length += length as u64;
    }

    /// Average word length, 0.0 when no words were seen
    pub fn average(&self) -> f64 {
        if self.count > 0 {
            self.total_length as f64 / self.count as f64
        } else {
            0.0
        }
    }
}

impl Extend<String> for WordStats {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for word in iter {
            self.add_word(&word);
        }
    }
}

impl FromIterator<String> for WordStats {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}

impl<'a> FromIterator<&'a str> for WordStats {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut stats = Self::new();
        for word in iter {
            stats.add_word(word);
        }
        stats
    }
}

/// Text buffer an appending task writes into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BufferKind {
    /// A fresh `String` built for every word
    String,
    /// One `String` allocated up front and grown in place
    PresizedString,
}

impl BufferKind {
    /// Name used in task summaries
    pub fn label(&self) -> &'static str {
        match self {
            BufferKind::String => "String",
            BufferKind::PresizedString => "pre-sized String",
        }
    }
}

/// What a task produced when it finished
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TaskOutcome {
    /// Counting tasks report count and average length
    Average(WordStats),
    /// Appending tasks report how many words went into the buffer
    Appended { count: usize, target: BufferKind },
}

impl TaskOutcome {
    /// Number of words the task processed
    pub fn word_count(&self) -> usize {
        match self {
            TaskOutcome::Average(stats) => stats.count,
            TaskOutcome::Appended { count, .. } => *count,
        }
    }
}

/// Error that stopped a task, with the work it still reports
#[derive(Debug)]
pub struct TaskFailure {
    /// Why the task stopped
    pub error: AppError,

    /// Progress made before the error, for tasks that report partial work
    pub partial: Option<TaskOutcome>,
}

impl TaskFailure {
    /// A failure with nothing to report
    pub fn new(error: AppError) -> Self {
        Self { error, partial: None }
    }

    /// A failure that still reports what was done before it
    pub fn with_partial(error: AppError, partial: TaskOutcome) -> Self {
        Self { error, partial: Some(partial) }
    }

    /// Category of the underlying error
    pub fn category(&self) -> &'static str {
        self.error.category()
    }
}

impl From<AppError> for TaskFailure {
    fn from(error: AppError) -> Self {
        Self::new(error)
    }
}

impl fmt::Display for TaskFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

/// What running a task once produced
pub type TaskResult = Result<TaskOutcome, TaskFailure>;

/// Result of timing a single task
#[derive(Debug)]
pub struct TimingResult {
    /// Task description
    pub label: String,

    /// Wall-clock time including opening and closing the word source
    pub elapsed: Duration,

    /// Summary, or the error that stopped the task
    pub outcome: TaskResult,
}

impl TimingResult {
    /// Whether the task ran to completion
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Elapsed time in seconds
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_word_average() {
        let stats: WordStats = ["a", "bb", "ccc", "dddd", "eeeee"].into_iter().collect();
        assert_eq!(stats.count, 5);
        assert_eq!(stats.total_length, 15);
        assert!((stats.average() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_average_is_zero() {
        let stats = WordStats::new();
        assert_eq!(stats.count, 0);
        assert_eq!(stats.average(), 0.0);
    }

    #[test]
    fn test_length_counts_characters() {
        let mut stats = WordStats::new();
        stats.add_word("café");
        assert_eq!(stats.total_length, 4);
    }

    #[test]
    fn test_collect_owned_strings() {
        let stats: WordStats = vec!["one".to_string(), "three".to_string()].into_iter().collect();
        assert_eq!(stats.count, 2);
        assert!((stats.average() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_outcome_word_count() {
        let outcome = TaskOutcome::Appended { count: 42, target: BufferKind::PresizedString };
        assert_eq!(outcome.word_count(), 42);
        assert_eq!(BufferKind::PresizedString.label(), "pre-sized String");
    }

    #[test]
    fn test_timing_result_success() {
        let result = TimingResult {
            label: "task".to_string(),
            elapsed: Duration::from_millis(1500),
            outcome: Err(AppError::read("bad byte").into()),
        };
        assert!(!result.is_success());
        assert!((result.elapsed_secs() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_task_failure_keeps_partial_work() {
        let failure = TaskFailure::with_partial(
            AppError::read("bad byte"),
            TaskOutcome::Appended { count: 2, target: BufferKind::String },
        );
        assert_eq!(failure.category(), "READ");
        assert_eq!(failure.to_string(), "Read error: bad byte");
        assert_eq!(failure.partial.map(|p| p.word_count()), Some(2));

        let failure: TaskFailure = AppError::resource_open("word list x").into();
        assert!(failure.partial.is_none());
    }
}
