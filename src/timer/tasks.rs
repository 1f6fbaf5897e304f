//! The six word-list strategies being timed
//!
//! Every task opens the [`WordSource`] itself and drops the reader before
//! returning, so the measured time includes acquiring and releasing it.
//! The counting tasks differ only in how they pull text out of the reader;
//! the appending tasks contrast a fresh allocation per word with one
//! pre-sized buffer.
//!
//! A read error stops a task. The appending tasks still report how many
//! words they appended before it.

use crate::{
    models::{BufferKind, TaskFailure, TaskOutcome, TaskResult, WordStats},
    output::format_count,
    words::{read_error, trim_line_ending, WordSource},
};
use std::hint::black_box;
use std::io::{self, BufRead, Read};

/// Bytes reserved per word by the pre-sized buffer
const ESTIMATED_WORD_BYTES: usize = 12;

/// A unit of work the [`TaskTimer`](super::TaskTimer) can time
pub trait Task {
    /// Human-readable description printed before the task runs
    fn description(&self) -> String;

    /// Process the word source once
    fn run(&self, source: &WordSource) -> TaskResult;
}

/// Accumulates word lengths and reports their count and average
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthCounter {
    stats: WordStats,
}

impl LengthCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one length
    pub fn accept(&mut self, length: usize) {
        self.stats.add_length(length);
    }

    pub fn count(&self) -> usize {
        self.stats.count
    }

    /// Average of the lengths consumed, 0.0 when none
    pub fn average(&self) -> f64 {
        self.stats.average()
    }

    pub fn into_stats(self) -> WordStats {
        self.stats
    }
}

/// Reads the whole input and splits it on whitespace
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenizerTask;

impl Task for TokenizerTask {
    fn description(&self) -> String {
        "read words using split_whitespace() on the whole input".to_string()
    }

    fn run(&self, source: &WordSource) -> TaskResult {
        let mut reader = source.open()?;
        let mut text = String::new();
        reader.read_to_string(&mut text).map_err(read_error)?;

        Ok(TaskOutcome::Average(text.split_whitespace().collect()))
    }
}

/// Calls `read_line` in a loop, reusing a single line buffer
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadLineTask;

impl Task for ReadLineTask {
    fn description(&self) -> String {
        "read words using BufRead::read_line() with a loop".to_string()
    }

    fn run(&self, source: &WordSource) -> TaskResult {
        let mut reader = source.open()?;
        let mut stats = WordStats::new();
        let mut line = String::new();

        loop {
            line.clear();
            // 0 bytes read is end of input
            if reader.read_line(&mut line).map_err(read_error)? == 0 {
                break;
            }
            stats.add_word(trim_line_ending(&line));
        }

        Ok(TaskOutcome::Average(stats))
    }
}

/// Maps the lazy `lines()` iterator to lengths and feeds a [`LengthCounter`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LineStreamTask;

impl Task for LineStreamTask {
    fn description(&self) -> String {
        "read words using BufRead::lines() and a LengthCounter".to_string()
    }

    fn run(&self, source: &WordSource) -> TaskResult {
        let reader = source.open()?;
        let mut counter = LengthCounter::new();

        reader
            .lines()
            .map(|line| line.map(|word| word.chars().count()))
            .try_for_each(|length| length.map(|length| counter.accept(length)))
            .map_err(read_error)?;

        Ok(TaskOutcome::Average(counter.into_stats()))
    }
}

/// Collects the lazy `lines()` iterator straight into [`WordStats`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LineCollectTask;

impl Task for LineCollectTask {
    fn description(&self) -> String {
        "read words using BufRead::lines() collected into WordStats".to_string()
    }

    fn run(&self, source: &WordSource) -> TaskResult {
        let reader = source.open()?;
        let stats = reader
            .lines()
            .collect::<io::Result<WordStats>>()
            .map_err(read_error)?;

        Ok(TaskOutcome::Average(stats))
    }
}

/// Builds a brand new `String` for every appended word
#[derive(Debug, Clone, Copy)]
pub struct StringConcatTask {
    max_count: usize,
}

impl StringConcatTask {
    pub fn new(max_count: usize) -> Self {
        Self { max_count }
    }
}

impl Task for StringConcatTask {
    fn description(&self) -> String {
        format!("append {} words to a String using format!", format_count(self.max_count))
    }

    fn run(&self, source: &WordSource) -> TaskResult {
        let reader = source.open()?;
        let mut result = String::new();

        let outcome = append_words(reader, self.max_count, BufferKind::String, |word| {
            result = format!("{}{}", result, word);
        });
        black_box(&result);

        outcome
    }
}

/// Appends every word to one `String` allocated up front
#[derive(Debug, Clone, Copy)]
pub struct StringBuilderTask {
    max_count: usize,
}

impl StringBuilderTask {
    pub fn new(max_count: usize) -> Self {
        Self { max_count }
    }
}

impl Task for StringBuilderTask {
    fn description(&self) -> String {
        format!("append {} words to a pre-sized String", format_count(self.max_count))
    }

    fn run(&self, source: &WordSource) -> TaskResult {
        let reader = source.open()?;
        let mut result = String::with_capacity(self.max_count.saturating_mul(ESTIMATED_WORD_BYTES));

        let outcome = append_words(reader, self.max_count, BufferKind::PresizedString, |word| {
            result.push_str(&word);
        });
        black_box(&result);

        outcome
    }
}

/// Feed up to `max_count` lines to `append`.
///
/// A read error ends the loop; the words appended so far travel with it.
fn append_words<F>(reader: Box<dyn BufRead + '_>, max_count: usize, target: BufferKind, mut append: F) -> TaskResult
where
    F: FnMut(String),
{
    let mut count = 0;

    for line in reader.lines().take(max_count) {
        match line {
            Ok(word) => {
                append(word);
                count += 1;
            }
            Err(e) => {
                return Err(TaskFailure::with_partial(
                    read_error(e),
                    TaskOutcome::Appended { count, target },
                ));
            }
        }
    }

    Ok(TaskOutcome::Appended { count, target })
}

/// The six strategies in their canonical order
pub fn default_tasks(max_count: usize) -> Vec<Box<dyn Task>> {
    vec![
        Box::new(TokenizerTask),
        Box::new(ReadLineTask),
        Box::new(LineStreamTask),
        Box::new(LineCollectTask),
        Box::new(StringConcatTask::new(max_count)),
        Box::new(StringBuilderTask::new(max_count)),
    ]
}
