//! Task timer: runs word-list strategies one after another and reports
//! how long each took.
//!
//! Tasks run sequentially and each one owns its reader for the duration of
//! the run. A task that cannot open or finish reading its source is
//! reported and skipped; the remaining tasks still run.

pub mod stopwatch;
pub mod tasks;

pub use stopwatch::Stopwatch;
pub use tasks::{
    default_tasks, LengthCounter, LineCollectTask, LineStreamTask, ReadLineTask, StringBuilderTask,
    StringConcatTask, Task, TokenizerTask,
};

use crate::{
    error::Result,
    logging::{LogLevel, Logger},
    models::{TimerConfig, TimingResult},
    output::{OutputFormatter, PlainFormatter},
    words::WordSource,
};
use std::io::Write;

/// Runs tasks against one word source and prints their timings
pub struct TaskTimer {
    source: WordSource,
    tasks: Vec<Box<dyn Task>>,
    formatter: Box<dyn OutputFormatter>,
    logger: Option<Logger>,
}

impl TaskTimer {
    /// Create a timer with no tasks
    pub fn new(source: WordSource, formatter: Box<dyn OutputFormatter>) -> Self {
        Self {
            source,
            tasks: Vec::new(),
            formatter,
            logger: None,
        }
    }

    /// Create a timer for the configured source and task selection
    pub fn from_config(config: &TimerConfig, formatter: Box<dyn OutputFormatter>) -> Self {
        let source = WordSource::from_path(config.wordlist_path.as_deref());
        let mut timer = Self::new(source, formatter);

        for (index, task) in default_tasks(config.max_count).into_iter().enumerate() {
            if config.runs_task(index + 1) {
                timer.add_task(task);
            }
        }

        timer
    }

    /// Log task progress through `logger`
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Append a task to the run order
    pub fn add_task(&mut self, task: Box<dyn Task>) {
        self.tasks.push(task);
    }

    /// Number of tasks that will run
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Source every task reads from
    pub fn source(&self) -> &WordSource {
        &self.source
    }

    /// Run a single task, printing its description, summary and elapsed time.
    ///
    /// Task failures are printed, followed by any partial summary, and
    /// returned inside the [`TimingResult`]; only a failure to write to
    /// `out` is returned as an error.
    pub fn exec_and_print<W: Write + ?Sized>(&self, task: &dyn Task, out: &mut W) -> Result<TimingResult> {
        let label = task.description();
        writeln!(out, "{}", self.formatter.format_task_start(&label))?;

        let correlation_id = self.logger.as_ref().map(|logger| logger.start_operation(&label));

        let mut stopwatch = Stopwatch::started();
        let outcome = task.run(&self.source);
        stopwatch.stop();
        let elapsed = stopwatch.elapsed();

        match &outcome {
            Ok(summary) => writeln!(out, "{}", self.formatter.format_outcome(summary))?,
            Err(failure) => {
                writeln!(out, "{}", self.formatter.format_error(&failure.error))?;
                if let Some(partial) = &failure.partial {
                    writeln!(out, "{}", self.formatter.format_outcome(partial))?;
                }
            }
        }
        writeln!(out, "{}", self.formatter.format_elapsed(elapsed))?;

        if let (Some(logger), Some(id)) = (&self.logger, &correlation_id) {
            match &outcome {
                Ok(summary) => logger.info("Task finished")
                    .correlation_id(id)
                    .field("task", &label)
                    .field("words", summary.word_count())
                    .field("elapsed_secs", elapsed.as_secs_f64())
                    .log(),
                Err(failure) => logger
                    .log(if failure.error.is_task_local() { LogLevel::Warn } else { LogLevel::Error }, "Task failed")
                    .correlation_id(id)
                    .field("task", &label)
                    .field("category", failure.category())
                    .field("error", failure.to_string())
                    .field("words", failure.partial.as_ref().map(|p| p.word_count()))
                    .log(),
            }
            logger.end_operation(id, &label, outcome.is_ok());
        }

        Ok(TimingResult { label, elapsed, outcome })
    }

    /// Run every task in order, never stopping early on a task failure
    pub fn run_all<W: Write + ?Sized>(&self, out: &mut W) -> Result<Vec<TimingResult>> {
        let mut results = Vec::with_capacity(self.tasks.len());
        for task in &self.tasks {
            results.push(self.exec_and_print(task.as_ref(), out)?);
        }
        Ok(results)
    }

    /// Summary table over finished results
    pub fn format_summary(&self, results: &[TimingResult]) -> String {
        self.formatter.format_summary(results)
    }
}

impl Default for TaskTimer {
    fn default() -> Self {
        Self::from_config(&TimerConfig::default(), Box::new(PlainFormatter::default()))
    }
}
