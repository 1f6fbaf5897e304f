//! Data models and structures for the classroom tools

pub mod config;
pub mod metrics;
pub mod student;

// Re-export main model types
pub use config::{ReminderConfig, SortOrder, TimerConfig};
pub use metrics::{BufferKind, TaskFailure, TaskOutcome, TaskResult, TimingResult, WordStats};
pub use student::Student;
