//! Wall-clock stopwatch for timing tasks

use std::time::{Duration, Instant};

/// Measures the time between `start` and `stop`
#[derive(Debug, Clone, Copy, Default)]
pub struct Stopwatch {
    started: Option<Instant>,
    stopped: Option<Instant>,
}

impl Stopwatch {
    /// Create a stopwatch that has not been started
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stopwatch that is already running
    pub fn started() -> Self {
        let mut stopwatch = Self::new();
        stopwatch.start();
        stopwatch
    }

    /// Start (or restart) timing
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
        self.stopped = None;
    }

    /// Stop timing; has no effect unless running
    pub fn stop(&mut self) {
        if self.is_running() {
            self.stopped = Some(Instant::now());
        }
    }

    /// Whether the stopwatch has been started and not stopped
    pub fn is_running(&self) -> bool {
        self.started.is_some() && self.stopped.is_none()
    }

    /// Time between start and stop, or up to now while running
    pub fn elapsed(&self) -> Duration {
        match (self.started, self.stopped) {
            (Some(start), Some(stop)) => stop.duration_since(start),
            (Some(start), None) => start.elapsed(),
            _ => Duration::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_not_started_is_zero() {
        let stopwatch = Stopwatch::new();
        assert!(!stopwatch.is_running());
        assert_eq!(stopwatch.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_measures_sleep() {
        let mut stopwatch = Stopwatch::started();
        assert!(stopwatch.is_running());
        thread::sleep(Duration::from_millis(20));
        stopwatch.stop();
        assert!(!stopwatch.is_running());
        assert!(stopwatch.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_stopped_value_is_frozen() {
        let mut stopwatch = Stopwatch::started();
        stopwatch.stop();
        let first = stopwatch.elapsed();
        thread::sleep(Duration::from_millis(5));
        assert_eq!(stopwatch.elapsed(), first);
        // A second stop keeps the original reading
        stopwatch.stop();
        assert_eq!(stopwatch.elapsed(), first);
    }

    #[test]
    fn test_restart_resets() {
        let mut stopwatch = Stopwatch::started();
        stopwatch.stop();
        stopwatch.start();
        assert!(stopwatch.is_running());
    }
}
