//! Word list resources consumed by the timing tasks
//!
//! A [`WordSource`] is opened afresh by every task, so each task pays for
//! acquiring and releasing its own reader.

use crate::error::{AppError, Result};
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Word list packaged with the binary, one word per line
pub const BUNDLED_WORDLIST: &str = include_str!("../../data/wordlist.txt");

/// Where the timing tasks read their words from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordSource {
    /// The packaged word list
    #[default]
    Bundled,
    /// A word list file on disk
    File(PathBuf),
    /// Text held in memory
    Inline(String),
}

impl WordSource {
    /// Use `path` when given, the bundled list otherwise
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            Some(path) => WordSource::File(path.to_path_buf()),
            None => WordSource::Bundled,
        }
    }

    /// Build an in-memory source from individual words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for word in words {
            text.push_str(word.as_ref());
            text.push('\n');
        }
        WordSource::Inline(text)
    }

    /// Open a fresh reader positioned at the first word.
    ///
    /// Only file sources can fail to open.
    pub fn open(&self) -> Result<Box<dyn BufRead + '_>> {
        match self {
            WordSource::Bundled => Ok(Box::new(BUNDLED_WORDLIST.as_bytes())),
            WordSource::Inline(text) => Ok(Box::new(text.as_bytes())),
            WordSource::File(path) => {
                let file = File::open(path)
                    .map_err(|e| AppError::resource_open(format!("{}: {}", self, e)))?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordSource::Bundled => f.write_str("bundled word list"),
            WordSource::File(path) => write!(f, "word list {}", path.display()),
            WordSource::Inline(_) => f.write_str("in-memory word list"),
        }
    }
}

/// Map an I/O failure during reading to a task-local read error
pub fn read_error(error: io::Error) -> AppError {
    AppError::read(error.to_string())
}

/// Strip the trailing `\n` or `\r\n` left by `read_line`
pub fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
