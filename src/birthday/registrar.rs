//! Student data sources

use crate::error::{AppError, ErrorContext, Result};
use crate::models::Student;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Roster packaged with the binary
pub const BUNDLED_ROSTER: &str = include_str!("../../data/students.json");

/// Anything that can hand out the full list of students
pub trait StudentSource {
    fn students(&self) -> Result<Vec<Student>>;
}

impl StudentSource for Vec<Student> {
    fn students(&self) -> Result<Vec<Student>> {
        Ok(self.clone())
    }
}

/// The registrar's roster, bundled or read from a JSON file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Registrar {
    #[default]
    Bundled,
    File(PathBuf),
}

impl Registrar {
    pub fn bundled() -> Self {
        Registrar::Bundled
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        Registrar::File(path.as_ref().to_path_buf())
    }

    /// Use `path` when given, the bundled roster otherwise
    pub fn from_optional_path(path: Option<&Path>) -> Self {
        path.map_or(Registrar::Bundled, Self::from_path)
    }
}

impl StudentSource for Registrar {
    fn students(&self) -> Result<Vec<Student>> {
        match self {
            Registrar::Bundled => parse_roster(BUNDLED_ROSTER),
            Registrar::File(path) => {
                let text = fs::read_to_string(path)
                    .map_err(|e| AppError::io(format!("Failed to read roster {}: {}", path.display(), e)))?;
                parse_roster(&text).with_context(|| format!("Roster {}", path.display()))
            }
        }
    }
}

impl fmt::Display for Registrar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Registrar::Bundled => f.write_str("bundled roster"),
            Registrar::File(path) => write!(f, "roster {}", path.display()),
        }
    }
}

/// Parse a JSON array of `{ "name": ..., "birthdate": "YYYY-MM-DD" }`
pub fn parse_roster(text: &str) -> Result<Vec<Student>> {
    Ok(serde_json::from_str(text)?)
}
