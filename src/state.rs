//! Persistence for the last performed conversion
//!
//! The state file holds three newline-separated lines: the raw input, the
//! conversion label, and the result. Label and result are empty until a
//! conversion has happened.

use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("state file error: {0}")]
    Io(#[from] io::Error),
}

pub type StateResult<T> = Result<T, StateError>;

/// Last (input, label, result) triple, kept as opaque strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateRecord {
    pub input: String,
    pub label: String,
    pub result: String,
}

impl StateRecord {
    pub fn new(
        input: impl Into<String>,
        label: impl Into<String>,
        result: impl Into<String>,
    ) -> Self {
        Self {
            input: input.into(),
            label: label.into(),
            result: result.into(),
        }
    }
}

/// Owns the state file location.
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the last record. A missing file is not an error; all fields
    /// start empty.
    pub fn load(&self) -> StateResult<StateRecord> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No state file, starting empty");
                return Ok(StateRecord::default());
            }
            Err(e) => return Err(e.into()),
        };
        let mut lines = text.lines();
        Ok(StateRecord {
            input: lines.next().unwrap_or_default().to_string(),
            label: lines.next().unwrap_or_default().to_string(),
            result: lines.next().unwrap_or_default().to_string(),
        })
    }

    /// Write the record, creating the parent directory on first use.
    pub fn save(&self, record: &StateRecord) -> StateResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(
            &self.path,
            format!("{}\n{}\n{}", record.input, record.label, record.result),
        )?;
        tracing::debug!(path = %self.path.display(), "State saved");
        Ok(())
    }
}
