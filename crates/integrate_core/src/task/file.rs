//! Task definition file parsing.
//!
//! # Responsibility
//! - Read one YAML task definition file from disk.
//! - Surface missing, unreadable, or malformed files as typed errors.
//!
//! # Invariants
//! - Loading performs no recovery: the first failure propagates unchanged.
//! - A file defines zero or more tasks under a top-level `tasks:` list.

use crate::task::namespace::{NamespaceError, TaskDefinition};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Parsed task definition file contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFileDocument {
    /// Task definitions in file order.
    #[serde(default)]
    pub tasks: Vec<TaskDefinition>,
}

/// Task loading failures. All are fatal to the host's task-loading phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    FileNotFound(PathBuf),
    Io { path: PathBuf, message: String },
    Parse { path: PathBuf, message: String },
    Task(NamespaceError),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileNotFound(path) => {
                write!(f, "task file not found: {}", path.display())
            }
            Self::Io { path, message } => {
                write!(f, "task file unreadable: {}: {message}", path.display())
            }
            Self::Parse { path, message } => {
                write!(f, "task file malformed: {}: {message}", path.display())
            }
            Self::Task(err) => write!(f, "task definition rejected: {err}"),
        }
    }
}

impl Error for LoadError {}

impl From<NamespaceError> for LoadError {
    fn from(err: NamespaceError) -> Self {
        Self::Task(err)
    }
}

/// Loads and parses one task definition file.
pub fn load_task_file(path: &Path) -> Result<TaskFileDocument, LoadError> {
    let raw = std::fs::read_to_string(path).map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            LoadError::FileNotFound(path.to_path_buf())
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
        }
    })?;

    serde_yaml::from_str(&raw).map_err(|err| LoadError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}
