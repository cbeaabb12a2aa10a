//! Host task namespace: named, invokable task definitions.

use crate::name::is_well_formed;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One named task definition contributed by an extension.
///
/// Execution of `command` is owned by the host, not this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDefinition {
    /// Task identifier, unique within the namespace.
    pub name: String,
    /// One-line human-readable summary.
    #[serde(default)]
    pub description: String,
    /// Invokable payload (shell command line or host-interpreted action).
    pub command: String,
}

/// Namespace conflict and validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceError {
    InvalidTaskName(String),
    DuplicateTask(String),
}

impl Display for NamespaceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTaskName(value) => write!(f, "task name is invalid: {value}"),
            Self::DuplicateTask(value) => write!(f, "task already defined: {value}"),
        }
    }
}

impl Error for NamespaceError {}

/// Append-only registry of task definitions.
///
/// Conflicts fail loudly: the first definition of a name wins and the
/// second registration is rejected.
#[derive(Debug, Default)]
pub struct TaskNamespace {
    tasks: BTreeMap<String, TaskDefinition>,
}

impl TaskNamespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one task definition after name validation.
    pub fn define(&mut self, definition: TaskDefinition) -> Result<(), NamespaceError> {
        let name = definition.name.trim();
        if !is_well_formed(name) {
            return Err(NamespaceError::InvalidTaskName(definition.name.clone()));
        }
        if self.tasks.contains_key(name) {
            return Err(NamespaceError::DuplicateTask(name.to_string()));
        }
        self.tasks.insert(name.to_string(), definition);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tasks.contains_key(name.trim())
    }

    /// Returns one task definition by name.
    pub fn get(&self, name: &str) -> Option<&TaskDefinition> {
        self.tasks.get(name.trim())
    }

    /// Returns sorted task names.
    pub fn names(&self) -> Vec<String> {
        self.tasks.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{NamespaceError, TaskDefinition, TaskNamespace};

    fn definition(name: &str) -> TaskDefinition {
        TaskDefinition {
            name: name.to_string(),
            description: "test task".to_string(),
            command: "true".to_string(),
        }
    }

    #[test]
    fn defines_and_looks_up_tasks() {
        let mut namespace = TaskNamespace::new();
        namespace
            .define(definition("db.migrate"))
            .expect("first definition should succeed");

        assert_eq!(namespace.len(), 1);
        assert!(namespace.contains("db.migrate"));
        let task = namespace.get("db.migrate").expect("defined task");
        assert_eq!(task.command, "true");
    }

    #[test]
    fn rejects_duplicate_task_names() {
        let mut namespace = TaskNamespace::new();
        namespace
            .define(definition("report"))
            .expect("first definition should succeed");
        let err = namespace
            .define(definition("report"))
            .expect_err("duplicate definition must fail");
        assert_eq!(err, NamespaceError::DuplicateTask("report".to_string()));
        assert_eq!(namespace.len(), 1);
    }

    #[test]
    fn rejects_malformed_task_names() {
        let mut namespace = TaskNamespace::new();
        let err = namespace
            .define(definition("Bad Name"))
            .expect_err("malformed name must fail");
        assert_eq!(
            err,
            NamespaceError::InvalidTaskName("Bad Name".to_string())
        );
        assert!(namespace.is_empty());
    }

    #[test]
    fn names_are_sorted() {
        let mut namespace = TaskNamespace::new();
        namespace.define(definition("zz")).expect("define zz");
        namespace.define(definition("aa")).expect("define aa");
        assert_eq!(namespace.names(), vec!["aa".to_string(), "zz".to_string()]);
    }
}
