//! Explicit host bootstrap sequence.
//!
//! # Responsibility
//! - Own the registration phase and the task-loading phase.
//! - Fire each registered hook exactly once, in registration order.
//!
//! # Invariants
//! - Registration is legal only before `load_tasks` runs.
//! - `load_tasks` runs at most once; the first hook failure aborts it.
//! - Execution is synchronous and single-threaded throughout.

use crate::extension::hook::{ExtensionHook, HostContext, TaskFileHook};
use crate::extension::registry::{ExtensionRegistry, RegistrationError};
use crate::task::file::LoadError;
use crate::task::namespace::TaskNamespace;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Bootstrap failures. All are fatal to host startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    Registration(RegistrationError),
    Load { extension: String, source: LoadError },
    RegistrationClosed(String),
    TasksAlreadyLoaded,
}

impl Display for BootstrapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Registration(err) => write!(f, "registration failed: {err}"),
            Self::Load { extension, source } => {
                write!(f, "extension {extension} failed to load tasks: {source}")
            }
            Self::RegistrationClosed(value) => write!(
                f,
                "registration is closed after task loading; rejected: {value}"
            ),
            Self::TasksAlreadyLoaded => write!(f, "task-loading phase already ran"),
        }
    }
}

impl Error for BootstrapError {}

impl From<RegistrationError> for BootstrapError {
    fn from(err: RegistrationError) -> Self {
        Self::Registration(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Registration,
    TasksLoaded,
}

/// Explicit startup sequence owned by the host entry point.
///
/// Replaces an implicit framework callback: the program constructs a
/// bootstrap, registers extensions, then drives the task-loading phase
/// itself. The transition is one-way.
pub struct Bootstrap {
    host: HostContext,
    registry: ExtensionRegistry,
    namespace: TaskNamespace,
    phase: Phase,
}

impl Bootstrap {
    /// Starts a bootstrap in the registration phase.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            host: HostContext::new(root_dir),
            registry: ExtensionRegistry::new(),
            namespace: TaskNamespace::new(),
            phase: Phase::Registration,
        }
    }

    /// Registers one extension with its deferred hook.
    pub fn register(
        &mut self,
        name: &str,
        hook: Box<dyn ExtensionHook>,
    ) -> Result<(), BootstrapError> {
        let name = name.trim();
        if self.phase == Phase::TasksLoaded {
            return Err(BootstrapError::RegistrationClosed(name.to_string()));
        }
        self.registry.register(name, hook)?;
        info!("event=extension_registered module=bootstrap status=ok name={name}");
        Ok(())
    }

    /// Registers one extension backed by the conventional
    /// `tasks/<name>.yaml` definition file.
    pub fn register_task_file(&mut self, name: &str) -> Result<(), BootstrapError> {
        self.register(name, Box::new(TaskFileHook::for_extension(name)))
    }

    /// Runs the task-loading phase: fires every hook once, in
    /// registration order, failing fast on the first error.
    pub fn load_tasks(&mut self) -> Result<(), BootstrapError> {
        if self.phase == Phase::TasksLoaded {
            return Err(BootstrapError::TasksAlreadyLoaded);
        }
        // The phase flips before firing so a failed bootstrap cannot be
        // re-driven into a partially loaded namespace.
        self.phase = Phase::TasksLoaded;

        for record in self.registry.records() {
            if let Err(source) = record.hook().load_tasks(&self.host, &mut self.namespace) {
                error!(
                    "event=tasks_load module=bootstrap status=error extension={} reason={source}",
                    record.name()
                );
                return Err(BootstrapError::Load {
                    extension: record.name().to_string(),
                    source,
                });
            }
        }

        info!(
            "event=tasks_load module=bootstrap status=ok extensions={} tasks={}",
            self.registry.len(),
            self.namespace.len()
        );
        Ok(())
    }

    /// True once the task-loading phase has run.
    pub fn tasks_loaded(&self) -> bool {
        self.phase == Phase::TasksLoaded
    }

    pub fn host(&self) -> &HostContext {
        &self.host
    }

    pub fn registry(&self) -> &ExtensionRegistry {
        &self.registry
    }

    pub fn namespace(&self) -> &TaskNamespace {
        &self.namespace
    }
}
