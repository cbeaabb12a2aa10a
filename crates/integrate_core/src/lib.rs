//! Extension registration and deferred task loading.
//! This crate is the single source of truth for the host's extension
//! and task-namespace invariants.

pub mod bootstrap;
pub mod extension;
pub mod logging;
pub mod name;
pub mod task;

pub use bootstrap::{Bootstrap, BootstrapError};
pub use extension::hook::{ExtensionHook, HostContext, TaskFileHook, TASK_FILE_DIR, TASK_FILE_EXT};
pub use extension::registry::{ExtensionRecord, ExtensionRegistry, RegistrationError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use task::file::{load_task_file, LoadError, TaskFileDocument};
pub use task::namespace::{NamespaceError, TaskDefinition, TaskNamespace};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
