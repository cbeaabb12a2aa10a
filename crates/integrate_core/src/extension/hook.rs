//! Deferred extension hooks and the host context they run against.

use crate::task::file::{load_task_file, LoadError};
use crate::task::namespace::TaskNamespace;
use log::info;
use std::path::{Path, PathBuf};

/// Directory for task definition files, relative to the host root.
pub const TASK_FILE_DIR: &str = "tasks";
/// File extension for task definition files.
pub const TASK_FILE_EXT: &str = "yaml";

/// Host-owned state a hook may read while loading tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostContext {
    root_dir: PathBuf,
}

impl HostContext {
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Host root directory (working/install directory of the host).
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Resolves one relative path against the host root.
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.root_dir.join(relative)
    }
}

/// Deferred action fired once by the bootstrap during the task-loading
/// phase. Implementations contribute definitions to the task namespace
/// and propagate every failure unchanged.
pub trait ExtensionHook {
    fn load_tasks(
        &self,
        host: &HostContext,
        namespace: &mut TaskNamespace,
    ) -> Result<(), LoadError>;
}

/// Hook that loads exactly one task definition file.
///
/// The relative path is fixed at registration time; it is resolved
/// against the host root when the hook fires.
pub struct TaskFileHook {
    relative_path: PathBuf,
}

impl TaskFileHook {
    pub fn new(relative_path: impl Into<PathBuf>) -> Self {
        Self {
            relative_path: relative_path.into(),
        }
    }

    /// Hook for the conventional `tasks/<name>.yaml` location.
    ///
    /// The file name is built textually: dots inside the extension name
    /// are separators, not a file extension to replace.
    pub fn for_extension(name: &str) -> Self {
        let file_name = format!("{}.{TASK_FILE_EXT}", name.trim());
        Self::new(Path::new(TASK_FILE_DIR).join(file_name))
    }

    /// Fixed relative path this hook loads.
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }
}

impl ExtensionHook for TaskFileHook {
    fn load_tasks(
        &self,
        host: &HostContext,
        namespace: &mut TaskNamespace,
    ) -> Result<(), LoadError> {
        let path = host.resolve(&self.relative_path);
        let document = load_task_file(&path)?;

        let loaded = document.tasks.len();
        for definition in document.tasks {
            namespace.define(definition)?;
        }

        info!(
            "event=task_file_loaded module=extension status=ok path={} tasks={}",
            path.display(),
            loaded
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ExtensionHook, HostContext, TaskFileHook};
    use crate::task::file::LoadError;
    use crate::task::namespace::{NamespaceError, TaskNamespace};
    use std::path::Path;

    fn write_task_file(root: &Path, name: &str, contents: &str) {
        let dir = root.join("tasks");
        std::fs::create_dir_all(&dir).expect("tasks dir");
        std::fs::write(dir.join(format!("{name}.yaml")), contents).expect("task file write");
    }

    #[test]
    fn conventional_path_follows_extension_name() {
        let hook = TaskFileHook::for_extension("integrate");
        assert_eq!(hook.relative_path(), Path::new("tasks/integrate.yaml"));
    }

    #[test]
    fn conventional_path_keeps_dotted_names_intact() {
        let hook = TaskFileHook::for_extension("builtin.tasks");
        assert_eq!(hook.relative_path(), Path::new("tasks/builtin.tasks.yaml"));
    }

    #[test]
    fn dotted_sibling_extensions_get_distinct_paths() {
        let daily = TaskFileHook::for_extension("report.daily");
        let weekly = TaskFileHook::for_extension("report.weekly");
        assert_eq!(daily.relative_path(), Path::new("tasks/report.daily.yaml"));
        assert_ne!(daily.relative_path(), weekly.relative_path());
    }

    #[test]
    fn loads_definitions_into_namespace() {
        let root = tempfile::tempdir().expect("temp dir");
        write_task_file(
            root.path(),
            "integrate",
            "tasks:\n  - name: sync\n    command: integrate-sync\n",
        );

        let host = HostContext::new(root.path());
        let mut namespace = TaskNamespace::new();
        TaskFileHook::for_extension("integrate")
            .load_tasks(&host, &mut namespace)
            .expect("present file should load");

        assert!(namespace.contains("sync"));
    }

    #[test]
    fn missing_file_propagates_file_not_found() {
        let root = tempfile::tempdir().expect("temp dir");
        let host = HostContext::new(root.path());
        let mut namespace = TaskNamespace::new();

        let err = TaskFileHook::for_extension("integrate")
            .load_tasks(&host, &mut namespace)
            .expect_err("missing file must fail");
        assert_eq!(
            err,
            LoadError::FileNotFound(root.path().join("tasks/integrate.yaml"))
        );
    }

    #[test]
    fn conflicting_definition_propagates_namespace_error() {
        let root = tempfile::tempdir().expect("temp dir");
        write_task_file(
            root.path(),
            "integrate",
            "tasks:\n  - name: sync\n    command: a\n  - name: sync\n    command: b\n",
        );

        let host = HostContext::new(root.path());
        let mut namespace = TaskNamespace::new();
        let err = TaskFileHook::for_extension("integrate")
            .load_tasks(&host, &mut namespace)
            .expect_err("conflicting names must fail");
        assert_eq!(
            err,
            LoadError::Task(NamespaceError::DuplicateTask("sync".to_string()))
        );
    }
}
