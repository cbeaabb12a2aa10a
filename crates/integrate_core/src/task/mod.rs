//! Task namespace and task definition file loading.
//!
//! The namespace is the host's registry of invokable named commands;
//! definition files contribute entries to it during the task-loading phase.

pub mod file;
pub mod namespace;
