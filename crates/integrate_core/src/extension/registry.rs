//! In-process extension registry.

use crate::extension::hook::ExtensionHook;
use crate::name::is_well_formed;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One registered extension: a unique name paired with its deferred hook.
///
/// Records are created during the registration phase and live for the
/// process lifetime; they are never mutated or removed.
pub struct ExtensionRecord {
    name: String,
    hook: Box<dyn ExtensionHook>,
}

impl ExtensionRecord {
    /// Extension name as registered.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn hook(&self) -> &dyn ExtensionHook {
        self.hook.as_ref()
    }
}

/// Extension registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    EmptyName,
    InvalidName(String),
    DuplicateName(String),
}

impl Display for RegistrationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "extension name must not be empty"),
            Self::InvalidName(value) => write!(f, "extension name is invalid: {value}"),
            Self::DuplicateName(value) => {
                write!(f, "extension name already registered: {value}")
            }
        }
    }
}

impl Error for RegistrationError {}

/// Append-only registry of extension records.
///
/// Registration order is preserved; the bootstrap fires hooks in the
/// order extensions were registered.
#[derive(Default)]
pub struct ExtensionRegistry {
    records: Vec<ExtensionRecord>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one extension after name validation and conflict checks.
    pub fn register(
        &mut self,
        name: &str,
        hook: Box<dyn ExtensionHook>,
    ) -> Result<(), RegistrationError> {
        let normalized = name.trim();
        if normalized.is_empty() {
            return Err(RegistrationError::EmptyName);
        }
        if !is_well_formed(normalized) {
            return Err(RegistrationError::InvalidName(normalized.to_string()));
        }
        if self.contains(normalized) {
            return Err(RegistrationError::DuplicateName(normalized.to_string()));
        }

        self.records.push(ExtensionRecord {
            name: normalized.to_string(),
            hook,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        let normalized = name.trim();
        self.records.iter().any(|record| record.name == normalized)
    }

    /// Returns extension names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|record| record.name()).collect()
    }

    /// Returns records in registration order for hook firing.
    pub(crate) fn records(&self) -> &[ExtensionRecord] {
        &self.records
    }
}
