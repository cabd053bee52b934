use super::{CustomEntityDefinition, Violation, ViolationKind};
use std::sync::Arc;
use thiserror::Error;

/// A custom entity definition set that cannot be registered.
///
/// Carries the offending definition and the full input set for diagnostics.
#[derive(Debug, Clone, Error)]
#[error("{violation}")]
pub struct InvalidDefinitionError {
    violation: Violation,
    definitions: Vec<Arc<dyn CustomEntityDefinition>>,
}

impl InvalidDefinitionError {
    pub(crate) fn new(violation: Violation, definitions: Vec<Arc<dyn CustomEntityDefinition>>) -> Self {
        Self {
            violation,
            definitions,
        }
    }

    /// Get the category of the violation.
    pub fn kind(&self) -> ViolationKind {
        self.violation.kind
    }

    /// The definition that failed validation.
    pub fn invalid_definition(&self) -> &Arc<dyn CustomEntityDefinition> {
        &self.violation.definition
    }

    /// Every definition that was supplied to the registry.
    pub fn all_definitions(&self) -> &[Arc<dyn CustomEntityDefinition>] {
        &self.definitions
    }

    /// Get the full violation, including its message.
    pub fn violation(&self) -> &Violation {
        &self.violation
    }
}
