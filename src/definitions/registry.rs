//! Custom entity definition registry: Single source of truth for entity types.
//!
//! The registry is built once from the full set of definitions, usually at
//! startup, and is immutable thereafter. It is safe to share between threads
//! without synchronization.

use super::{CustomEntityDefinition, DefinitionValidator, InvalidDefinitionError};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Immutable index of custom entity definitions keyed by definition code.
#[derive(Debug, Clone)]
pub struct CustomEntityDefinitionRegistry {
    definitions: HashMap<String, Arc<dyn CustomEntityDefinition>>,
}

impl CustomEntityDefinitionRegistry {
    /// Validate and index a set of definitions.
    ///
    /// # Arguments
    /// * `definitions` - Every definition to register, in any order
    ///
    /// # Returns
    /// * `Ok(registry)` if all codes are present, unique and 6 characters long,
    ///   and all names are unique
    /// * `Err(InvalidDefinitionError)` describing the first violation found
    pub fn new<I>(definitions: I) -> Result<Self, InvalidDefinitionError>
    where
        I: IntoIterator<Item = Arc<dyn CustomEntityDefinition>>,
    {
        let definitions: Vec<_> = definitions.into_iter().collect();

        if let Some(violation) = DefinitionValidator::first_violation(&definitions) {
            return Err(InvalidDefinitionError::new(violation, definitions));
        }

        let definitions = definitions
            .into_iter()
            .map(|definition| {
                debug!(
                    "Registered custom entity definition {} ({})",
                    definition.custom_entity_definition_code(),
                    definition.name()
                );
                (definition.custom_entity_definition_code().to_string(), definition)
            })
            .collect();

        Ok(Self { definitions })
    }

    /// Get a definition by its code.
    ///
    /// # Returns
    /// * `Some(&definition)` if a definition with exactly this code exists
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<&Arc<dyn CustomEntityDefinition>> {
        self.definitions.get(code)
    }

    /// All registered definitions, in no particular order.
    pub fn get_all(&self) -> impl Iterator<Item = &Arc<dyn CustomEntityDefinition>> + '_ {
        self.definitions.values()
    }

    /// Check if a definition with exactly this code is registered.
    pub fn contains_code(&self, code: &str) -> bool {
        self.definitions.contains_key(code)
    }

    /// Get the number of registered definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Check if no definitions are registered.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
