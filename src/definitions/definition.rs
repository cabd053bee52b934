use std::fmt;

/// Capabilities every custom entity definition provides.
///
/// Implementors are registered with
/// [`CustomEntityDefinitionRegistry`](super::CustomEntityDefinitionRegistry)
/// and are treated as immutable once registered.
pub trait CustomEntityDefinition: fmt::Debug + Send + Sync {
    /// Unique 6 character code identifying the entity type (e.g., "BLOGPT").
    fn custom_entity_definition_code(&self) -> &str;

    /// Unique display name of the entity type.
    fn name(&self) -> &str;

    /// Optional longer description of the entity type.
    fn description(&self) -> &str {
        ""
    }

    /// Whether url slugs must be unique across all entities of this type.
    fn force_url_slug_uniqueness(&self) -> bool {
        false
    }

    /// Whether entities of this type are assigned a locale.
    fn has_locale(&self) -> bool {
        false
    }

    /// Name of the concrete definition type, used in validation messages.
    fn type_name(&self) -> String {
        short_type_name::<Self>().to_string()
    }
}

/// Last path segment of a type name (`my_app::BlogPostDefinition` -> `BlogPostDefinition`).
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let path = full.split('<').next().unwrap_or(full);
    let start = path.rfind("::").map(|i| i + 2).unwrap_or(0);
    &full[start..]
}
