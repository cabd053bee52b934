//! Custom entity definitions and the registry that indexes them.
//!
//! A custom entity definition describes one pluggable content type. The set of
//! definitions is supplied once at startup, validated, and then exposed
//! read-only for the lifetime of the process.
//!
//! # Architecture
//!
//! - `definition`: The capability trait every definition implements
//! - `validator`: Checks a definition set for missing, duplicate, or malformed codes and names
//! - `registry`: Immutable code-keyed index built from a valid definition set
//! - `error`: Construction error carrying the offending definition and full input set
//!
//! # Example
//!
//! ```rust,ignore
//! use custom_entities::definitions::CustomEntityDefinitionRegistry;
//!
//! let registry = CustomEntityDefinitionRegistry::new(definitions)?;
//! if let Some(definition) = registry.get_by_code("BLOGPT") {
//!     println!("{}", definition.name());
//! }
//! ```

mod definition;
mod error;
mod registry;
mod validator;

pub use definition::{short_type_name, CustomEntityDefinition};
pub use error::InvalidDefinitionError;
pub use registry::CustomEntityDefinitionRegistry;
pub use validator::{
    DefinitionValidator, DEFINITION_CODE_LENGTH, ValidationReport, Violation, ViolationKind,
};
