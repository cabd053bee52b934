//! Custom entity definitions declared in a JSON manifest file.
//!
//! ```json
//! {
//!   "definitions": [
//!     { "code": "BLOGPT", "name": "Blog Post", "has_locale": true }
//!   ]
//! }
//! ```

use crate::definitions::CustomEntityDefinition;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Deserialize)]
pub struct DefinitionManifest {
    pub definitions: Vec<ManifestDefinition>,
}

/// A definition read from a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestDefinition {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub force_url_slug_uniqueness: bool,
    #[serde(default)]
    pub has_locale: bool,
}

impl CustomEntityDefinition for ManifestDefinition {
    fn custom_entity_definition_code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn force_url_slug_uniqueness(&self) -> bool {
        self.force_url_slug_uniqueness
    }

    fn has_locale(&self) -> bool {
        self.has_locale
    }

    // Every manifest entry shares one Rust type, so include the name.
    fn type_name(&self) -> String {
        format!("ManifestDefinition({})", self.name)
    }
}

impl DefinitionManifest {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse custom entity definition manifest")
    }

    /// Definitions ready to hand to the registry.
    pub fn into_definitions(self) -> Vec<Arc<dyn CustomEntityDefinition>> {
        self.definitions
            .into_iter()
            .map(|d| Arc::new(d) as Arc<dyn CustomEntityDefinition>)
            .collect()
    }
}

/// Read and parse a manifest file.
pub fn load_manifest(path: impl AsRef<Path>) -> Result<DefinitionManifest> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read definition manifest at {}", path.display()))?;
    DefinitionManifest::from_json(&json)
        .with_context(|| format!("Invalid definition manifest at {}", path.display()))
}
