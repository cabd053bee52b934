use crate::locale::ActiveLocale;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Definitions
    pub definitions_file: String,

    // Route preview
    pub rows_file: Option<String>,
    pub default_locale: Option<ActiveLocale>,
    pub routing_data_properties: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Definitions
            definitions_file: std::env::var("CUSTOM_ENTITY_DEFINITIONS_FILE")
                .unwrap_or_else(|_| "custom-entity-definitions.json".to_string()),

            // Route preview
            rows_file: non_empty_var("CUSTOM_ENTITY_ROWS_FILE"),
            default_locale: default_locale_from_env()?,
            routing_data_properties: match std::env::var("ROUTING_DATA_PROPERTIES") {
                Ok(value) => parse_list(&value),
                Err(std::env::VarError::NotPresent) => Vec::new(),
                Err(e) => return Err(e).context("ROUTING_DATA_PROPERTIES is not valid unicode"),
            },
        })
    }
}

/// Read the preview locale. `DEFAULT_LOCALE` is optional, but once it is set
/// `DEFAULT_LOCALE_ID` and `DEFAULT_LOCALE_NAME` are required.
fn default_locale_from_env() -> Result<Option<ActiveLocale>> {
    let Some(tag) = non_empty_var("DEFAULT_LOCALE") else {
        return Ok(None);
    };

    let locale_id = non_empty_var("DEFAULT_LOCALE_ID")
        .context("DEFAULT_LOCALE_ID not set (required with DEFAULT_LOCALE)")?
        .parse::<i32>()
        .context("DEFAULT_LOCALE_ID must be an integer")?;
    let name = non_empty_var("DEFAULT_LOCALE_NAME")
        .context("DEFAULT_LOCALE_NAME not set (required with DEFAULT_LOCALE)")?;

    Ok(Some(ActiveLocale::new(locale_id, &tag, &name)))
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Split a comma-separated list, dropping blank entries.
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
