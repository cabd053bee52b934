use serde::{Deserialize, Serialize};

/// A locale that is enabled for content, attached to mapped routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveLocale {
    pub locale_id: i32,

    /// IETF language tag (e.g., "en-GB", "fr")
    pub ietf_language_tag: String,

    pub name: String,
}

impl ActiveLocale {
    /// Create a locale from its id, IETF tag and display name.
    pub fn new(locale_id: i32, ietf_language_tag: &str, name: &str) -> Self {
        Self {
            locale_id,
            ietf_language_tag: ietf_language_tag.to_string(),
            name: name.to_string(),
        }
    }
}
