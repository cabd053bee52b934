//! Persisted custom entity rows as read from storage.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Stored publish status codes.
pub mod publish_status_code {
    pub const PUBLISHED: char = 'P';
    pub const UNPUBLISHED: char = 'U';
}

/// A custom entity row with its version rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomEntity {
    pub custom_entity_id: i32,
    pub custom_entity_definition_code: String,
    #[serde(default)]
    pub locale_id: Option<i32>,
    pub url_slug: String,
    pub publish_status_code: char,
    /// Stored as UTC without a zone
    #[serde(default)]
    pub publish_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub ordering: Option<i32>,
    #[serde(default)]
    pub custom_entity_versions: Vec<CustomEntityVersion>,
}

/// A single version of a custom entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomEntityVersion {
    pub custom_entity_version_id: i32,
    pub title: String,
    /// Stored as UTC without a zone
    pub create_date: NaiveDateTime,
    pub work_flow_status_id: i32,
    /// JSON-serialized data model for the version
    #[serde(default)]
    pub serialized_data: String,
}
