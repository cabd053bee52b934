//! Additional routing data taken from a version's serialized data model.

use super::MapError;
use serde_json::Value;
use std::collections::BTreeMap;

/// Key/value pairs attached to a version route, ordered by key.
pub type RoutingData = BTreeMap<String, String>;

/// Reads routing data out of a version's serialized data model.
pub trait CustomEntityDataModelMapper: Send + Sync {
    /// # Arguments
    /// * `definition_code` - Code of the entity's definition
    /// * `version_id` - Version being mapped, for error reporting
    /// * `serialized_data` - The version's stored data model
    fn routing_data(
        &self,
        definition_code: &str,
        version_id: i32,
        serialized_data: &str,
    ) -> Result<RoutingData, MapError>;
}

/// Data model mapper that never produces routing data.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRoutingData;

impl CustomEntityDataModelMapper for NoRoutingData {
    fn routing_data(&self, _: &str, _: i32, _: &str) -> Result<RoutingData, MapError> {
        Ok(RoutingData::new())
    }
}

/// Copies selected top-level scalar properties of a JSON data model.
///
/// Strings are copied as-is, numbers and booleans are rendered with their JSON
/// text. Missing properties, nulls, arrays and objects are skipped.
#[derive(Debug, Clone, Default)]
pub struct JsonRoutingDataMapper {
    properties: Vec<String>,
}

impl JsonRoutingDataMapper {
    /// Create a mapper that copies the named properties.
    pub fn new<I, S>(properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            properties: properties.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the property names copied into routing data.
    pub fn properties(&self) -> &[String] {
        &self.properties
    }
}

impl CustomEntityDataModelMapper for JsonRoutingDataMapper {
    fn routing_data(
        &self,
        _definition_code: &str,
        version_id: i32,
        serialized_data: &str,
    ) -> Result<RoutingData, MapError> {
        if self.properties.is_empty() || serialized_data.trim().is_empty() {
            return Ok(RoutingData::new());
        }

        let value: Value =
            serde_json::from_str(serialized_data).map_err(|e| MapError::DataModel {
                version_id,
                message: e.to_string(),
            })?;

        let object = value.as_object().ok_or_else(|| MapError::DataModel {
            version_id,
            message: "data model is not a JSON object".to_string(),
        })?;

        let data = self
            .properties
            .iter()
            .filter_map(|property| {
                let rendered = match object.get(property)? {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    _ => return None,
                };
                Some((property.clone(), rendered))
            })
            .collect();

        Ok(data)
    }
}
