use super::{PublishStatus, RoutingData, WorkFlowStatus};
use crate::locale::ActiveLocale;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Lightweight projection of a custom entity used for url resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomEntityRoute {
    pub custom_entity_definition_code: String,
    pub custom_entity_id: i32,
    pub url_slug: String,
    pub locale: Option<ActiveLocale>,
    pub publish_date: Option<DateTime<Utc>>,
    pub publish_status: PublishStatus,
    pub ordering: Option<i32>,
    /// One entry per stored version, in stored order
    pub versions: Vec<CustomEntityVersionRoute>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomEntityVersionRoute {
    pub create_date: DateTime<Utc>,
    pub title: String,
    pub version_id: i32,
    pub work_flow_status: WorkFlowStatus,
    #[serde(skip_serializing_if = "RoutingData::is_empty")]
    pub additional_routing_data: RoutingData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn version(version_id: i32, status: WorkFlowStatus) -> CustomEntityVersionRoute {
        CustomEntityVersionRoute {
            create_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            title: format!("Version {}", version_id),
            version_id,
            work_flow_status: status,
            additional_routing_data: RoutingData::new(),
        }
    }

    #[test]
    fn test_serialize_omits_empty_routing_data() {
        let json = serde_json::to_value(version(1, WorkFlowStatus::Draft)).expect("serialize");
        assert!(json.get("additional_routing_data").is_none());
        assert_eq!(json["work_flow_status"], "Draft");
        assert_eq!(json["create_date"], "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_serialize_route_statuses() {
        let route = CustomEntityRoute {
            custom_entity_definition_code: "BLOGPT".to_string(),
            custom_entity_id: 1,
            url_slug: "hello".to_string(),
            locale: None,
            publish_date: None,
            publish_status: PublishStatus::Unpublished,
            ordering: None,
            versions: vec![version(1, WorkFlowStatus::Unrecognized(2))],
        };

        let json = serde_json::to_value(&route).expect("serialize");
        assert_eq!(json["publish_status"], "Unpublished");
        assert_eq!(json["versions"][0]["work_flow_status"], "Unrecognized(2)");
    }
}
