use super::{
    CustomEntityDataModelMapper, CustomEntityRoute, CustomEntityVersionRoute, MapError,
    PublishStatus, RoutingData, WorkFlowStatus,
};
use crate::data::{CustomEntity, CustomEntityVersion};
use crate::db_time;
use crate::locale::ActiveLocale;
use tracing::warn;

/// Maps stored custom entity rows into [`CustomEntityRoute`] objects.
///
/// Holds no state besides its data model mapper and can be shared freely
/// between threads.
#[derive(Debug, Clone)]
pub struct CustomEntityRouteMapper<M> {
    data_model_mapper: M,
}

impl<M: CustomEntityDataModelMapper> CustomEntityRouteMapper<M> {
    /// Create a mapper that reads routing data with `data_model_mapper`.
    pub fn new(data_model_mapper: M) -> Self {
        Self { data_model_mapper }
    }

    /// Map a stored custom entity and its versions into a route.
    ///
    /// # Arguments
    /// * `entity` - The stored entity; `None` is rejected
    /// * `locale` - Locale to attach to the route
    ///
    /// # Returns
    /// * `Ok(route)` with one version route per stored version, in stored order
    /// * `Err(MapError::MissingEntity)` if no entity was given
    ///
    /// A version whose data model cannot be read is still mapped, with empty
    /// routing data.
    pub fn map(
        &self,
        entity: Option<&CustomEntity>,
        locale: Option<&ActiveLocale>,
    ) -> Result<CustomEntityRoute, MapError> {
        let entity = entity.ok_or(MapError::MissingEntity)?;

        let versions = entity
            .custom_entity_versions
            .iter()
            .map(|version| self.map_version(entity, version))
            .collect();

        Ok(CustomEntityRoute {
            custom_entity_definition_code: entity.custom_entity_definition_code.clone(),
            custom_entity_id: entity.custom_entity_id,
            url_slug: entity.url_slug.clone(),
            locale: locale.cloned(),
            publish_date: db_time::as_utc_opt(entity.publish_date),
            publish_status: PublishStatus::from_code(entity.publish_status_code),
            ordering: entity.ordering,
            versions,
        })
    }

    fn map_version(
        &self,
        entity: &CustomEntity,
        version: &CustomEntityVersion,
    ) -> CustomEntityVersionRoute {
        let work_flow_status = WorkFlowStatus::from_id(version.work_flow_status_id);
        if !work_flow_status.is_recognized() {
            warn!(
                "Custom entity {} version {} has unrecognized work flow status id {}",
                entity.custom_entity_id, version.custom_entity_version_id, version.work_flow_status_id
            );
        }

        let additional_routing_data = self
            .data_model_mapper
            .routing_data(
                &entity.custom_entity_definition_code,
                version.custom_entity_version_id,
                &version.serialized_data,
            )
            .unwrap_or_else(|e| {
                warn!(
                    "Custom entity {} version {}: ignoring routing data: {}",
                    entity.custom_entity_id, version.custom_entity_version_id, e
                );
                RoutingData::new()
            });

        CustomEntityVersionRoute {
            create_date: db_time::as_utc(version.create_date),
            title: version.title.clone(),
            version_id: version.custom_entity_version_id,
            work_flow_status,
            additional_routing_data,
        }
    }
}

impl<M: CustomEntityDataModelMapper + Default> Default for CustomEntityRouteMapper<M> {
    fn default() -> Self {
        Self::new(M::default())
    }
}
