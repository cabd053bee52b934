//! Mapping persisted custom entities into display routes.
//!
//! - `status`: Publish and workflow status types
//! - `route`: Route output types
//! - `data_model`: Extraction of additional routing data from version data models
//! - `mapper`: The route mapper itself

mod data_model;
mod error;
mod mapper;
mod route;
mod status;

pub use data_model::{CustomEntityDataModelMapper, JsonRoutingDataMapper, NoRoutingData, RoutingData};
pub use error::MapError;
pub use mapper::CustomEntityRouteMapper;
pub use route::{CustomEntityRoute, CustomEntityVersionRoute};
pub use status::{PublishStatus, UnknownWorkFlowStatus, WorkFlowStatus};
