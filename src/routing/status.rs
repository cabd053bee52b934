use crate::data::publish_status_code;
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Whether an entity is visible on the live site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PublishStatus {
    Published,
    Unpublished,
}

impl PublishStatus {
    /// Only the exact published code maps to `Published`.
    pub fn from_code(code: char) -> Self {
        if code == publish_status_code::PUBLISHED {
            PublishStatus::Published
        } else {
            PublishStatus::Unpublished
        }
    }

    /// Get the stored code for this status.
    pub fn code(&self) -> char {
        match self {
            PublishStatus::Published => publish_status_code::PUBLISHED,
            PublishStatus::Unpublished => publish_status_code::UNPUBLISHED,
        }
    }
}

/// Lifecycle state of a single entity version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkFlowStatus {
    Draft,
    Published,
    /// A stored id with no known status
    Unrecognized(i32),
}

/// Returned by the strict `TryFrom<i32>` conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown work flow status id: {0}")]
pub struct UnknownWorkFlowStatus(pub i32);

impl WorkFlowStatus {
    pub const DRAFT_ID: i32 = 1;
    pub const PUBLISHED_ID: i32 = 4;

    /// Map a stored status id, keeping unknown ids as `Unrecognized`.
    pub fn from_id(id: i32) -> Self {
        match id {
            Self::DRAFT_ID => WorkFlowStatus::Draft,
            Self::PUBLISHED_ID => WorkFlowStatus::Published,
            other => WorkFlowStatus::Unrecognized(other),
        }
    }

    /// Get the stored id, including the original id of an unrecognized status.
    pub fn id(&self) -> i32 {
        match self {
            WorkFlowStatus::Draft => Self::DRAFT_ID,
            WorkFlowStatus::Published => Self::PUBLISHED_ID,
            WorkFlowStatus::Unrecognized(id) => *id,
        }
    }

    /// Check if the stored id maps to a known status.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, WorkFlowStatus::Unrecognized(_))
    }
}

impl TryFrom<i32> for WorkFlowStatus {
    type Error = UnknownWorkFlowStatus;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        match Self::from_id(id) {
            WorkFlowStatus::Unrecognized(id) => Err(UnknownWorkFlowStatus(id)),
            status => Ok(status),
        }
    }
}

impl fmt::Display for WorkFlowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkFlowStatus::Draft => f.write_str("Draft"),
            WorkFlowStatus::Published => f.write_str("Published"),
            WorkFlowStatus::Unrecognized(id) => write!(f, "Unrecognized({})", id),
        }
    }
}

// Always a string, using the display form.
impl Serialize for WorkFlowStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
