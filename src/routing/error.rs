use thiserror::Error;

/// Errors raised while mapping a custom entity into a route.
#[derive(Debug, Error)]
pub enum MapError {
    /// No source entity was supplied.
    #[error("source custom entity must not be empty")]
    MissingEntity,

    /// A version's data model could not be read. Raised by data model
    /// mappers; route mapping logs it and continues.
    #[error("invalid data model for custom entity version {version_id}: {message}")]
    DataModel { version_id: i32, message: String },
}
