//! Custom entity domain layer.
//!
//! Validates and indexes custom entity definitions, and maps persisted
//! custom entity rows into display routes.

pub mod config;
pub mod data;
pub mod db_time;
pub mod definitions;
pub mod locale;
pub mod manifest;
pub mod routing;
