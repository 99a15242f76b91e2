//! service-core: Shared infrastructure for the sentiment service.
pub mod config;
pub mod error;
pub mod observability;
