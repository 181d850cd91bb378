//! Data types for the event logger
//!
//! This module contains the core data structures used throughout the application.

mod event;
mod stats;

pub use event::{Event, ParseEventError, DATETIME_FORMAT, SEPARATOR};
pub use stats::LogStats;

/// Result type for application-level operations
pub type AppResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
