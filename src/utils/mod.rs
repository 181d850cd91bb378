//! Utility functions and helpers
//!
//! This module contains atomic file write helpers and clock utilities.

pub mod atomic;
pub mod time;

pub use atomic::{atomic_write, atomic_write_with, cleanup_temp_files, AtomicError, AtomicResult};
pub use time::{current_date, current_datetime};
