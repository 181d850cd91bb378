//! Event Logger
//!
//! A personal event log for the terminal: timestamped text entries in a
//! durable plain-text file, with listing, date search, statistics, and
//! deletion on top.
//!
//! # Features
//!
//! - **Plain-Text Storage**: One event per line, readable with any editor
//! - **Durable Writes**: Appends are fsynced; rewrites go through a temp
//!   file and an atomic rename
//! - **No Cache**: Every query re-reads the file, so the file is always
//!   the source of truth
//! - **Forgiving Reads**: Malformed lines are skipped with a warning,
//!   never fatal
//!
//! # Modules
//!
//! - `types`: Core data structures (Event, LogStats)
//! - `event_store`: Append-only plain-text log file storage
//! - `service`: Validated application operations over the store
//! - `bootstrap`: Startup preparation of the data directory and file
//! - `console`: Interactive terminal menu
//! - `utils`: Utility functions (atomic writes, clock)
//!
//! # Example
//!
//! ```no_run
//! use event_logger::bootstrap::prepare_log_file;
//! use event_logger::{Console, EventLogService, EventStore};
//!
//! fn main() {
//!     let path = prepare_log_file("results", "events.txt").unwrap();
//!     let service = EventLogService::new(EventStore::new(path));
//!     let mut console = Console::new(service);
//!     console.run().unwrap();
//! }
//! ```

pub mod bootstrap;
pub mod console;
pub mod event_store;
pub mod service;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use console::Console;
pub use event_store::{EventStore, EventStoreError, EventStoreResult};
pub use service::{EventLogService, ServiceError, ServiceResult};
pub use types::{AppResult, Event, LogStats, ParseEventError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
