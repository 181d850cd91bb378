//! Event Store Module
//!
//! This module provides the durable storage layer:
//! - `EventStore`: Manages the append-only plain-text event log
//!
//! # Architecture
//!
//! ```text
//! Write Path:
//! ┌─────────┐    ┌──────────────┐    ┌────────────┐
//! │ Service │───►│ append line  │───►│ sync_all() │
//! │ call    │    │ to events.txt│    │ durability │
//! └─────────┘    └──────────────┘    └────────────┘
//!
//! Read Path (every query):
//! ┌───────────────┐    ┌─────────────────┐
//! │ Re-read file  │───►│ Decode lines,   │───► Vec<Event>
//! │ (events.txt)  │    │ skip malformed  │
//! └───────────────┘    └─────────────────┘
//! ```
//!
//! Deletes rewrite the surviving lines through a temp file and an
//! atomic rename, so readers never observe a half-written log.

mod store;

pub use store::{EventStore, EventStoreError, EventStoreResult};
