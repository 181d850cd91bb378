//! Event Store - durable append-only log of event lines
//!
//! The EventStore owns the path to the log file and performs all disk
//! access. Every query re-reads the file, so the file is always the
//! single source of truth; nothing is cached between calls.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::types::Event;
use crate::utils::atomic::{atomic_write, atomic_write_with, AtomicError};
use crate::utils::time::current_date;

/// Result type for EventStore operations
pub type EventStoreResult<T> = Result<T, EventStoreError>;

/// Errors that can occur in EventStore operations
#[derive(Debug)]
pub enum EventStoreError {
    Io(std::io::Error),
    IndexOutOfRange { index: usize, count: usize },
}

impl std::fmt::Display for EventStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventStoreError::Io(e) => write!(f, "IO error: {}", e),
            EventStoreError::IndexOutOfRange { index, count } => {
                write!(f, "index {} out of range for {} events", index, count)
            }
        }
    }
}

impl std::error::Error for EventStoreError {}

impl From<std::io::Error> for EventStoreError {
    fn from(e: std::io::Error) -> Self {
        EventStoreError::Io(e)
    }
}

impl From<AtomicError> for EventStoreError {
    fn from(e: AtomicError) -> Self {
        match e {
            AtomicError::Io(io) => EventStoreError::Io(io),
        }
    }
}

/// The EventStore manages the append-only event log file
pub struct EventStore {
    path: PathBuf,
}

impl EventStore {
    /// Create a store over the given log file path.
    ///
    /// The file does not have to exist yet; a missing file reads as an
    /// empty log and is created on first append.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the underlying log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append an event to the end of the log
    ///
    /// This is the core write operation. The line is appended and the
    /// file is fsynced before returning, so an event reported as logged
    /// has reached the disk.
    pub fn append(&self, event: &Event) -> EventStoreResult<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        // Open file in append mode
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        writeln!(file, "{}", event.to_line())?;

        // Sync to disk for durability
        file.sync_all()?;

        Ok(())
    }

    /// Read every event from the log, in file (chronological) order
    ///
    /// A missing file is an empty log. Malformed lines are skipped with
    /// a warning so one corrupt line never hides the rest of the log.
    pub fn scan_all(&self) -> EventStoreResult<Vec<Event>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut events = Vec::new();

        for (line_num, line_result) in reader.lines().enumerate() {
            let line = line_result?;
            if line.trim().is_empty() {
                continue;
            }

            match Event::from_line(&line) {
                Ok(event) => events.push(event),
                Err(e) => {
                    eprintln!(
                        "Warning: Skipping malformed line {}: {}",
                        line_num + 1,
                        e
                    );
                    // Continue loading other events
                }
            }
        }

        Ok(events)
    }

    /// Read the events stamped with the given calendar date
    pub fn scan_by_date(&self, date: NaiveDate) -> EventStoreResult<Vec<Event>> {
        let events = self.scan_all()?;
        Ok(events.into_iter().filter(|e| e.date() == date).collect())
    }

    /// Read the events stamped with today's date
    pub fn scan_today(&self) -> EventStoreResult<Vec<Event>> {
        self.scan_by_date(current_date())
    }

    /// Oldest event on file, if any
    pub fn first(&self) -> EventStoreResult<Option<Event>> {
        let mut events = self.scan_all()?;
        if events.is_empty() {
            Ok(None)
        } else {
            Ok(Some(events.remove(0)))
        }
    }

    /// Newest event on file, if any
    pub fn last(&self) -> EventStoreResult<Option<Event>> {
        Ok(self.scan_all()?.pop())
    }

    /// Number of events on file
    pub fn count(&self) -> EventStoreResult<usize> {
        Ok(self.scan_all()?.len())
    }

    /// Whether the log holds at least one event
    pub fn has_events(&self) -> EventStoreResult<bool> {
        Ok(!self.scan_all()?.is_empty())
    }

    /// Remove the event at the given zero-based position in scan order
    ///
    /// The surviving events are rewritten atomically, so a crash during
    /// the rewrite leaves either the old log or the new one, never a
    /// truncated file. Returns the removed event.
    pub fn delete_at(&self, index: usize) -> EventStoreResult<Event> {
        let mut events = self.scan_all()?;

        if index >= events.len() {
            return Err(EventStoreError::IndexOutOfRange {
                index,
                count: events.len(),
            });
        }

        let removed = events.remove(index);
        self.rewrite(&events)?;

        Ok(removed)
    }

    /// Remove every event, leaving an empty log file behind
    pub fn delete_all(&self) -> EventStoreResult<()> {
        atomic_write(&self.path, "")?;
        Ok(())
    }

    /// Replace the log file content with exactly the given events.
    ///
    /// Malformed lines skipped during the scan do not survive a rewrite.
    fn rewrite(&self, events: &[Event]) -> EventStoreResult<()> {
        atomic_write_with(&self.path, |file| {
            for event in events {
                writeln!(file, "{}", event.to_line())?;
            }
            Ok(())
        })?;

        Ok(())
    }
}
