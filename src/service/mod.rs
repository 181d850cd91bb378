//! Event Log Service - application operations over the store
//!
//! This layer turns raw user intent into validated store calls: it
//! trims and rejects empty descriptions, parses search dates, converts
//! the one-based numbering shown on screen into store positions, and
//! assembles the statistics snapshot. It holds no state of its own
//! beyond the store it wraps.

use chrono::NaiveDate;

use crate::event_store::{EventStore, EventStoreError};
use crate::types::{Event, LogStats};

/// Date layout accepted by the search operation: `dd-MM-yyyy`.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors that can occur in service operations
#[derive(Debug)]
pub enum ServiceError {
    /// The description was empty after trimming.
    EmptyDescription,
    /// The search input was not a `dd-MM-yyyy` date.
    InvalidDate(String),
    /// The one-based event number does not refer to a stored event.
    InvalidIndex(usize),
    /// The store failed underneath.
    Store(EventStoreError),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::EmptyDescription => {
                write!(f, "event description must not be empty")
            }
            ServiceError::InvalidDate(input) => {
                write!(f, "invalid date '{}', expected dd-MM-yyyy", input)
            }
            ServiceError::InvalidIndex(number) => {
                write!(f, "no event at position {}", number)
            }
            ServiceError::Store(e) => write!(f, "storage error: {}", e),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<EventStoreError> for ServiceError {
    fn from(e: EventStoreError) -> Self {
        ServiceError::Store(e)
    }
}

/// Application service over one event log
pub struct EventLogService {
    store: EventStore,
}

impl EventLogService {
    /// Create a service over the given store
    pub fn new(store: EventStore) -> Self {
        Self { store }
    }

    /// Access the underlying store
    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// Log a new event stamped with the current time.
    ///
    /// The description is trimmed first; an empty result is rejected
    /// before anything touches the disk. Returns the stored event.
    pub fn log_new_event(&self, description: &str) -> ServiceResult<Event> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ServiceError::EmptyDescription);
        }

        let event = Event::new(description);
        self.store.append(&event)?;

        Ok(event)
    }

    /// All events in chronological (file) order
    pub fn get_all_events(&self) -> ServiceResult<Vec<Event>> {
        Ok(self.store.scan_all()?)
    }

    /// Events on the date given as `dd-MM-yyyy` text.
    ///
    /// A malformed date is an error; a well-formed date with no events
    /// is an empty result. The two cases read differently on screen.
    pub fn search_events_by_date(&self, date_input: &str) -> ServiceResult<Vec<Event>> {
        let trimmed = date_input.trim();
        let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map_err(|_| ServiceError::InvalidDate(trimmed.to_string()))?;

        Ok(self.store.scan_by_date(date)?)
    }

    /// Snapshot of totals and boundary events.
    ///
    /// Each figure is its own store query; the file is re-read rather
    /// than trusting any cached view.
    pub fn get_statistics(&self) -> ServiceResult<LogStats> {
        let total_events = self.store.count()?;
        let events_today = self.store.scan_today()?.len();
        let first_event = self.store.first()?;
        let last_event = self.store.last()?;

        Ok(LogStats {
            total_events,
            events_today,
            first_event,
            last_event,
        })
    }

    /// Delete the event shown as `number` in the one-based listing.
    ///
    /// Returns the removed event so the caller can echo what went away.
    pub fn delete_event(&self, number: usize) -> ServiceResult<Event> {
        if number == 0 {
            return Err(ServiceError::InvalidIndex(0));
        }

        match self.store.delete_at(number - 1) {
            Ok(event) => Ok(event),
            Err(EventStoreError::IndexOutOfRange { .. }) => {
                Err(ServiceError::InvalidIndex(number))
            }
            Err(e) => Err(ServiceError::Store(e)),
        }
    }

    /// Delete every event, keeping the (now empty) log file
    pub fn delete_all_events(&self) -> ServiceResult<()> {
        Ok(self.store.delete_all()?)
    }

    /// Whether anything has been logged yet
    pub fn has_events(&self) -> ServiceResult<bool> {
        Ok(self.store.has_events()?)
    }
}
