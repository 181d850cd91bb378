//! Summary figures over the whole log

use super::Event;

/// Snapshot of the log at one moment: totals plus the boundary events.
#[derive(Debug, Clone, Default)]
pub struct LogStats {
    /// Events stored in total.
    pub total_events: usize,
    /// Events stamped with today's date.
    pub events_today: usize,
    /// Oldest event on file, if any.
    pub first_event: Option<Event>,
    /// Newest event on file, if any.
    pub last_event: Option<Event>,
}

impl LogStats {
    /// Stats for a log with no events.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when the log held no events at snapshot time.
    pub fn is_empty(&self) -> bool {
        self.total_events == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_stats() {
        let stats = LogStats::empty();
        assert!(stats.is_empty());
        assert_eq!(stats.total_events, 0);
        assert_eq!(stats.events_today, 0);
        assert!(stats.first_event.is_none());
        assert!(stats.last_event.is_none());
    }

    #[test]
    fn test_populated_stats_are_not_empty() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let event = Event::with_timestamp(ts, "first");
        let stats = LogStats {
            total_events: 3,
            events_today: 1,
            first_event: Some(event.clone()),
            last_event: Some(event),
        };
        assert!(!stats.is_empty());
        assert_eq!(stats.total_events, 3);
    }
}
