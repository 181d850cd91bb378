//! Event value type and its line-oriented file encoding.
//!
//! An event is one logged occurrence: a wall-clock timestamp with second
//! precision plus a free-form description. Events are persisted one per
//! line as `dd-MM-yyyy HH:mm:ss — description`; this module owns both
//! directions of that codec.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use crate::utils::time::current_datetime;

/// Timestamp layout used in stored lines: `dd-MM-yyyy HH:mm:ss`.
pub const DATETIME_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Token between the timestamp and the description (space, em-dash, space).
pub const SEPARATOR: &str = " — ";

/// Reasons a stored line fails to decode
#[derive(Debug)]
pub enum ParseEventError {
    /// The line is empty or whitespace-only.
    EmptyLine,
    /// The separator token never occurs in the line.
    MissingSeparator,
    /// The part before the separator is not a `dd-MM-yyyy HH:mm:ss` timestamp.
    InvalidTimestamp(chrono::ParseError),
}

impl fmt::Display for ParseEventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseEventError::EmptyLine => write!(f, "line is empty"),
            ParseEventError::MissingSeparator => write!(f, "no '{}' separator found", SEPARATOR),
            ParseEventError::InvalidTimestamp(e) => write!(f, "invalid timestamp: {}", e),
        }
    }
}

impl std::error::Error for ParseEventError {}

/// One logged occurrence: when it happened and what happened.
///
/// Events are immutable values with value equality. They are created
/// transiently when logging, written as a single line, and decoded fresh
/// on every query; the file, not any in-memory copy, is the source of
/// truth.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Event {
    timestamp: NaiveDateTime,
    description: String,
}

impl Event {
    /// Create an event stamped with the current local time.
    ///
    /// The description is trimmed here, and the clock is truncated to
    /// whole seconds so the event survives its line encoding unchanged.
    pub fn new(description: &str) -> Self {
        Self::with_timestamp(current_datetime(), description)
    }

    /// Reconstruct an event with an explicit timestamp, as read from storage.
    pub fn with_timestamp(timestamp: NaiveDateTime, description: &str) -> Self {
        Self {
            timestamp,
            description: description.trim().to_string(),
        }
    }

    /// When the event happened, to the second.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Calendar date of the event, used by the date filter.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// What happened.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Encode as the canonical storage line, without the terminator.
    pub fn to_line(&self) -> String {
        format!(
            "{}{}{}",
            self.timestamp.format(DATETIME_FORMAT),
            SEPARATOR,
            self.description
        )
    }

    /// Decode a stored line.
    ///
    /// Splits on the first separator token, so a description that itself
    /// contains the token still round-trips. Blank lines, lines without
    /// the token, and lines whose left part is not a valid timestamp are
    /// rejected; the caller decides whether to skip or surface that.
    pub fn from_line(line: &str) -> Result<Self, ParseEventError> {
        if line.trim().is_empty() {
            return Err(ParseEventError::EmptyLine);
        }

        let (left, description) = line
            .split_once(SEPARATOR)
            .ok_or(ParseEventError::MissingSeparator)?;

        let timestamp = NaiveDateTime::parse_from_str(left.trim(), DATETIME_FORMAT)
            .map_err(ParseEventError::InvalidTimestamp)?;

        Ok(Self::with_timestamp(timestamp, description))
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.timestamp.format(DATETIME_FORMAT),
            SEPARATOR,
            self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_to_line_format() {
        let event = Event::with_timestamp(sample_timestamp(), "Stand-up meeting");
        assert_eq!(event.to_line(), "05-03-2024 14:30:00 — Stand-up meeting");
    }

    #[test]
    fn test_decode_encode_round_trip() {
        let event = Event::with_timestamp(sample_timestamp(), "Stand-up meeting");
        let decoded = Event::from_line(&event.to_line()).unwrap();
        assert_eq!(decoded, event);
    }

    #[test]
    fn test_encode_decode_identity_on_canonical_line() {
        let line = "31-12-2023 23:59:59 — New Year countdown";
        let event = Event::from_line(line).unwrap();
        assert_eq!(event.to_line(), line);
    }

    #[test]
    fn test_description_containing_separator_round_trips() {
        let event = Event::with_timestamp(sample_timestamp(), "pairs — then retro");
        let decoded = Event::from_line(&event.to_line()).unwrap();
        assert_eq!(decoded.description(), "pairs — then retro");
        assert_eq!(decoded, event);
    }

    #[test]
    fn test_new_trims_and_round_trips() {
        let event = Event::new("  finished the report  ");
        assert_eq!(event.description(), "finished the report");

        // Second-precision timestamps survive the codec.
        let decoded = Event::from_line(&event.to_line()).unwrap();
        assert_eq!(decoded, event);
    }

    #[test]
    fn test_from_line_rejects_empty() {
        assert!(matches!(Event::from_line(""), Err(ParseEventError::EmptyLine)));
        assert!(matches!(
            Event::from_line("   \t"),
            Err(ParseEventError::EmptyLine)
        ));
    }

    #[test]
    fn test_from_line_rejects_missing_separator() {
        assert!(matches!(
            Event::from_line("just some text"),
            Err(ParseEventError::MissingSeparator)
        ));
        // A bare em-dash without the surrounding spaces is not the token.
        assert!(matches!(
            Event::from_line("05-03-2024 14:30:00 —missing space"),
            Err(ParseEventError::MissingSeparator)
        ));
    }

    #[test]
    fn test_from_line_rejects_bad_timestamp() {
        // Wrong field order.
        assert!(matches!(
            Event::from_line("2024-03-05 14:30:00 — iso order"),
            Err(ParseEventError::InvalidTimestamp(_))
        ));
        // Calendar nonsense.
        assert!(matches!(
            Event::from_line("31-02-2024 10:00:00 — nonexistent day"),
            Err(ParseEventError::InvalidTimestamp(_))
        ));
        // Trailing garbage in the timestamp part.
        assert!(matches!(
            Event::from_line("05-03-2024 14:30:00garbage — text"),
            Err(ParseEventError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_from_line_trims_description() {
        let event = Event::from_line("05-03-2024 14:30:00 —   padded   ").unwrap();
        assert_eq!(event.description(), "padded");
    }

    #[test]
    fn test_empty_description_still_decodes() {
        // The service forbids logging these, but stored lines with an
        // empty right part are not malformed.
        let event = Event::from_line("05-03-2024 14:30:00 — ").unwrap();
        assert_eq!(event.description(), "");
    }

    #[test]
    fn test_display_matches_line() {
        let event = Event::with_timestamp(sample_timestamp(), "Stand-up meeting");
        assert_eq!(event.to_string(), event.to_line());
    }

    #[test]
    fn test_value_equality() {
        let a = Event::with_timestamp(sample_timestamp(), "same");
        let b = Event::with_timestamp(sample_timestamp(), "same");
        let c = Event::with_timestamp(sample_timestamp(), "different");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_date_is_calendar_date() {
        let event = Event::with_timestamp(sample_timestamp(), "dated");
        assert_eq!(event.date(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }
}
