//! Individual menu screens
//!
//! Each screen renders one interaction: header, optional prompt, one
//! service call, and the outcome text. Service failures are rendered
//! here; only terminal I/O failures propagate out.

use std::io::Write;

use super::Console;
use crate::service::ServiceError;
use crate::types::AppResult;

impl Console {
    pub(super) fn show_log_new_event(&mut self) -> AppResult<()> {
        self.print_header("LOG NEW EVENT")?;
        writeln!(
            self.writer,
            "Enter an event description (or leave empty to cancel)"
        )?;

        let input = self.prompt("log-new-event")?.unwrap_or_default();

        if input.is_empty() {
            writeln!(self.writer, "No event description provided. Cancelled.")?;
        } else {
            match self.service.log_new_event(&input) {
                Ok(_) => writeln!(self.writer, "Event logged successfully!")?,
                Err(_) => self.error_line("Failed to log event. Please try again.")?,
            }
        }

        writeln!(self.writer)?;
        Ok(())
    }

    pub(super) fn show_view_logged_events(&mut self) -> AppResult<()> {
        self.print_header("VIEW LOGGED EVENTS")?;

        let events = match self.service.get_all_events() {
            Ok(events) => events,
            Err(e) => {
                self.error_line(&format!("Failed to read events: {}", e))?;
                writeln!(self.writer)?;
                return Ok(());
            }
        };

        if events.is_empty() {
            writeln!(self.writer, "No events logged yet.")?;
            writeln!(self.writer)?;
        } else {
            writeln!(self.writer, "Total events: {}", events.len())?;
            writeln!(self.writer)?;

            for (number, event) in events.iter().enumerate() {
                writeln!(self.writer, "{}) {}", number + 1, event)?;
            }

            self.wait_for_enter()?;
        }

        Ok(())
    }

    pub(super) fn show_statistics(&mut self) -> AppResult<()> {
        self.print_header("STATISTICS")?;

        let stats = match self.service.get_statistics() {
            Ok(stats) => stats,
            Err(e) => {
                self.error_line(&format!("Failed to read events: {}", e))?;
                writeln!(self.writer)?;
                return Ok(());
            }
        };

        writeln!(self.writer, "Total events logged: {}", stats.total_events)?;
        writeln!(self.writer, "Events today: {}", stats.events_today)?;

        match &stats.first_event {
            Some(event) => writeln!(self.writer, "First event: {}", event)?,
            None => writeln!(self.writer, "First event: N/A")?,
        }
        match &stats.last_event {
            Some(event) => writeln!(self.writer, "Last event: {}", event)?,
            None => writeln!(self.writer, "Last event: N/A")?,
        }

        self.wait_for_enter()?;
        Ok(())
    }

    pub(super) fn show_search_events_by_date(&mut self) -> AppResult<()> {
        self.print_header("SEARCH EVENTS BY DATE")?;
        writeln!(
            self.writer,
            "Enter a date to search for events (format: dd-MM-yyyy)"
        )?;

        let input = self.prompt("search-events-by-date")?.unwrap_or_default();

        if input.is_empty() {
            writeln!(self.writer, "No date provided. Cancelled.")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        let matched = match self.service.search_events_by_date(&input) {
            Ok(matched) => matched,
            Err(ServiceError::InvalidDate(_)) => {
                self.error_line("Invalid date format. Please use dd-MM-yyyy.")?;
                writeln!(self.writer)?;
                return Ok(());
            }
            Err(e) => {
                self.error_line(&format!("Failed to read events: {}", e))?;
                writeln!(self.writer)?;
                return Ok(());
            }
        };

        writeln!(self.writer, "\nSearch results for {}:", input)?;

        if matched.is_empty() {
            writeln!(self.writer, "No events found for this date.")?;
        } else {
            writeln!(self.writer, "Found {} event(s):\n", matched.len())?;

            for (number, event) in matched.iter().enumerate() {
                writeln!(self.writer, "{}) {}", number + 1, event)?;
            }
        }

        self.wait_for_enter()?;
        Ok(())
    }

    pub(super) fn show_delete_event(&mut self) -> AppResult<()> {
        self.print_header("DELETE EVENT")?;

        let events = match self.service.get_all_events() {
            Ok(events) => events,
            Err(e) => {
                self.error_line(&format!("Failed to read events: {}", e))?;
                writeln!(self.writer)?;
                return Ok(());
            }
        };

        if events.is_empty() {
            writeln!(self.writer, "No events logged yet.")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        writeln!(self.writer, "Total events: {}", events.len())?;
        writeln!(self.writer)?;

        for (number, event) in events.iter().enumerate() {
            writeln!(self.writer, "{}) {}", number + 1, event)?;
        }

        writeln!(
            self.writer,
            "\nEnter the event number to delete (or leave empty to cancel)"
        )?;

        let input = self.prompt("delete-event")?.unwrap_or_default();

        if input.is_empty() {
            writeln!(self.writer, "No event number provided. Cancelled.")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        match input.parse::<usize>() {
            Ok(number) => match self.service.delete_event(number) {
                Ok(removed) => writeln!(self.writer, "Event deleted: {}", removed)?,
                Err(ServiceError::InvalidIndex(_)) => {
                    self.error_line(&format!(
                        "Invalid event number. Please enter a number from 1 to {}.",
                        events.len()
                    ))?;
                }
                Err(e) => self.error_line(&format!("Failed to delete event: {}", e))?,
            },
            Err(_) => self.error_line("Invalid input. Please enter a number.")?,
        }

        writeln!(self.writer)?;
        Ok(())
    }

    pub(super) fn show_delete_all_events(&mut self) -> AppResult<()> {
        self.print_header("DELETE ALL EVENTS")?;

        let events = match self.service.get_all_events() {
            Ok(events) => events,
            Err(e) => {
                self.error_line(&format!("Failed to read events: {}", e))?;
                writeln!(self.writer)?;
                return Ok(());
            }
        };

        if events.is_empty() {
            writeln!(self.writer, "No events logged yet.")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        writeln!(
            self.writer,
            "This will delete all {} logged event(s). This cannot be undone.",
            events.len()
        )?;
        writeln!(self.writer, "Type 'yes' to confirm (or anything else to cancel)")?;

        let input = self.prompt("delete-all-events")?.unwrap_or_default();

        if input.eq_ignore_ascii_case("yes") {
            match self.service.delete_all_events() {
                Ok(()) => writeln!(self.writer, "All events deleted.")?,
                Err(e) => self.error_line(&format!("Failed to delete events: {}", e))?,
            }
        } else {
            writeln!(self.writer, "Cancelled. No events were deleted.")?;
        }

        writeln!(self.writer)?;
        Ok(())
    }
}
