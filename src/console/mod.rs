//! Terminal console
//!
//! This module contains the interactive menu loop that drives the
//! service over stdin/stdout. The console owns no state of its own
//! beyond the current screen; every screen re-queries the service.

mod screens;

use std::io::{self, BufRead, BufReader, BufWriter, Write};

use crate::service::EventLogService;
use crate::types::AppResult;

/// Interactive menu console over stdio
pub struct Console {
    service: EventLogService,
    reader: BufReader<io::Stdin>,
    writer: BufWriter<io::Stdout>,
}

impl Console {
    /// Create a console driving the given service
    pub fn new(service: EventLogService) -> Self {
        Self {
            service,
            reader: BufReader::new(io::stdin()),
            writer: BufWriter::new(io::stdout()),
        }
    }

    /// Run the menu loop until the user exits (blocking)
    ///
    /// End of input counts as an exit request, so a piped session ends
    /// cleanly instead of spinning on a closed stdin.
    pub fn run(&mut self) -> AppResult<()> {
        let mut running = true;
        while running {
            running = self.show_main_menu()?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Render the main menu and dispatch one choice
    fn show_main_menu(&mut self) -> AppResult<bool> {
        self.print_header("MAIN MENU")?;
        writeln!(self.writer, "[KEY] ACTION")?;
        writeln!(self.writer, "[ 1 ] Log a new event")?;
        writeln!(self.writer, "[ 2 ] View logged events")?;
        writeln!(self.writer, "[ 3 ] Show statistics")?;
        writeln!(self.writer, "[ 4 ] Search events by date")?;
        writeln!(self.writer, "[ 5 ] Delete an event")?;
        writeln!(self.writer, "[ 6 ] Delete all events")?;
        writeln!(self.writer, "[ 0 ] Exit")?;

        let input = match self.prompt("main-menu")? {
            Some(input) => input,
            None => return Ok(false),
        };

        match input.parse::<i32>() {
            Ok(choice) => {
                writeln!(self.writer)?;

                match choice {
                    1 => self.show_log_new_event()?,
                    2 => self.show_view_logged_events()?,
                    3 => self.show_statistics()?,
                    4 => self.show_search_events_by_date()?,
                    5 => self.show_delete_event()?,
                    6 => self.show_delete_all_events()?,
                    0 => return Ok(false),
                    _ => {
                        self.error_line("Invalid choice. Please enter a number from 0 to 6.")?;
                        writeln!(self.writer)?;
                    }
                }
            }
            Err(_) => {
                self.error_line("Invalid input. Please enter a number.")?;
                writeln!(self.writer)?;
            }
        }

        Ok(true)
    }

    /// Print a section title underlined to its own width
    fn print_header(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", title)?;
        writeln!(self.writer, "{}", "—".repeat(title.chars().count()))?;
        Ok(())
    }

    /// Show a screen prompt and read one trimmed line.
    ///
    /// Returns `None` when stdin is exhausted.
    fn prompt(&mut self, screen: &str) -> AppResult<Option<String>> {
        write!(self.writer, "\n[terminal] {}/> ", screen)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// Block until the user presses Enter (or input ends)
    fn wait_for_enter(&mut self) -> AppResult<()> {
        writeln!(self.writer, "\n(Press Enter to return)")?;
        self.writer.flush()?;

        let mut line = String::new();
        self.reader.read_line(&mut line)?;

        Ok(())
    }

    /// Print one line to stderr, keeping it in order with stdout output
    fn error_line(&mut self, message: &str) -> AppResult<()> {
        self.writer.flush()?;
        eprintln!("{}", message);
        Ok(())
    }
}
