//! Event Logger - Binary Entry Point
//!
//! This is the main entry point for the event-logger binary.

use std::env;
use std::process;

use event_logger::bootstrap::prepare_log_file;
use event_logger::console::Console;
use event_logger::event_store::EventStore;
use event_logger::service::EventLogService;

/// Default directory for the log file, next to the working directory.
const DATA_DIR: &str = "results";

/// Name of the log file inside the data directory.
const LOG_FILE: &str = "events.txt";

fn main() {
    println!("╔════════════════════════════════╗");
    println!("║       Event Logger  v1.0       ║");
    println!("║        Terminal Edition        ║");
    println!("╚════════════════════════════════╝\n");

    // 130 = terminated by SIGINT
    if let Err(e) = ctrlc::set_handler(|| {
        println!("\nExiting Event Logger. Goodbye!");
        process::exit(130);
    }) {
        eprintln!("Warning: Could not install Ctrl+C handler: {}", e);
    }

    let service = initialize();

    let mut console = Console::new(service);
    if let Err(e) = console.run() {
        eprintln!("Terminal error: {}", e);
        process::exit(1);
    }

    println!("Exiting Event Logger. Goodbye!");
}

/// Prepare the data directory and wire up the service.
///
/// `EVENT_LOG_DIR` overrides the default directory, which keeps test
/// runs and ad-hoc sessions away from the real log.
fn initialize() -> EventLogService {
    let data_dir = env::var("EVENT_LOG_DIR").unwrap_or_else(|_| DATA_DIR.to_string());

    match prepare_log_file(&data_dir, LOG_FILE) {
        Ok(path) => EventLogService::new(EventStore::new(path)),
        Err(e) => {
            eprintln!("Initialization error: {}", e);
            process::exit(1);
        }
    }
}
