//! Startup preparation of the log directory and file
//!
//! Runs once before the menu loop: makes sure the data directory and
//! the log file exist, and sweeps any .tmp files a crashed rewrite may
//! have left behind. Existing log content is never touched.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::types::AppResult;
use crate::utils::atomic::cleanup_temp_files;

/// Ensure the data directory and log file exist, returning the log path.
///
/// Announces each thing it had to create; says nothing when everything
/// is already in place. Safe to call on every start.
pub fn prepare_log_file<P: AsRef<Path>>(dir: P, file_name: &str) -> AppResult<PathBuf> {
    let dir = dir.as_ref();

    if !dir.exists() {
        fs::create_dir_all(dir)?;
        println!("[+] Directory created: {}", dir.display());
    }

    // Leftovers from an interrupted rewrite are garbage by definition.
    let cleaned = cleanup_temp_files(dir)?;
    if cleaned > 0 {
        println!("[+] Removed {} leftover temp file(s)", cleaned);
    }

    let path = dir.join(file_name);
    if !path.exists() {
        File::create(&path)?;
        println!("[+] File created: {}", path.display());
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_prepare_creates_dir_and_file() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("results");

        let path = prepare_log_file(&data_dir, "events.txt").unwrap();

        assert_eq!(path, data_dir.join("events.txt"));
        assert!(data_dir.is_dir());
        assert!(path.is_file());
    }

    #[test]
    fn test_prepare_is_idempotent_and_keeps_content() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("results");

        let path = prepare_log_file(&data_dir, "events.txt").unwrap();
        fs::write(&path, "05-03-2024 09:00:00 — already here\n").unwrap();

        let path_again = prepare_log_file(&data_dir, "events.txt").unwrap();

        assert_eq!(path, path_again);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "05-03-2024 09:00:00 — already here\n"
        );
    }

    #[test]
    fn test_prepare_sweeps_leftover_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("results");
        fs::create_dir_all(&data_dir).unwrap();
        fs::write(data_dir.join("events.tmp"), "half-finished rewrite").unwrap();
        fs::write(data_dir.join("events.txt"), "keep\n").unwrap();

        prepare_log_file(&data_dir, "events.txt").unwrap();

        assert!(!data_dir.join("events.tmp").exists());
        assert_eq!(
            fs::read_to_string(data_dir.join("events.txt")).unwrap(),
            "keep\n"
        );
    }

    #[test]
    fn test_prepare_creates_nested_dir() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("deeply").join("nested").join("results");

        let path = prepare_log_file(&data_dir, "events.txt").unwrap();

        assert!(path.is_file());
    }
}
