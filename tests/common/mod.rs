/*!
 * Common test utilities for the vibelink-docgen test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use vibelink_docgen::app_config::Config;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Default configuration writing into `dir`
pub fn test_config(dir: &Path) -> Config {
    Config {
        output_path: dir.join("docs").join("VibeLink_Technical_Documentation.docx"),
        ..Config::default()
    }
}

/// Route log output through the test harness
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
