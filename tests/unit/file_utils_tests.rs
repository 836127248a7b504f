/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use vibelink_docgen::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "test_file_exists.tmp", "test content")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::file_exists(temp_dir.path()));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that dir_exists returns false for non-existent directories
#[test]
fn test_dir_exists_withNonExistentDir_shouldReturnFalse() {
    assert!(!FileManager::dir_exists("./non_existent_directory_12345"));
}

/// Test that ensure_parent_dir creates nested directories
#[test]
fn test_ensure_parent_dir_withNestedPath_shouldCreateDirectories() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = temp_dir.path().join("a").join("b").join("out.docx");

    FileManager::ensure_parent_dir(&file)?;

    assert!(FileManager::dir_exists(temp_dir.path().join("a").join("b")));
    assert!(!FileManager::file_exists(&file));
    Ok(())
}

/// Test that ensure_dir accepts an existing directory and refuses a file in the way
#[test]
fn test_ensure_dir_withExistingDirOrFile_shouldOnlyAcceptDir() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    FileManager::ensure_dir(temp_dir.path())?;

    let blocker = common::create_test_file(temp_dir.path(), "docs", "not a directory")?;
    assert!(FileManager::ensure_dir(&blocker).is_err());
    assert!(FileManager::ensure_parent_dir(blocker.join("out.docx")).is_err());
    Ok(())
}

/// Test that a bare file name needs no parent directory
#[test]
fn test_ensure_parent_dir_withBareFileName_shouldSucceed() {
    assert!(FileManager::ensure_parent_dir("out.docx").is_ok());
}

/// Test that file_size reports the written length
#[test]
fn test_file_size_withKnownContent_shouldReturnLength() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "sized.txt", "12345")?;

    assert_eq!(FileManager::file_size(&test_file)?, 5);
    assert!(FileManager::file_size(temp_dir.path().join("missing.txt")).is_err());
    Ok(())
}
