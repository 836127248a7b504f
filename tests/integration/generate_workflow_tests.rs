/*!
 * End-to-end tests for generating the documentation file
 */

use anyhow::Result;
use docx_rs::DocumentChild;
use vibelink_docgen::app_controller::Controller;
use vibelink_docgen::file_utils::FileManager;
use crate::common;

/// Test that a run writes the document to the configured path
#[test]
fn test_run_withFreshDirectory_shouldWriteDocument() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let config = common::test_config(temp_dir.path());
    let expected = config.output_path.clone();

    let controller = Controller::with_config(config)?;
    let written = controller.run(false)?;

    assert_eq!(written.as_deref(), Some(expected.as_path()));
    assert!(FileManager::file_exists(&expected));
    assert!(FileManager::file_size(&expected)? > 0);
    Ok(())
}

/// Test that the written file reads back with every table
#[test]
fn test_run_withFreshDirectory_shouldProduceReadableContainer() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(common::test_config(temp_dir.path()))?;

    let path = controller.run(false)?.expect("document should be written");
    let bytes = std::fs::read(&path)?;
    assert_eq!(&bytes[..2], b"PK");

    let docx = docx_rs::read_docx(&bytes)?;
    let tables = docx
        .document
        .children
        .iter()
        .filter(|c| matches!(c, DocumentChild::Table(_)))
        .count();
    assert_eq!(tables, 17);
    Ok(())
}

/// Test that an existing output is left alone without force
#[test]
fn test_run_withExistingOutput_shouldSkipWithoutForce() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let config = common::test_config(temp_dir.path());
    let output = config.output_path.clone();
    FileManager::ensure_parent_dir(&output)?;
    std::fs::write(&output, "keep me")?;

    let controller = Controller::with_config(config)?;
    assert!(controller.run(false)?.is_none());
    assert_eq!(std::fs::read_to_string(&output)?, "keep me");
    Ok(())
}

/// Test that force overwrite replaces an existing output
#[test]
fn test_run_withExistingOutputAndForce_shouldOverwrite() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let config = common::test_config(temp_dir.path());
    let output = config.output_path.clone();
    FileManager::ensure_parent_dir(&output)?;
    std::fs::write(&output, "stale")?;

    let controller = Controller::with_config(config)?;
    assert!(controller.run(true)?.is_some());

    let bytes = std::fs::read(&output)?;
    assert_eq!(&bytes[..2], b"PK");
    Ok(())
}
