/*!
 * Integration tests for application lifecycle
 */

use anyhow::Result;
use vibelink_docgen::app_config::Config;
use vibelink_docgen::app_controller::{Controller, NEXT_STEPS};
use vibelink_docgen::document::{PageSetup, Rgb};
use crate::common;

/// Test the controller initialization with default config
#[test]
fn test_controller_initialization_withDefaultConfig_shouldKeepConfig() -> Result<()> {
    let controller = Controller::with_config(Config::default())?;
    assert_eq!(controller.config(), &Config::default());
    Ok(())
}

/// Test that the built document carries the configured style sheet
#[test]
fn test_build_document_withCustomStyles_shouldApplyThem() -> Result<()> {
    common::init_test_logging();
    let mut config = Config::default();
    config.styles.body_font = "Arial".to_string();
    config.styles.heading_color = Rgb::INDIGO;
    config.page = PageSetup::uniform(0.5);

    let controller = Controller::with_config(config)?;
    let doc = controller.build_document()?;

    assert_eq!(doc.styles.body_font, "Arial");
    assert_eq!(doc.styles.heading_color, Rgb::INDIGO);
    assert_eq!(doc.page, PageSetup::uniform(0.5));
    assert_eq!(doc.headings_at(1).len(), 14);
    Ok(())
}

/// Test that a config file round-trips into a successful run
#[test]
fn test_config_file_withCustomOutput_shouldDriveRun() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let config_path = temp_dir.path().join("docgen.json");

    let (mut config, created) = Config::load_or_create(&config_path)?;
    assert!(created);
    config.output_path = temp_dir.path().join("nested").join("out.docx");
    config.validate()?;

    let controller = Controller::with_config(config)?;
    let written = controller.run(false)?;
    assert_eq!(written, Some(temp_dir.path().join("nested").join("out.docx")));
    Ok(())
}

/// Test the next steps checklist
#[test]
fn test_next_steps_withDefaults_shouldStartWithOpeningWord() {
    assert_eq!(NEXT_STEPS.len(), 6);
    assert_eq!(NEXT_STEPS[0], "Open the document in Microsoft Word");
}
