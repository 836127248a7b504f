/*!
 * Tests for application configuration
 */

use anyhow::Result;
use std::path::PathBuf;
use vibelink_docgen::app_config::{Config, LogLevel};
use vibelink_docgen::document::{PageSetup, Rgb};
use crate::common;

/// Test that the default config validates and points at the docs directory
#[test]
fn test_default_config_withNoChanges_shouldValidate() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(
        config.output_path,
        PathBuf::from("docs").join("VibeLink_Technical_Documentation.docx")
    );
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.styles.heading_color, Rgb::NAVY);
}

/// Test that the cover date renders in long form
#[test]
fn test_cover_formatted_date_withDefault_shouldUseLongForm() {
    let config = Config::default();
    assert_eq!(config.cover.formatted_date(), "January 28, 2026");
}

/// Test that non-.docx output paths are rejected
#[test]
fn test_validate_withWrongExtension_shouldFail() {
    let config = Config {
        output_path: PathBuf::from("docs/out.pdf"),
        ..Config::default()
    };
    assert!(config.validate().is_err());
}

/// Test that an empty output path is rejected
#[test]
fn test_validate_withEmptyOutputPath_shouldFail() {
    let config = Config {
        output_path: PathBuf::new(),
        ..Config::default()
    };
    assert!(config.validate().is_err());
}

/// Test that out-of-range body sizes are rejected
#[test]
fn test_validate_withBodySizeOutOfRange_shouldFail() {
    let mut config = Config::default();
    config.styles.body_size_pt = 5;
    assert!(config.validate().is_err());
    config.styles.body_size_pt = 73;
    assert!(config.validate().is_err());
    config.styles.body_size_pt = 72;
    assert!(config.validate().is_ok());
}

/// Test that blank font names are rejected
#[test]
fn test_validate_withBlankFont_shouldFail() {
    let mut config = Config::default();
    config.styles.heading_font = "  ".to_string();
    assert!(config.validate().is_err());
}

/// Test that margins outside 0..=3 inches are rejected
#[test]
fn test_validate_withLargeMargin_shouldFail() {
    let config = Config {
        page: PageSetup::uniform(3.5),
        ..Config::default()
    };
    assert!(config.validate().is_err());
}

/// Test that a page too narrow for its margins is rejected
#[test]
fn test_validate_withPageNarrowerThanMargins_shouldFail() {
    let config = Config {
        page: PageSetup {
            page_width: 4.0,
            ..PageSetup::uniform(1.75)
        },
        ..Config::default()
    };
    assert!(config.validate().is_err());
}

/// Test that an A4 page from the config file validates
#[test]
fn test_load_or_create_withA4Page_shouldKeepMarginDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "docgen.json",
        r#"{ "page": { "page_width": 8.27, "page_height": 11.69 } }"#,
    )?;

    let (config, _) = Config::load_or_create(&path)?;
    assert_eq!(config.page.page_width, 8.27);
    assert_eq!(config.page.left_margin, 1.0);
    assert!(config.validate().is_ok());

    Ok(())
}

/// Test that a missing config file is created with defaults
#[test]
fn test_load_or_create_withMissingFile_shouldWriteDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("docgen.json");

    let (config, created) = Config::load_or_create(&path)?;
    assert!(created);
    assert!(path.exists());
    assert_eq!(config, Config::default());

    let (reloaded, created_again) = Config::load_or_create(&path)?;
    assert!(!created_again);
    assert_eq!(reloaded, config);

    Ok(())
}

/// Test that partial config files fall back to defaults for missing fields
#[test]
fn test_load_or_create_withPartialFile_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "docgen.json",
        r##"{
            "output_path": "out/Docs.docx",
            "log_level": "debug",
            "cover": { "version": "2.0", "release_date": "2026-03-01" },
            "styles": { "heading_color": "#3F51B5" }
        }"##,
    )?;

    let (config, created) = Config::load_or_create(&path)?;
    assert!(!created);
    assert_eq!(config.output_path, PathBuf::from("out/Docs.docx"));
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.cover.version, "2.0");
    assert_eq!(config.cover.title, "VibeLink Ghana");
    assert_eq!(config.cover.formatted_date(), "March 1, 2026");
    assert_eq!(config.styles.heading_color, Rgb::INDIGO);
    assert_eq!(config.styles.body_font, "Calibri");
    assert_eq!(config.page, PageSetup::default());

    Ok(())
}

/// Test that malformed colors are reported as config errors
#[test]
fn test_load_or_create_withMalformedColor_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "docgen.json",
        r#"{ "styles": { "heading_color": "navy" } }"#,
    )?;

    assert!(Config::load_or_create(&path).is_err());
    Ok(())
}

/// Test that log levels map onto log filters
#[test]
fn test_log_level_to_level_filter_withEachLevel_shouldMatch() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
