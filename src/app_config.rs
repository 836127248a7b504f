use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::document::{PageSetup, StyleSheet};
use crate::errors::AppError;

// @module: Application configuration loading, defaults and validation

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Where the generated .docx is written
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Cover page metadata
    #[serde(default)]
    pub cover: CoverInfo,

    /// Fonts and heading colors
    #[serde(default)]
    pub styles: StyleSheet,

    /// Page margins in inches
    #[serde(default)]
    pub page: PageSetup,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Text shown on the cover page
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CoverInfo {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_subtitle")]
    pub subtitle: String,

    #[serde(default = "default_tagline")]
    pub tagline: String,

    #[serde(default = "default_version")]
    pub version: String,

    /// Release date, printed as "January 28, 2026"
    #[serde(default = "default_release_date")]
    pub release_date: NaiveDate,

    #[serde(default = "default_website")]
    pub website: String,
}

impl CoverInfo {
    // @returns: Release date in long US form
    pub fn formatted_date(&self) -> String {
        self.release_date.format("%B %-d, %Y").to_string()
    }
}

impl Default for CoverInfo {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
            tagline: default_tagline(),
            version: default_version(),
            release_date: default_release_date(),
            website: default_website(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("docs").join("VibeLink_Technical_Documentation.docx")
}

fn default_title() -> String {
    "VibeLink Ghana".to_string()
}

fn default_subtitle() -> String {
    "Technical Documentation".to_string()
}

fn default_tagline() -> String {
    "Digital Event Invitation Platform".to_string()
}

fn default_version() -> String {
    "1.0".to_string()
}

fn default_release_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 28).unwrap_or_default()
}

fn default_website() -> String {
    "https://vibelinkgh.com/".to_string()
}

const MIN_BODY_SIZE_PT: u32 = 6;
const MAX_BODY_SIZE_PT: u32 = 72;
const MAX_MARGIN_INCHES: f32 = 3.0;
const MIN_TEXT_AREA_INCHES: f32 = 1.0;

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), AppError> {
        if self.output_path.as_os_str().is_empty() {
            return Err(AppError::Config("Output path must not be empty".to_string()));
        }

        let is_docx = self
            .output_path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("docx"));
        if !is_docx {
            return Err(AppError::Config(format!(
                "Output path must end in .docx: {}",
                self.output_path.display()
            )));
        }

        if !(MIN_BODY_SIZE_PT..=MAX_BODY_SIZE_PT).contains(&self.styles.body_size_pt) {
            return Err(AppError::Config(format!(
                "Body font size must be between {} and {} points, got {}",
                MIN_BODY_SIZE_PT, MAX_BODY_SIZE_PT, self.styles.body_size_pt
            )));
        }

        if self.styles.body_font.trim().is_empty() || self.styles.heading_font.trim().is_empty() {
            return Err(AppError::Config("Font names must not be empty".to_string()));
        }

        if self
            .page
            .margins()
            .iter()
            .any(|m| !(0.0..=MAX_MARGIN_INCHES).contains(m))
        {
            return Err(AppError::Config(format!(
                "Page margins must be between 0 and {} inches",
                MAX_MARGIN_INCHES
            )));
        }

        if self.page.text_width() < MIN_TEXT_AREA_INCHES || self.page.text_height() < MIN_TEXT_AREA_INCHES {
            return Err(AppError::Config(format!(
                "Page of {}x{} inches leaves less than {} inch of text area inside the margins",
                self.page.page_width, self.page.page_height, MIN_TEXT_AREA_INCHES
            )));
        }

        Ok(())
    }

    /// Load a config from JSON, or write and return the defaults when the file is missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<(Self, bool), AppError> {
        let path = path.as_ref();
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config = serde_json::from_str(&content)
                .map_err(|e| AppError::Config(format!("Failed to parse config file {}: {}", path.display(), e)))?;
            Ok((config, false))
        } else {
            let config = Config::default();
            let json = serde_json::to_string_pretty(&config)
                .map_err(|e| AppError::Config(format!("Failed to serialize default config: {}", e)))?;
            std::fs::write(path, json)?;
            Ok((config, true))
        }
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            output_path: default_output_path(),
            cover: CoverInfo::default(),
            styles: StyleSheet::default(),
            page: PageSetup::default(),
            log_level: LogLevel::default(),
        }
    }
}
