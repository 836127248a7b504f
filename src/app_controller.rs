use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::app_config::Config;
use crate::document::Document;
use crate::docx_writer;
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::sections::{SECTIONS, SectionContext};

// @module: Application controller for documentation generation

/// Manual steps left to the reader once the file exists
pub const NEXT_STEPS: [&str; 6] = [
    "Open the document in Microsoft Word",
    "Generate table of contents (References > Table of Contents)",
    "Add page numbers (Insert > Page Number)",
    "Add headers (Insert > Header)",
    "Create diagrams for architecture sections",
    "Review and customize as needed",
];

/// Main application controller for documentation generation
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run every section routine against a fresh document
    pub fn build_document(&self) -> Result<Document, AppError> {
        let mut doc = Document::with_setup(self.config.styles.clone(), self.config.page);
        let ctx = SectionContext {
            cover: &self.config.cover,
        };

        let progress_bar = ProgressBar::new(SECTIONS.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} sections ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));

        for section in SECTIONS {
            progress_bar.set_message(section.name);
            info!("Adding {}...", section.name);
            if let Err(e) = (section.build)(&mut doc, &ctx) {
                progress_bar.abandon();
                return Err(e.into());
            }
            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();
        debug!(
            "Assembled {} blocks, {} tables",
            doc.blocks.len(),
            doc.tables().len()
        );
        Ok(doc)
    }

    /// Build and save the documentation.
    ///
    /// Returns the written path, or `None` when an existing file was left in place.
    pub fn run(&self, force_overwrite: bool) -> Result<Option<PathBuf>> {
        let start_time = Instant::now();
        let output_path = self.config.output_path.clone();

        if FileManager::file_exists(&output_path) && !force_overwrite {
            warn!("Skipping, output already exists (use -f to force overwrite): {}", output_path.display());
            return Ok(None);
        }

        info!("Creating {} {}...", self.config.cover.title, self.config.cover.subtitle);
        let doc = self.build_document().context("Failed to assemble the document")?;

        FileManager::ensure_parent_dir(&output_path)?;
        info!("Saving document to {}...", output_path.display());
        docx_writer::write_docx(&doc, &output_path)
            .with_context(|| format!("Failed to write document: {}", output_path.display()))?;

        let size = FileManager::file_size(&output_path)?;
        info!(
            "Documentation created successfully in {} ({} bytes)",
            Self::format_duration(start_time.elapsed()),
            size
        );
        info!("Location: {}", output_path.display());
        Self::log_next_steps();

        Ok(Some(output_path))
    }

    fn log_next_steps() {
        info!("Next steps:");
        for (i, step) in NEXT_STEPS.iter().enumerate() {
            info!("{}. {}", i + 1, step);
        }
    }

    // Format duration in a human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(Controller::format_duration(Duration::from_millis(1250)), "1.250s");
        assert_eq!(Controller::format_duration(Duration::from_secs(125)), "2m 5s");
        assert_eq!(Controller::format_duration(Duration::from_secs(3725)), "1h 2m 5s");
    }
}
