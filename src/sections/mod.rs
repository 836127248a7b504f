/*!
 * Section routines for the VibeLink Ghana technical documentation.
 *
 * Every routine appends one fixed topic to the shared document. They run in
 * the order of `SECTIONS`, which is also the reading order of the output:
 * cover page, contents placeholder, then thirteen level-1 chapters.
 */

use crate::app_config::CoverInfo;
use crate::document::Document;
use crate::errors::DocumentError;

pub mod api_integrations;
pub mod appendices;
pub mod contents;
pub mod cover;
pub mod database_schema;
pub mod deployment;
pub mod development_workflow;
pub mod executive_summary;
pub mod features;
pub mod future_enhancements;
pub mod maintenance;
pub mod project_overview;
pub mod security;
pub mod technical_architecture;
pub mod user_interface;

/// Read-only inputs available to every section routine
#[derive(Debug, Clone, Copy)]
pub struct SectionContext<'a> {
    pub cover: &'a CoverInfo,
}

/// Signature shared by all section routines
pub type BuildFn = fn(&mut Document, &SectionContext<'_>) -> Result<(), DocumentError>;

/// A named section routine
#[derive(Clone, Copy)]
pub struct Section {
    /// Human-readable name used in progress output
    pub name: &'static str,
    pub build: BuildFn,
}

impl std::fmt::Debug for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Section").field("name", &self.name).finish()
    }
}

/// All sections in document order
pub const SECTIONS: [Section; 15] = [
    Section { name: "cover page", build: cover::build },
    Section { name: "table of contents", build: contents::build },
    Section { name: "executive summary", build: executive_summary::build },
    Section { name: "project overview", build: project_overview::build },
    Section { name: "technical architecture", build: technical_architecture::build },
    Section { name: "development workflow", build: development_workflow::build },
    Section { name: "features and specifications", build: features::build },
    Section { name: "user interface", build: user_interface::build },
    Section { name: "database schema", build: database_schema::build },
    Section { name: "API and integrations", build: api_integrations::build },
    Section { name: "deployment and infrastructure", build: deployment::build },
    Section { name: "security", build: security::build },
    Section { name: "maintenance and support", build: maintenance::build },
    Section { name: "future enhancements", build: future_enhancements::build },
    Section { name: "appendices", build: appendices::build },
];

/// Run every section in order against `doc`
pub fn build_all(doc: &mut Document, ctx: &SectionContext<'_>) -> Result<(), DocumentError> {
    for section in SECTIONS {
        (section.build)(doc, ctx)?;
    }
    Ok(())
}
