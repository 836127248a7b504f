/*!
 * # VibeLink Docgen - Technical documentation generator for VibeLink Ghana
 *
 * A Rust library that assembles the VibeLink Ghana technical documentation
 * and writes it as a Word (.docx) file.
 *
 * ## Features
 *
 * - Fixed cover page, contents placeholder and thirteen chapters
 * - Formatted headings, bullet lists, labeled lines and code blocks
 * - Styled tables with fixed dimensions
 * - Configurable fonts, heading color, margins and cover metadata
 * - Heading outline export as text or JSON
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `document`: In-memory document model and style sheet
 * - `sections`: One routine per documentation section
 * - `docx_writer`: Rendering of the document model into a .docx file
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod document;
pub mod docx_writer;
pub mod errors;
pub mod file_utils;
pub mod sections;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use document::{Document, Table, TableStyle};
pub use errors::{AppError, DocumentError, RenderError};
