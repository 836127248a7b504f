/*!
 * Error types for the vibelink-docgen application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors raised while assembling the in-memory document
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DocumentError {
    /// Heading level outside the supported Heading 1..3 range
    #[error("Invalid heading level {0}: only levels 1 to 3 are styled")]
    InvalidHeadingLevel(u8),

    /// Write to a table cell outside the table grid
    #[error("Cell ({row}, {col}) is outside a {rows}x{cols} table")]
    CellOutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Table row count
        rows: usize,
        /// Table column count
        cols: usize,
    },

    /// Row data with a different width than the table header
    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Index of the offending row
        row: usize,
        /// Width of the first row
        expected: usize,
        /// Width of the offending row
        found: usize,
    },

    /// A table needs at least one row and one column
    #[error("Table must have at least one row and one column")]
    EmptyTable,
}

/// Errors raised while converting the document into a .docx container
#[derive(Error, Debug)]
pub enum RenderError {
    /// The docx writer failed to pack the container
    #[error("Failed to pack document: {0}")]
    Pack(String),

    /// Error creating or writing the output file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from configuration loading or validation
    #[error("Config error: {0}")]
    Config(String),

    /// Error while building the document
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Error while rendering the document
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

// Utility functions for error conversion
impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
