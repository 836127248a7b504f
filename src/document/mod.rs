/*!
 * Document modeling for the generated documentation.
 *
 * This module provides the in-memory document that section routines append to:
 * - Headings, formatted paragraphs, bullet lists and code blocks
 * - Fixed-size tables filled cell by cell
 * - Style sheet and page margins applied at render time
 */

pub mod model;
pub mod styles;

// Re-export types used by other modules
pub use model::{
    Alignment, Block, Document, Heading, OutlineEntry, Paragraph, ParagraphStyle, Table, TableStyle, TextRun,
};
pub use styles::{PageSetup, Rgb, StyleSheet};
