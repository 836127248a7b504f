/*!
 * Tests for the in-memory document model
 */

use vibelink_docgen::document::{Alignment, Block, Document, ParagraphStyle, Table, TableStyle};
use vibelink_docgen::errors::DocumentError;

/// Test that headings outside 1..=3 are rejected
#[test]
fn test_add_heading_withUnsupportedLevel_shouldFail() {
    let mut doc = Document::new();
    assert_eq!(doc.add_heading("Too deep", 4), Err(DocumentError::InvalidHeadingLevel(4)));
    assert_eq!(doc.add_heading("Too shallow", 0), Err(DocumentError::InvalidHeadingLevel(0)));
    assert!(doc.blocks.is_empty());
}

/// Test that aligned headings keep their alignment
#[test]
fn test_add_heading_aligned_withCenter_shouldStoreAlignment() {
    let mut doc = Document::new();
    doc.add_heading_aligned("TABLE OF CONTENTS", 1, Alignment::Center).unwrap();

    let heading = doc.headings().next().unwrap();
    assert_eq!(heading.text, "TABLE OF CONTENTS");
    assert_eq!(heading.alignment, Some(Alignment::Center));
}

/// Test that labeled paragraphs bold only the label
#[test]
fn test_add_labeled_withLabelAndText_shouldBoldLabelOnly() {
    let mut doc = Document::new();
    doc.add_labeled("signUp()", "Create new user account with email/password");

    let paragraph = doc.paragraphs().next().unwrap();
    assert_eq!(paragraph.runs.len(), 2);
    assert_eq!(paragraph.runs[0].text, "signUp(): ");
    assert!(paragraph.runs[0].bold);
    assert!(!paragraph.runs[1].bold);
    assert_eq!(paragraph.text(), "signUp(): Create new user account with email/password");
}

/// Test that numbered steps start at one
#[test]
fn test_add_numbered_withSteps_shouldPrefixFromOne() {
    let mut doc = Document::new();
    doc.add_numbered(&["Clone", "Install"]);

    let texts: Vec<String> = doc.paragraphs().map(|p| p.text()).collect();
    assert_eq!(texts, vec!["1. Clone", "2. Install"]);
}

/// Test that bullet helpers use the List Bullet style
#[test]
fn test_add_bullets_withItems_shouldUseListBulletStyle() {
    let mut doc = Document::new();
    doc.add_bullets(&["one", "two"]);
    doc.add_bullets_indented(&["nested"], 0.5);
    doc.add_paragraph("plain");

    assert_eq!(doc.bullet_count(), 3);
    let nested = doc.paragraphs().nth(2).unwrap();
    assert_eq!(nested.left_indent, Some(0.5));
}

/// Test that code blocks use the No Spacing style
#[test]
fn test_add_code_block_withText_shouldUseNoSpacing() {
    let mut doc = Document::new();
    doc.add_code_block("npm install\nnpm run dev");

    let paragraph = doc.paragraphs().next().unwrap();
    assert_eq!(paragraph.style, ParagraphStyle::NoSpacing);
}

/// Test that an empty table is rejected
#[test]
fn test_table_new_withZeroDimension_shouldFail() {
    assert_eq!(Table::new(0, 2, TableStyle::LightGridAccent1).unwrap_err(), DocumentError::EmptyTable);
    assert_eq!(Table::new(2, 0, TableStyle::LightGridAccent1).unwrap_err(), DocumentError::EmptyTable);
}

/// Test that from_rows rejects rows of different widths
#[test]
fn test_table_from_rows_withRaggedRows_shouldFail() {
    let result = Table::from_rows(TableStyle::LightGridAccent1, &[&["a", "b"], &["c"]]);
    assert_eq!(
        result.unwrap_err(),
        DocumentError::RaggedRow { row: 1, expected: 2, found: 1 }
    );
}

/// Test that unfilled rows stay empty
#[test]
fn test_table_fill_rows_withFewerRows_shouldLeaveTrailingRowsEmpty() {
    let mut table = Table::new(3, 2, TableStyle::LightListAccent1).unwrap();
    table.fill_rows(0, &[&["Metric", "Target"], &["Uptime", ">99.5%"]]).unwrap();

    assert_eq!(table.cell(1, 1), Some(">99.5%"));
    assert!(!table.is_row_empty(1));
    assert!(table.is_row_empty(2));
    assert_eq!(table.cell(3, 0), None);
}

/// Test that table_after stops at the next heading
#[test]
fn test_table_after_withHeadingBetween_shouldReturnNone() {
    let mut doc = Document::new();
    doc.add_heading("First", 2).unwrap();
    doc.add_paragraph("no table here");
    doc.add_heading("Second", 2).unwrap();
    doc.add_table_from_rows(TableStyle::LightGridAccent1, &[&["a"]]).unwrap();

    assert!(doc.table_after("First").is_none());
    assert_eq!(doc.table_after("Second").map(|t| t.row_count()), Some(1));
    assert!(doc.table_after("Missing").is_none());
}

/// Test that add_table_with_header puts the header in row zero
#[test]
fn test_add_table_with_header_withRows_shouldAddOneRow() {
    let mut doc = Document::new();
    doc.add_table_with_header(TableStyle::MediumGrid1Accent1, &["Field", "Type"], &[&["id", "UUID"]])
        .unwrap();

    let table = doc.tables()[0];
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.cell(0, 0), Some("Field"));
    assert_eq!(table.cell(1, 1), Some("UUID"));
}

/// Test that the outline serializes as JSON
#[test]
fn test_outline_withHeadings_shouldSerializeLevelsAndText() {
    let mut doc = Document::new();
    doc.add_heading("SECURITY", 1).unwrap();
    doc.add_heading("Authentication", 2).unwrap();
    doc.add_page_break();

    let json = serde_json::to_value(doc.outline()).unwrap();
    assert_eq!(json[0]["level"], 1);
    assert_eq!(json[1]["text"], "Authentication");
    assert!(matches!(doc.blocks.last(), Some(Block::PageBreak)));
}
