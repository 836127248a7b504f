/*!
 * Tests for rendering the document model to .docx
 */

use anyhow::Result;
use docx_rs::DocumentChild;
use vibelink_docgen::document::{Document, PageSetup, StyleSheet, TableStyle};
use vibelink_docgen::docx_writer;
use crate::common;

fn small_document() -> Document {
    let mut doc = Document::with_setup(StyleSheet::default(), PageSetup::uniform(0.75));
    doc.add_heading("SECURITY", 1).unwrap();
    doc.add_labeled("Role", "Admin");
    doc.add_bullets(&["one", "two"]);
    doc.add_code_block("line one\nline two");
    doc.add_table_from_rows(TableStyle::MediumGrid1Accent1, &[&["Role", "Permissions"], &["Guest", "View"]])
        .unwrap();
    doc.add_page_break();
    doc
}

/// Test that rendering produces a ZIP container
#[test]
fn test_render_to_bytes_withSmallDocument_shouldStartWithZipSignature() -> Result<()> {
    let bytes = docx_writer::render_to_bytes(&small_document())?;
    assert_eq!(&bytes[..4], b"PK\x03\x04");
    Ok(())
}

/// Test that the rendered container reads back with its table
#[test]
fn test_render_to_bytes_withSmallDocument_shouldReadBack() -> Result<()> {
    let bytes = docx_writer::render_to_bytes(&small_document())?;
    let docx = docx_rs::read_docx(&bytes)?;

    let tables = docx
        .document
        .children
        .iter()
        .filter(|c| matches!(c, DocumentChild::Table(_)))
        .count();
    assert_eq!(tables, 1);
    Ok(())
}

/// Test that an empty document still renders
#[test]
fn test_render_to_bytes_withEmptyDocument_shouldSucceed() {
    assert!(docx_writer::render_to_bytes(&Document::new()).is_ok());
}

/// Test that write_docx creates the file on disk
#[test]
fn test_write_docx_withTempPath_shouldCreateFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("small.docx");

    docx_writer::write_docx(&small_document(), &path)?;

    let bytes = std::fs::read(&path)?;
    assert_eq!(&bytes[..2], b"PK");
    Ok(())
}

/// Test that writing into a missing directory surfaces an I/O error
#[test]
fn test_write_docx_withMissingDirectory_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("missing").join("small.docx");

    assert!(docx_writer::write_docx(&small_document(), &path).is_err());
    Ok(())
}

// Slice of styles.xml holding one style definition
fn style_xml<'a>(styles: &'a str, style_id: &str) -> &'a str {
    let marker = format!("w:styleId=\"{}\"", style_id);
    let start = styles.find(&marker).unwrap_or_else(|| panic!("style {} not found", style_id));
    let end = styles[start..].find("</w:style>").map_or(styles.len(), |i| start + i);
    &styles[start..end]
}

/// Test that page size, margins and table grids agree on a Letter page
#[test]
fn test_to_docx_withDefaultPage_shouldWriteLetterGeometry() -> Result<()> {
    let xml = docx_writer::to_docx(&small_document()).build();
    let document = String::from_utf8(xml.document)?;

    assert!(document.contains("w:w=\"12240\""));
    assert!(document.contains("w:h=\"15840\""));
    assert!(!document.contains("w:w=\"11906\""));
    for side in ["top", "bottom", "left", "right"] {
        assert!(document.contains(&format!("w:{}=\"1080\"", side)), "missing {} margin", side);
    }

    // 8.5in page minus two 0.75in margins, split over two columns
    assert_eq!(document.matches("<w:gridCol w:w=\"5040\"").count(), 2);
    Ok(())
}

/// Test that heading styles carry the style sheet font, color and size
#[test]
fn test_to_docx_withDefaultStyles_shouldWriteHeadingStyles() -> Result<()> {
    let xml = docx_writer::to_docx(&small_document()).build();
    let styles = String::from_utf8(xml.styles)?;

    for (level, half_points) in [(1, 28), (2, 26), (3, 22)] {
        let heading = style_xml(&styles, &format!("Heading{}", level));
        assert!(heading.contains(&format!("Heading {}", level)));
        assert!(heading.contains("w:ascii=\"Cambria\""));
        assert!(heading.contains("w:val=\"1A237E\""));
        assert!(heading.contains(&format!("w:val=\"{}\"", half_points)));
    }

    assert_eq!(styles.matches("w:styleId=\"Normal\"").count(), 1);
    assert!(style_xml(&styles, "ListBullet").contains("List Bullet"));
    assert!(style_xml(&styles, "MediumGrid1-Accent1").contains("Medium Grid 1 Accent 1"));
    Ok(())
}

/// Test that bullets reference the bullet numbering and newlines become breaks
#[test]
fn test_to_docx_withBulletsAndCode_shouldWriteNumberingAndBreaks() -> Result<()> {
    let xml = docx_writer::to_docx(&small_document()).build();
    let document = String::from_utf8(xml.document)?;
    let numbering = String::from_utf8(xml.numberings)?;

    assert_eq!(document.matches("<w:numId w:val=\"1\"").count(), 2);
    assert!(numbering.contains("w:val=\"bullet\""));
    assert!(numbering.contains("•"));

    assert!(document.contains("line one"));
    assert!(document.contains("line two"));
    assert_eq!(document.matches("w:type=\"textWrapping\"").count(), 1);
    assert_eq!(document.matches("w:type=\"page\"").count(), 1);

    assert!(document.contains("<w:tblStyle w:val=\"MediumGrid1-Accent1\""));
    assert!(document.contains("<w:tblBorders>"));
    Ok(())
}

/// Test that a custom page size reaches the section properties
#[test]
fn test_to_docx_withA4Page_shouldWriteA4Size() -> Result<()> {
    let page = PageSetup {
        page_width: 8.27,
        page_height: 11.69,
        ..PageSetup::uniform(1.0)
    };
    let mut doc = Document::with_setup(StyleSheet::default(), page);
    doc.add_table_from_rows(TableStyle::LightGridAccent1, &[&["a"]])?;

    let document = String::from_utf8(docx_writer::to_docx(&doc).build().document)?;
    assert!(document.contains("w:w=\"11909\""));
    assert!(document.contains("w:h=\"16834\""));
    assert!(document.contains("<w:gridCol w:w=\"9029\""));
    Ok(())
}
