/*!
 * Tests for the section routines and the assembled document structure
 */

use vibelink_docgen::app_config::{Config, CoverInfo};
use vibelink_docgen::document::{Alignment, Block, Document, TableStyle};
use vibelink_docgen::sections::{self, SECTIONS, SectionContext};

const CHAPTERS: [&str; 14] = [
    "TABLE OF CONTENTS",
    "EXECUTIVE SUMMARY",
    "PROJECT OVERVIEW",
    "TECHNICAL ARCHITECTURE",
    "DEVELOPMENT WORKFLOW",
    "FEATURES & SPECIFICATIONS",
    "USER INTERFACE",
    "DATABASE SCHEMA",
    "API & INTEGRATIONS",
    "DEPLOYMENT & INFRASTRUCTURE",
    "SECURITY",
    "MAINTENANCE & SUPPORT",
    "FUTURE ENHANCEMENTS",
    "APPENDICES",
];

fn build_with(cover: &CoverInfo) -> Document {
    let mut doc = Document::new();
    let ctx = SectionContext { cover };
    sections::build_all(&mut doc, &ctx).unwrap();
    doc
}

fn build_default() -> Document {
    build_with(&Config::default().cover)
}

/// Test that the section registry runs in reading order
#[test]
fn test_sections_registry_withDefaultOrder_shouldStartWithCoverAndEndWithAppendices() {
    assert_eq!(SECTIONS.len(), 15);
    assert_eq!(SECTIONS[0].name, "cover page");
    assert_eq!(SECTIONS[1].name, "table of contents");
    assert_eq!(SECTIONS[14].name, "appendices");
}

/// Test that the level-1 headings appear in the fixed order
#[test]
fn test_build_all_withDefaultCover_shouldProduceChaptersInOrder() {
    let doc = build_default();
    let chapters: Vec<&str> = doc.headings_at(1).iter().map(|h| h.text.as_str()).collect();
    assert_eq!(chapters, CHAPTERS);
}

/// Test that the contents heading is centered
#[test]
fn test_build_all_withDefaultCover_shouldCenterContentsHeading() {
    let doc = build_default();
    let contents = doc.headings().find(|h| h.text == "TABLE OF CONTENTS").unwrap();
    assert_eq!(contents.alignment, Some(Alignment::Center));
}

/// Test the total table count
#[test]
fn test_build_all_withDefaultCover_shouldProduceSeventeenTables() {
    let doc = build_default();
    assert_eq!(doc.tables().len(), 17);
}

/// Test the shape of every table against its heading
#[test]
fn test_build_all_withDefaultCover_shouldSizeTablesExactly() {
    let doc = build_default();
    let expected: [(&str, usize, usize); 17] = [
        ("Website Access", 3, 2),
        ("Frontend Technologies", 9, 3),
        ("Backend Technologies", 7, 2),
        ("Third-Party Integrations", 5, 2),
        ("Deployment Architecture", 4, 3),
        ("Integration Points", 6, 3),
        ("Color Palette", 7, 3),
        ("Typography", 4, 3),
        ("orders", 13, 3),
        ("customers", 11, 3),
        ("payments", 10, 3),
        ("Domain Configuration", 5, 4),
        ("Key Metrics to Monitor", 9, 3),
        ("User Roles", 4, 2),
        ("Common Issues and Solutions", 9, 2),
        ("Maintenance Schedule", 6, 2),
        ("Appendix C: Environment Variables", 11, 4),
    ];

    for (heading, rows, cols) in expected {
        let table = doc
            .table_after(heading)
            .unwrap_or_else(|| panic!("no table after heading {:?}", heading));
        assert_eq!((table.row_count(), table.col_count()), (rows, cols), "table after {:?}", heading);
    }
}

/// Test that the metrics table keeps its trailing blank row
#[test]
fn test_metrics_table_withEightDataRows_shouldLeaveLastRowEmpty() {
    let doc = build_default();
    let metrics = doc.table_after("Key Metrics to Monitor").unwrap();

    assert_eq!(metrics.style, TableStyle::LightListAccent1);
    assert_eq!(metrics.cell(0, 2), Some("Alert Threshold"));
    assert_eq!(metrics.cell(7, 0), Some("SSL Expiry"));
    assert!(metrics.is_row_empty(8));
}

/// Test the roles table content and style
#[test]
fn test_roles_table_withDefaultCover_shouldListGuestCustomerAdmin() {
    let doc = build_default();
    let roles = doc.table_after("User Roles").unwrap();

    assert_eq!(roles.style, TableStyle::MediumGrid1Accent1);
    let names: Vec<&str> = (1..4).filter_map(|r| roles.cell(r, 0)).collect();
    assert_eq!(names, vec!["Guest", "Customer", "Admin"]);
}

/// Test the environment variable table header and last row
#[test]
fn test_env_table_withDefaultCover_shouldStartWithHeader() {
    let doc = build_default();
    let env = doc.table_after("Appendix C: Environment Variables").unwrap();

    assert_eq!(env.cell(0, 0), Some("Variable Name"));
    assert_eq!(env.cell(0, 3), Some("Visibility"));
    assert_eq!(env.cell(10, 0), Some("SMTP_PASS"));
    assert_eq!(env.cell(10, 3), Some("Secret - Server only"));
}

/// Test that every section but the last ends with a page break
#[test]
fn test_build_all_withDefaultCover_shouldBreakAfterEachSectionButLast() {
    let doc = build_default();
    assert_eq!(doc.page_breaks(), SECTIONS.len() - 1);
}

/// Test that the document closes with the centered end marker
#[test]
fn test_build_all_withDefaultCover_shouldEndWithCenteredMarker() {
    let doc = build_default();
    match doc.blocks.last() {
        Some(Block::Paragraph(p)) => {
            assert_eq!(p.text(), "--- End of Document ---");
            assert_eq!(p.alignment, Some(Alignment::Center));
        }
        other => panic!("unexpected last block: {:?}", other),
    }
}

/// Test that the cover page uses the configured metadata
#[test]
fn test_cover_withCustomMetadata_shouldRenderIt() {
    let cover = CoverInfo {
        title: "VibeLink Test".to_string(),
        version: "9.9".to_string(),
        ..CoverInfo::default()
    };
    let doc = build_with(&cover);

    let first = doc.paragraphs().next().unwrap();
    assert!(first.text().starts_with("VibeLink Test"));
    assert!(first.runs[0].bold);
    assert_eq!(first.runs[0].size_pt, Some(36));
    assert!(doc.paragraphs().any(|p| p.text().contains("9.9")));
    assert!(doc.paragraphs().any(|p| p.text().contains("January 28, 2026")));
}

/// Test that no heading is deeper than level 3
#[test]
fn test_build_all_withDefaultCover_shouldOnlyUseStyledHeadingLevels() {
    let doc = build_default();
    assert!(doc.headings().all(|h| (1..=3).contains(&h.level)));
    assert!(doc.bullet_count() > 300);
}
