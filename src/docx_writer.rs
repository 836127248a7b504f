use docx_rs::{
    AbstractNumbering, AlignmentType, BreakType, Docx, IndentLevel, Level, LevelJc, LevelText, LineSpacing,
    NumberFormat, Numbering, NumberingId, PageMargin, Run, RunFonts, SpecialIndentType, Start, Style, StyleType,
    TableCell, TableRow,
};
use log::debug;
use std::fs::File;
use std::io::Cursor;
use std::path::Path;

use crate::document::styles::inches_to_twips;
use crate::document::{
    Alignment, Block, Document, Heading, PageSetup, Paragraph, ParagraphStyle, Table, TableStyle, TextRun,
};
use crate::errors::RenderError;

// @module: Conversion of the document model into a .docx container

// Numbering definition shared by every List Bullet paragraph
const BULLET_NUMBERING_ID: usize = 1;

// Single line spacing in 240ths of a line
const SINGLE_LINE: f32 = 240.0;

/// Pack the document into an in-memory .docx container
pub fn render_to_bytes(doc: &Document) -> Result<Vec<u8>, RenderError> {
    let mut cursor = Cursor::new(Vec::new());
    to_docx(doc)
        .build()
        .pack(&mut cursor)
        .map_err(|e| RenderError::Pack(e.to_string()))?;
    Ok(cursor.into_inner())
}

/// Pack the document into a .docx file at `path`, replacing any existing file
pub fn write_docx<P: AsRef<Path>>(doc: &Document, path: P) -> Result<(), RenderError> {
    let file = File::create(path.as_ref())?;
    to_docx(doc)
        .build()
        .pack(file)
        .map_err(|e| RenderError::Pack(e.to_string()))?;
    debug!("Packed {} blocks into {:?}", doc.blocks.len(), path.as_ref());
    Ok(())
}

/// Convert the document model into a docx-rs builder, ready to `build()` or `pack`
pub fn to_docx(doc: &Document) -> Docx {
    let styles = &doc.styles;
    let body_fonts = RunFonts::new()
        .ascii(&styles.body_font)
        .hi_ansi(&styles.body_font)
        .cs(&styles.body_font);

    let mut docx = Docx::new()
        .page_size(
            inches_to_twips(doc.page.page_width) as u32,
            inches_to_twips(doc.page.page_height) as u32,
        )
        .page_margin(page_margin(&doc.page))
        .default_fonts(body_fonts)
        .default_size(styles.body_size_pt as usize * 2)
        .add_abstract_numbering(bullet_definition())
        .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID));

    for style in style_definitions(doc) {
        docx = docx.add_style(style);
    }

    let text_width = text_width_twips(&doc.page);
    for block in &doc.blocks {
        docx = match block {
            Block::Heading(heading) => docx.add_paragraph(convert_heading(heading)),
            Block::Paragraph(paragraph) => docx.add_paragraph(convert_paragraph(paragraph)),
            Block::Table(table) => docx.add_table(convert_table(table, text_width)),
            Block::PageBreak => docx.add_paragraph(docx_rs::Paragraph::new().add_run(Run::new().add_break(BreakType::Page))),
        };
    }

    docx
}

fn page_margin(page: &PageSetup) -> PageMargin {
    PageMargin::new()
        .top(inches_to_twips(page.top_margin))
        .bottom(inches_to_twips(page.bottom_margin))
        .left(inches_to_twips(page.left_margin))
        .right(inches_to_twips(page.right_margin))
}

// Table grids span exactly the text area
fn text_width_twips(page: &PageSetup) -> usize {
    inches_to_twips(page.text_width().max(1.0)) as usize
}

fn bullet_definition() -> AbstractNumbering {
    AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(
        Level::new(
            0,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new("•"),
            LevelJc::new("left"),
        )
        .indent(Some(720), Some(SpecialIndentType::Hanging(360)), None, None),
    )
}

// @returns: Paragraph, heading and table styles referenced by the body
fn style_definitions(doc: &Document) -> Vec<Style> {
    let styles = &doc.styles;
    let heading_fonts = RunFonts::new()
        .ascii(&styles.heading_font)
        .hi_ansi(&styles.heading_font)
        .cs(&styles.heading_font);

    // Normal itself is always emitted by docx-rs
    let mut defs = vec![
        Style::new(ParagraphStyle::ListBullet.style_id(), StyleType::Paragraph)
            .name(ParagraphStyle::ListBullet.display_name())
            .based_on(ParagraphStyle::Normal.style_id()),
        Style::new(ParagraphStyle::NoSpacing.style_id(), StyleType::Paragraph)
            .name(ParagraphStyle::NoSpacing.display_name())
            .based_on(ParagraphStyle::Normal.style_id()),
    ];

    for level in 1..=3u8 {
        defs.push(
            Style::new(&format!("Heading{}", level), StyleType::Paragraph)
                .name(format!("Heading {}", level))
                .based_on(ParagraphStyle::Normal.style_id())
                .next(ParagraphStyle::Normal.style_id())
                .fonts(heading_fonts.clone())
                .size(crate::document::StyleSheet::heading_size_pt(level) as usize * 2)
                .color(styles.heading_color.to_hex())
                .bold(),
        );
    }

    // Named only; cell borders come from the table's own tblBorders
    for table_style in TableStyle::ALL {
        defs.push(Style::new(table_style.style_id(), StyleType::Table).name(table_style.display_name()));
    }

    defs
}

fn convert_alignment(alignment: Alignment) -> AlignmentType {
    match alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
        Alignment::Right => AlignmentType::Right,
    }
}

fn convert_heading(heading: &Heading) -> docx_rs::Paragraph {
    let mut para = docx_rs::Paragraph::new()
        .style(&format!("Heading{}", heading.level))
        .add_run(Run::new().add_text(heading.text.as_str()));
    if let Some(alignment) = heading.alignment {
        para = para.align(convert_alignment(alignment));
    }
    para
}

fn convert_paragraph(paragraph: &Paragraph) -> docx_rs::Paragraph {
    let mut para = docx_rs::Paragraph::new().style(paragraph.style.style_id());
    for run in &paragraph.runs {
        para = para.add_run(convert_run(run));
    }

    if paragraph.style == ParagraphStyle::ListBullet {
        para = para.numbering(NumberingId::new(BULLET_NUMBERING_ID), IndentLevel::new(0));
    }
    if let Some(alignment) = paragraph.alignment {
        para = para.align(convert_alignment(alignment));
    }
    if let Some(inches) = paragraph.left_indent {
        para = para.indent(Some(inches_to_twips(inches)), None, None, None);
    }

    let spacing = match (paragraph.style, paragraph.line_spacing) {
        (ParagraphStyle::NoSpacing, multiple) => Some(
            LineSpacing::new()
                .before(0)
                .after(0)
                .line(line_units(multiple.unwrap_or(1.0))),
        ),
        (_, Some(multiple)) => Some(LineSpacing::new().line(line_units(multiple))),
        (_, None) => None,
    };
    if let Some(spacing) = spacing {
        para = para.line_spacing(spacing);
    }

    para
}

fn line_units(multiple: f32) -> i32 {
    (multiple * SINGLE_LINE).round() as i32
}

// Embedded newlines become line breaks inside the same run
fn convert_run(text_run: &TextRun) -> Run {
    let mut run = Run::new();
    for (i, line) in text_run.text.split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        if !line.is_empty() {
            run = run.add_text(line);
        }
    }

    if text_run.bold {
        run = run.bold();
    }
    if text_run.italic {
        run = run.italic();
    }
    if let Some(points) = text_run.size_pt {
        run = run.size(points as usize * 2);
    }
    if let Some(color) = text_run.color {
        run = run.color(color.to_hex());
    }
    run
}

fn convert_table(table: &Table, text_width: usize) -> docx_rs::Table {
    let col_width = text_width / table.col_count().max(1);
    let rows = table
        .rows()
        .map(|cells| {
            TableRow::new(
                cells
                    .iter()
                    .map(|text| {
                        let mut para = docx_rs::Paragraph::new();
                        if !text.is_empty() {
                            para = para.add_run(Run::new().add_text(text.as_str()));
                        }
                        TableCell::new().add_paragraph(para)
                    })
                    .collect(),
            )
        })
        .collect();

    docx_rs::Table::new(rows)
        .style(table.style.style_id())
        .set_grid(vec![col_width; table.col_count()])
}
