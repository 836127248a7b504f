/*!
 * Core document model types.
 *
 * A `Document` is an ordered list of blocks that section routines append to.
 * Nothing is written to disk here: `docx_writer` turns the finished
 * model into a .docx container.
 */

use serde::{Deserialize, Serialize};

use crate::document::styles::{PageSetup, Rgb, StyleSheet};
use crate::errors::DocumentError;

/// Horizontal paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Paragraph styles used by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParagraphStyle {
    #[default]
    Normal,
    ListBullet,
    NoSpacing,
}

impl ParagraphStyle {
    /// Style id inside the .docx container
    pub fn style_id(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::ListBullet => "ListBullet",
            Self::NoSpacing => "NoSpacing",
        }
    }

    /// Name shown in Word's style gallery
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::ListBullet => "List Bullet",
            Self::NoSpacing => "No Spacing",
        }
    }
}

/// Built-in Word table styles referenced by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableStyle {
    LightGridAccent1,
    LightListAccent1,
    MediumGrid1Accent1,
}

impl TableStyle {
    pub const ALL: [TableStyle; 3] = [
        Self::LightGridAccent1,
        Self::LightListAccent1,
        Self::MediumGrid1Accent1,
    ];

    pub fn style_id(&self) -> &'static str {
        match self {
            Self::LightGridAccent1 => "LightGrid-Accent1",
            Self::LightListAccent1 => "LightList-Accent1",
            Self::MediumGrid1Accent1 => "MediumGrid1-Accent1",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::LightGridAccent1 => "Light Grid Accent 1",
            Self::LightListAccent1 => "Light List Accent 1",
            Self::MediumGrid1Accent1 => "Medium Grid 1 Accent 1",
        }
    }
}

/// A run of text sharing one set of character formatting.
///
/// A `\n` inside `text` becomes a line break within the paragraph.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_pt: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn size(mut self, points: u32) -> Self {
        self.size_pt = Some(points);
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }
}

/// A paragraph: formatted runs plus paragraph-level layout
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    pub runs: Vec<TextRun>,
    #[serde(default)]
    pub style: ParagraphStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    /// Left indent in inches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_indent: Option<f32>,
    /// Line spacing as a multiple of single spacing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_spacing: Option<f32>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paragraph holding a single unformatted run
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::new().run(TextRun::new(text))
    }

    pub fn run(mut self, run: TextRun) -> Self {
        self.runs.push(run);
        self
    }

    pub fn style(mut self, style: ParagraphStyle) -> Self {
        self.style = style;
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn indent(mut self, inches: f32) -> Self {
        self.left_indent = Some(inches);
        self
    }

    pub fn spacing(mut self, multiple: f32) -> Self {
        self.line_spacing = Some(multiple);
        self
    }

    /// Concatenated text of all runs
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// A Heading 1..3 block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub level: u8,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

/// A fixed-size grid of text cells.
///
/// Tables are created empty with their final shape and filled cell by cell;
/// cells never written stay empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub style: TableStyle,
    cells: Vec<Vec<String>>,
    cols: usize,
}

impl Table {
    pub fn new(rows: usize, cols: usize, style: TableStyle) -> Result<Self, DocumentError> {
        if rows == 0 || cols == 0 {
            return Err(DocumentError::EmptyTable);
        }
        Ok(Self {
            style,
            cells: vec![vec![String::new(); cols]; rows],
            cols,
        })
    }

    /// Table sized exactly to `rows`, the first row being the header
    pub fn from_rows(style: TableStyle, rows: &[&[&str]]) -> Result<Self, DocumentError> {
        let cols = rows.first().map_or(0, |r| r.len());
        let mut table = Self::new(rows.len(), cols, style)?;
        table.fill_rows(0, rows)?;
        Ok(table)
    }

    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    pub fn col_count(&self) -> usize {
        self.cols
    }

    pub fn set_cell(&mut self, row: usize, col: usize, text: impl Into<String>) -> Result<(), DocumentError> {
        let (rows, cols) = (self.row_count(), self.cols);
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(DocumentError::CellOutOfRange { row, col, rows, cols })?;
        *cell = text.into();
        Ok(())
    }

    /// Write `rows` into consecutive rows starting at `first_row`
    pub fn fill_rows(&mut self, first_row: usize, rows: &[&[&str]]) -> Result<(), DocumentError> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != self.cols {
                return Err(DocumentError::RaggedRow {
                    row: first_row + i,
                    expected: self.cols,
                    found: row.len(),
                });
            }
            for (col, text) in row.iter().enumerate() {
                self.set_cell(first_row + i, col, *text)?;
            }
        }
        Ok(())
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row).and_then(|r| r.get(col)).map(String::as_str)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.cells.iter().map(Vec::as_slice)
    }

    pub fn is_row_empty(&self, row: usize) -> bool {
        self.cells
            .get(row)
            .is_some_and(|r| r.iter().all(String::is_empty))
    }
}

/// Top-level document content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading(Heading),
    Paragraph(Paragraph),
    Table(Table),
    PageBreak,
}

/// One entry of the heading outline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlineEntry {
    pub level: u8,
    pub text: String,
}

/// The document being assembled.
///
/// Section routines only append; the block order is the reading order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
    pub styles: StyleSheet,
    pub page: PageSetup,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank document with the given style sheet and margins
    pub fn with_setup(styles: StyleSheet, page: PageSetup) -> Self {
        Self {
            blocks: Vec::new(),
            styles,
            page,
        }
    }

    pub fn add_heading(&mut self, text: &str, level: u8) -> Result<(), DocumentError> {
        self.push_heading(text, level, None)
    }

    pub fn add_heading_aligned(&mut self, text: &str, level: u8, alignment: Alignment) -> Result<(), DocumentError> {
        self.push_heading(text, level, Some(alignment))
    }

    fn push_heading(&mut self, text: &str, level: u8, alignment: Option<Alignment>) -> Result<(), DocumentError> {
        if !(1..=3).contains(&level) {
            return Err(DocumentError::InvalidHeadingLevel(level));
        }
        self.blocks.push(Block::Heading(Heading {
            level,
            text: text.to_string(),
            alignment,
        }));
        Ok(())
    }

    pub fn add_paragraph(&mut self, text: &str) {
        self.push_paragraph(Paragraph::with_text(text));
    }

    pub fn push_paragraph(&mut self, paragraph: Paragraph) {
        self.blocks.push(Block::Paragraph(paragraph));
    }

    /// Paragraph with one bold run, used for captions and diagram placeholders
    pub fn add_bold_line(&mut self, text: &str) {
        self.push_paragraph(Paragraph::new().run(TextRun::new(text).bold()));
    }

    pub fn add_bullet(&mut self, text: &str) {
        self.push_paragraph(Paragraph::with_text(text).style(ParagraphStyle::ListBullet));
    }

    pub fn add_bullets(&mut self, items: &[&str]) {
        for item in items {
            self.add_bullet(item);
        }
    }

    pub fn add_bullets_spaced(&mut self, items: &[&str], line_spacing: f32) {
        for item in items {
            self.push_paragraph(
                Paragraph::with_text(*item)
                    .style(ParagraphStyle::ListBullet)
                    .spacing(line_spacing),
            );
        }
    }

    pub fn add_bullets_indented(&mut self, items: &[&str], left_indent: f32) {
        for item in items {
            self.push_paragraph(
                Paragraph::with_text(*item)
                    .style(ParagraphStyle::ListBullet)
                    .indent(left_indent),
            );
        }
    }

    /// `label: text` with the label (and its colon) in bold
    pub fn add_labeled(&mut self, label: &str, text: &str) {
        self.push_paragraph(labeled(label, text));
    }

    pub fn add_labeled_list(&mut self, pairs: &[(&str, &str)]) {
        for (label, text) in pairs {
            self.add_labeled(label, text);
        }
    }

    pub fn add_labeled_list_spaced(&mut self, pairs: &[(&str, &str)], line_spacing: f32) {
        for (label, text) in pairs {
            self.push_paragraph(labeled(label, text).spacing(line_spacing));
        }
    }

    /// Plain paragraphs numbered from 1
    pub fn add_numbered(&mut self, steps: &[&str]) {
        for (i, step) in steps.iter().enumerate() {
            self.add_paragraph(&format!("{}. {}", i + 1, step));
        }
    }

    /// Literal multi-line text in the No Spacing style
    pub fn add_code_block(&mut self, text: &str) {
        self.push_paragraph(Paragraph::with_text(text).style(ParagraphStyle::NoSpacing));
    }

    pub fn push_table(&mut self, table: Table) {
        self.blocks.push(Block::Table(table));
    }

    /// Append an empty `rows` x `cols` grid and hand it back for filling
    pub fn add_table(&mut self, rows: usize, cols: usize, style: TableStyle) -> Result<&mut Table, DocumentError> {
        self.push_table(Table::new(rows, cols, style)?);
        match self.blocks.last_mut() {
            Some(Block::Table(table)) => Ok(table),
            _ => unreachable!("a table was just pushed"),
        }
    }

    pub fn add_table_from_rows(&mut self, style: TableStyle, rows: &[&[&str]]) -> Result<(), DocumentError> {
        let table = Table::from_rows(style, rows)?;
        self.push_table(table);
        Ok(())
    }

    /// Header row followed by `rows`; the table has `rows.len() + 1` rows
    pub fn add_table_with_header(
        &mut self,
        style: TableStyle,
        header: &[&str],
        rows: &[&[&str]],
    ) -> Result<(), DocumentError> {
        let mut table = Table::new(rows.len() + 1, header.len(), style)?;
        table.fill_rows(0, &[header])?;
        table.fill_rows(1, rows)?;
        self.push_table(table);
        Ok(())
    }

    pub fn add_page_break(&mut self) {
        self.blocks.push(Block::PageBreak);
    }

    pub fn headings(&self) -> impl Iterator<Item = &Heading> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Heading(h) => Some(h),
            _ => None,
        })
    }

    pub fn headings_at(&self, level: u8) -> Vec<&Heading> {
        self.headings().filter(|h| h.level == level).collect()
    }

    pub fn tables(&self) -> Vec<&Table> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Table(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Paragraph(p) => Some(p),
            _ => None,
        })
    }

    pub fn bullet_count(&self) -> usize {
        self.paragraphs()
            .filter(|p| p.style == ParagraphStyle::ListBullet)
            .count()
    }

    pub fn page_breaks(&self) -> usize {
        self.blocks.iter().filter(|b| matches!(b, Block::PageBreak)).count()
    }

    /// Table that immediately follows the given heading, if any
    pub fn table_after(&self, heading: &str) -> Option<&Table> {
        let start = self
            .blocks
            .iter()
            .position(|b| matches!(b, Block::Heading(h) if h.text == heading))?;
        for block in &self.blocks[start + 1..] {
            match block {
                Block::Table(t) => return Some(t),
                Block::Heading(_) => return None,
                _ => {}
            }
        }
        None
    }

    pub fn outline(&self) -> Vec<OutlineEntry> {
        self.headings()
            .map(|h| OutlineEntry {
                level: h.level,
                text: h.text.clone(),
            })
            .collect()
    }
}

fn labeled(label: &str, text: &str) -> Paragraph {
    Paragraph::new()
        .run(TextRun::new(format!("{}: ", label)).bold())
        .run(TextRun::new(text))
}
