/*!
 * Style sheet and page setup applied when a document is rendered.
 *
 * Defaults reproduce the house style of the generated documentation:
 * Calibri 11pt body text, Cambria navy headings and one-inch margins.
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Primary brand navy used for titles and headings
    pub const NAVY: Rgb = Rgb(26, 35, 126);
    /// Indigo used for the cover subtitle
    pub const INDIGO: Rgb = Rgb(63, 81, 181);
    /// Link blue used for the cover website line
    pub const LINK_BLUE: Rgb = Rgb(33, 150, 243);

    /// Six uppercase hex digits without a leading `#`
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = String;

    // Accepts "1A237E" or "#1A237E"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("Invalid hex color: {}", s));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Fonts and colors for body text and headings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSheet {
    /// Font family of the Normal style
    #[serde(default = "default_body_font")]
    pub body_font: String,

    /// Point size of the Normal style
    #[serde(default = "default_body_size_pt")]
    pub body_size_pt: u32,

    /// Font family of Heading 1 to Heading 3
    #[serde(default = "default_heading_font")]
    pub heading_font: String,

    /// Color of Heading 1 to Heading 3
    #[serde(default = "default_heading_color")]
    pub heading_color: Rgb,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            body_font: default_body_font(),
            body_size_pt: default_body_size_pt(),
            heading_font: default_heading_font(),
            heading_color: default_heading_color(),
        }
    }
}

impl StyleSheet {
    /// Point size of a heading level, matching Word's built-in heading styles
    pub fn heading_size_pt(level: u8) -> u32 {
        match level {
            1 => 14,
            2 => 13,
            _ => 11,
        }
    }
}

/// Page size and margins in inches, applied to every section.
///
/// The default page is US Letter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSetup {
    #[serde(default = "default_page_width")]
    pub page_width: f32,
    #[serde(default = "default_page_height")]
    pub page_height: f32,
    #[serde(default = "default_margin")]
    pub top_margin: f32,
    #[serde(default = "default_margin")]
    pub bottom_margin: f32,
    #[serde(default = "default_margin")]
    pub left_margin: f32,
    #[serde(default = "default_margin")]
    pub right_margin: f32,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::uniform(default_margin())
    }
}

impl PageSetup {
    /// Same margin on all four sides
    pub fn uniform(inches: f32) -> Self {
        Self {
            page_width: default_page_width(),
            page_height: default_page_height(),
            top_margin: inches,
            bottom_margin: inches,
            left_margin: inches,
            right_margin: inches,
        }
    }

    pub fn margins(&self) -> [f32; 4] {
        [self.top_margin, self.bottom_margin, self.left_margin, self.right_margin]
    }

    /// Width between the left and right margins
    pub fn text_width(&self) -> f32 {
        self.page_width - self.left_margin - self.right_margin
    }

    /// Height between the top and bottom margins
    pub fn text_height(&self) -> f32 {
        self.page_height - self.top_margin - self.bottom_margin
    }
}

/// Inches to twentieths of a point
pub fn inches_to_twips(inches: f32) -> i32 {
    (inches * 1440.0).round() as i32
}

fn default_body_font() -> String {
    "Calibri".to_string()
}

fn default_body_size_pt() -> u32 {
    11
}

fn default_heading_font() -> String {
    "Cambria".to_string()
}

fn default_heading_color() -> Rgb {
    Rgb::NAVY
}

fn default_page_width() -> f32 {
    8.5
}

fn default_page_height() -> f32 {
    11.0
}

fn default_margin() -> f32 {
    1.0
}
