//! Page and typography settings for PDF layout.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Page dimensions in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    /// A4 (210 x 297 mm)
    pub fn a4() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
        }
    }

    /// US Letter (8.5 x 11 inches)
    pub fn letter() -> Self {
        Self {
            width: 215.9,
            height: 279.4,
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::a4()
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a4" => Ok(Self::a4()),
            "letter" => Ok(Self::letter()),
            other => Err(format!("unknown page size: {}", other)),
        }
    }
}

/// Layout settings.
///
/// Lengths are millimetres, font sizes are points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub page_size: PageSize,
    pub margin_top: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub body_font_size: f64,
    pub heading_font_size: f64,
    pub title_font_size: f64,
    /// Line height as a multiple of the font size.
    pub line_height_factor: f64,
    /// Extra space after headings and the title.
    pub heading_spacing: f64,
    /// Draw the document title at the top of the first page.
    pub include_title: bool,
    /// Upper bound on pages per document.
    pub max_pages: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::a4(),
            margin_top: 20.0,
            margin_bottom: 20.0,
            margin_left: 20.0,
            margin_right: 20.0,
            body_font_size: 11.0,
            heading_font_size: 16.0,
            title_font_size: 18.0,
            line_height_factor: 1.4,
            heading_spacing: 4.0,
            include_title: true,
            max_pages: 2000,
        }
    }
}

impl LayoutConfig {
    /// Width available for text between the side margins.
    pub fn printable_width(&self) -> f64 {
        self.page_size.width - self.margin_left - self.margin_right
    }

    /// Height of one line of text at `font_size`, in millimetres.
    pub fn line_height(&self, font_size: f64) -> f64 {
        font_size * crate::PT_TO_MM * self.line_height_factor
    }

    /// Vertical gap for an empty line.
    pub fn paragraph_gap(&self) -> f64 {
        self.line_height(self.body_font_size) / 2.0
    }
}
