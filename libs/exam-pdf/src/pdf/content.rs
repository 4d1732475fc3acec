//! PDF Content Stream Generation
//!
//! Builder for page content streams. Only the operators the layout engine
//! needs are provided:
//!
//! - BT/ET, Tf, Td, Tj: text objects
//! - m, l, S, w: stroked lines
//! - G: stroke gray level
//! - q/Q: graphics state save/restore

use super::objects::{format_real, write_literal_string};

/// Content stream builder
#[derive(Debug, Default, Clone)]
pub struct ContentStream {
    data: Vec<u8>,
}

impl ContentStream {
    /// Create a new empty content stream
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the content stream data
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Save the current graphics state (q)
    pub fn save_state(&mut self) -> &mut Self {
        self.write_line("q");
        self
    }

    /// Restore the graphics state (Q)
    pub fn restore_state(&mut self) -> &mut Self {
        self.write_line("Q");
        self
    }

    /// Set the line width (w)
    pub fn set_line_width(&mut self, width: f64) -> &mut Self {
        self.write_line(&format!("{} w", format_real(width)));
        self
    }

    /// Set the stroke color to grayscale (G)
    pub fn set_stroke_gray(&mut self, gray: f64) -> &mut Self {
        self.write_line(&format!("{} G", format_real(gray)));
        self
    }

    /// Move to a point (m)
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.write_line(&format!("{} {} m", format_real(x), format_real(y)));
        self
    }

    /// Line to a point (l)
    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.write_line(&format!("{} {} l", format_real(x), format_real(y)));
        self
    }

    /// Stroke the current path (S)
    pub fn stroke(&mut self) -> &mut Self {
        self.write_line("S");
        self
    }

    /// Begin a text object (BT)
    pub fn begin_text(&mut self) -> &mut Self {
        self.write_line("BT");
        self
    }

    /// End a text object (ET)
    pub fn end_text(&mut self) -> &mut Self {
        self.write_line("ET");
        self
    }

    /// Set the font resource and size (Tf)
    pub fn set_font(&mut self, resource: &str, size: f64) -> &mut Self {
        self.write_line(&format!("/{} {} Tf", resource, format_real(size)));
        self
    }

    /// Move text position (Td)
    pub fn move_text(&mut self, tx: f64, ty: f64) -> &mut Self {
        self.write_line(&format!("{} {} Td", format_real(tx), format_real(ty)));
        self
    }

    /// Show an already encoded string (Tj)
    pub fn show_text(&mut self, encoded: &[u8]) -> &mut Self {
        write_literal_string(&mut self.data, encoded);
        self.write_line(" Tj");
        self
    }

    fn write_line(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
        self.data.push(b'\n');
    }
}
