//! Drawing surface used by the layout engine.
//!
//! The layout engine only needs to measure and place text, draw lines and
//! start pages. Any PDF backend implementing [`PdfSurface`] can be laid out
//! onto; [`crate::PdfCanvas`] is the built-in one.

use crate::config::PageSize;
use thiserror::Error;

/// Text style of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Regular,
    Bold,
}

/// Failure reported by a drawing backend.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("cannot draw at non-finite position ({x}, {y})")]
    InvalidPosition { x: f64, y: f64 },

    #[error("page limit of {0} pages exceeded")]
    PageLimit(usize),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Capabilities the layout engine needs from a PDF backend.
///
/// Coordinates are millimetres from the top-left corner of the current page;
/// `y` passed to [`PdfSurface::draw_text`] is the text baseline. Font sizes
/// are in points.
pub trait PdfSurface {
    /// Size of every page.
    fn page_size(&self) -> PageSize;

    /// Select the font used by subsequent measuring and drawing.
    fn set_font(&mut self, style: FontStyle, size: f64);

    /// Width of `text` in the current font, in millimetres.
    fn text_width(&self, text: &str) -> f64;

    fn draw_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), SurfaceError>;

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<(), SurfaceError>;

    /// Start a new page and make it current.
    fn add_page(&mut self) -> Result<(), SurfaceError>;

    fn page_count(&self) -> usize;
}
