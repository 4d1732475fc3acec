//! Built-in PDF backend.
//!
//! Writes PDF 1.4 files directly, without an external PDF library.
//!
//! # Architecture
//!
//! - `objects`: PDF object model (Dictionary, Array, Reference) and serialization
//! - `content`: Content stream generation (text and line operators)
//! - `fonts`: Standard Type1 fonts, glyph widths and WinAnsi encoding
//! - `writer`: File structure (header, body, xref, trailer) and compression
//! - `canvas`: [`PdfCanvas`], the drawing surface used by the layout engine

mod canvas;
mod content;
mod fonts;
mod objects;
mod writer;

pub use canvas::PdfCanvas;
pub use fonts::StandardFont;
pub use writer::PdfError;
