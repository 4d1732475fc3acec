//! PDF rendering for exam documents.
//!
//! Provides:
//! - Layout engine (word wrap, headings, bold runs, pagination) over a
//!   pluggable drawing surface
//! - Built-in PDF 1.4 writer backend
//! - Export pipeline with classified errors and download targets

pub mod config;
pub mod error;
pub mod export;
pub mod layout;
pub mod pdf;
pub mod surface;
pub mod target;

/// Points to millimetres.
pub const PT_TO_MM: f64 = 25.4 / 72.0;
/// Millimetres to points.
pub const MM_TO_PT: f64 = 72.0 / 25.4;

pub use config::{LayoutConfig, PageSize};
pub use error::{ExportError, ExportErrorKind, Result, MAX_EXPORT_ATTEMPTS};
pub use export::{export_all, generate_pdf, render_pdf, ExportOptions, PdfFile};
pub use layout::{layout_document, LayoutSummary};
pub use pdf::{PdfCanvas, PdfError, StandardFont};
pub use surface::{FontStyle, PdfSurface, SurfaceError};
pub use target::{DirectoryTarget, DownloadTarget, MemoryTarget};
