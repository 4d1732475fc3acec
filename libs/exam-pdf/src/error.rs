//! Classified export errors.

use crate::pdf::PdfError;
use crate::surface::SurfaceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Attempts a caller may make for a retryable failure.
pub const MAX_EXPORT_ATTEMPTS: u32 = 3;

/// Error kinds reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExportErrorKind {
    GenerationFailed,
    DownloadFailed,
    BrowserUnsupported,
}

impl ExportErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportErrorKind::GenerationFailed => "GENERATION_FAILED",
            ExportErrorKind::DownloadFailed => "DOWNLOAD_FAILED",
            ExportErrorKind::BrowserUnsupported => "BROWSER_UNSUPPORTED",
        }
    }
}

impl fmt::Display for ExportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error from rendering or delivering a PDF.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExportError {
    /// Layout or PDF generation failed.
    #[error("PDF generation failed: {0}")]
    GenerationFailed(String),

    /// The PDF was generated but could not be delivered.
    #[error("PDF download failed: {0}")]
    DownloadFailed(String),

    /// The environment lacks a capability needed to export.
    #[error("PDF export is not supported here: {0}")]
    BrowserUnsupported(String),
}

pub type Result<T> = std::result::Result<T, ExportError>;

impl ExportError {
    pub fn kind(&self) -> ExportErrorKind {
        match self {
            ExportError::GenerationFailed(_) => ExportErrorKind::GenerationFailed,
            ExportError::DownloadFailed(_) => ExportErrorKind::DownloadFailed,
            ExportError::BrowserUnsupported(_) => ExportErrorKind::BrowserUnsupported,
        }
    }

    /// Whether trying the same export again can succeed.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, ExportError::BrowserUnsupported(_))
    }

    /// Guidance after `attempt` failed attempts (1-based), or `None` when no
    /// retry should be offered.
    pub fn retry_guidance(&self, attempt: u32) -> Option<&'static str> {
        if !self.is_retryable() || attempt == 0 || attempt >= MAX_EXPORT_ATTEMPTS {
            return None;
        }
        Some(match (self.kind(), attempt) {
            (ExportErrorKind::DownloadFailed, 1) => {
                "The PDF could not be saved. Check that downloads are allowed and try again."
            }
            (_, 1) => "The PDF could not be generated. Please try again.",
            _ => "Export failed again. Try a shorter document or reload the page before retrying.",
        })
    }
}

impl From<SurfaceError> for ExportError {
    fn from(err: SurfaceError) -> Self {
        ExportError::GenerationFailed(err.to_string())
    }
}

impl From<PdfError> for ExportError {
    fn from(err: PdfError) -> Self {
        ExportError::GenerationFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_and_retryability() {
        let generation = ExportError::GenerationFailed("bad".into());
        let download = ExportError::DownloadFailed("blocked".into());
        let unsupported = ExportError::BrowserUnsupported("no fs".into());

        assert_eq!(generation.kind(), ExportErrorKind::GenerationFailed);
        assert_eq!(download.kind().to_string(), "DOWNLOAD_FAILED");
        assert!(generation.is_retryable());
        assert!(download.is_retryable());
        assert!(!unsupported.is_retryable());
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&ExportErrorKind::BrowserUnsupported).unwrap();
        assert_eq!(json, "\"BROWSER_UNSUPPORTED\"");
    }

    #[test]
    fn test_retry_guidance_escalates() {
        let err = ExportError::GenerationFailed("boom".into());
        let first = err.retry_guidance(1).unwrap();
        let second = err.retry_guidance(2).unwrap();
        assert_ne!(first, second);
        assert_eq!(err.retry_guidance(MAX_EXPORT_ATTEMPTS), None);

        let unsupported = ExportError::BrowserUnsupported("none".into());
        assert_eq!(unsupported.retry_guidance(1), None);
    }

    #[test]
    fn test_conversions() {
        let err: ExportError = SurfaceError::PageLimit(10).into();
        assert_eq!(err.kind(), ExportErrorKind::GenerationFailed);

        let err: ExportError = PdfError::InvalidDocument("xref".into()).into();
        assert!(err.to_string().contains("xref"));
    }
}
