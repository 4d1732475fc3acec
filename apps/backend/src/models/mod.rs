//! API request types

use serde::{Deserialize, Serialize};

// Re-export shared types from exam-core
pub use exam_core::{
    Document, DocumentType, FilenameValidation, FormattedOutput, OutputFormat, Question,
};

/// Request for POST /api/export/format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatRequest {
    /// Wire name of the output format, e.g. `solved-examples`
    pub format: String,
    pub questions: Vec<Question>,
}

/// Request for POST /api/export/pdf
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfRequest {
    pub document: Document,
    /// Custom title used for the download filename
    #[serde(default)]
    pub title: Option<String>,
}

/// Request for POST /api/filename/validate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateFilenameRequest {
    pub name: String,
}
