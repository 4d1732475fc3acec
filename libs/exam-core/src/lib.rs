//! Core exam export library shared by the PDF renderer and the backend.
//!
//! Provides:
//! - Question and document types (Question, Document, FormattedOutput, etc.)
//! - Formatter strategies for the three output formats
//! - Parser for the markdown-like document content
//! - Filename generation, sanitization and validation
//! - Answer/option matching

pub mod error;
pub mod filename;
pub mod formatter;
pub mod markup;
pub mod matching;
pub mod types;

pub use error::{CoreError, Result};
pub use filename::{
    format_timestamp, generate_filename, sanitize_filename, validate_filename, FilenameIssue,
    FilenameValidation,
};
pub use formatter::format;
pub use markup::{parse, parse_spans, Block, Span};
pub use matching::{correct_option_index, is_correct_option};
pub use types::{Difficulty, Document, DocumentType, FormattedOutput, OutputFormat, Question};
