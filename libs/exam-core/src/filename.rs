//! Filename generation, sanitization and validation for exported PDFs.

use crate::types::DocumentType;
use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest filename accepted, extension included.
pub const MAX_FILENAME_LENGTH: usize = 255;

const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

const INVALID_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Format a date as `YYYY-MM-DD_HH-MM` using its wall-clock fields.
pub fn format_timestamp<T: Datelike + Timelike>(date: &T) -> String {
    format!(
        "{:04}-{:02}-{:02}_{:02}-{:02}",
        date.year(),
        date.month(),
        date.day(),
        date.hour(),
        date.minute()
    )
}

fn type_prefix(doc_type: DocumentType) -> &'static str {
    match doc_type {
        DocumentType::Questions => "Questions",
        DocumentType::Answers => "Answers",
        DocumentType::Combined => "Questions_and_Answers",
    }
}

/// Build the download filename for a document.
///
/// A non-blank `title` replaces the type-derived prefix, with whitespace
/// runs turned into underscores.
pub fn generate_filename<T: Datelike + Timelike>(
    doc_type: DocumentType,
    title: Option<&str>,
    date: &T,
) -> String {
    let prefix = match title.map(str::trim).filter(|t| !t.is_empty()) {
        Some(title) => title.split_whitespace().collect::<Vec<_>>().join("_"),
        None => type_prefix(doc_type).to_string(),
    };

    format!("{}_{}.pdf", prefix, format_timestamp(date))
}

fn is_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')
}

/// Replace unsafe characters with `_`, collapse underscore runs and trim
/// underscores from both ends.
pub fn sanitize_filename(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        let c = if is_safe_char(c) { c } else { '_' };
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.push(c);
    }
    out.trim_matches('_').to_string()
}

/// A problem found by [`validate_filename`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FilenameIssue {
    Empty,
    InvalidCharacters(Vec<char>),
    ReservedName(String),
    TooLong(usize),
}

impl fmt::Display for FilenameIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "filename is empty"),
            Self::InvalidCharacters(chars) => {
                let list: String = chars.iter().collect();
                write!(f, "filename contains invalid characters: {}", list.escape_debug())
            }
            Self::ReservedName(name) => write!(f, "{} is a reserved system name", name),
            Self::TooLong(len) => write!(
                f,
                "filename is {} characters long (maximum {})",
                len, MAX_FILENAME_LENGTH
            ),
        }
    }
}

/// Outcome of validating a filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilenameValidation {
    pub is_valid: bool,
    pub issues: Vec<FilenameIssue>,
    /// Usable alternative, produced whether or not the input was valid.
    pub sanitized: String,
}

/// Part of the name before the first `.`.
fn stem(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}

fn reserved_name(name: &str) -> Option<&'static str> {
    let stem = stem(name).trim().to_ascii_uppercase();
    RESERVED_NAMES.iter().copied().find(|r| *r == stem)
}

/// Check a filename for characters, device names and lengths that common
/// filesystems reject.
pub fn validate_filename(name: &str) -> FilenameValidation {
    let mut issues = Vec::new();

    if name.trim().is_empty() {
        issues.push(FilenameIssue::Empty);
    }

    let mut invalid: Vec<char> = name
        .chars()
        .filter(|c| INVALID_CHARS.contains(c) || c.is_control())
        .collect();
    invalid.dedup();
    if !invalid.is_empty() {
        issues.push(FilenameIssue::InvalidCharacters(invalid));
    }

    if let Some(reserved) = reserved_name(name) {
        issues.push(FilenameIssue::ReservedName(reserved.to_string()));
    }

    let len = name.chars().count();
    if len > MAX_FILENAME_LENGTH {
        issues.push(FilenameIssue::TooLong(len));
    }

    FilenameValidation {
        is_valid: issues.is_empty(),
        issues,
        sanitized: usable_filename(name),
    }
}

/// Best-effort replacement that passes validation.
fn usable_filename(name: &str) -> String {
    let mut sanitized = sanitize_filename(name);

    if stem(&sanitized).is_empty() {
        sanitized.insert_str(0, "document");
    }

    if reserved_name(&sanitized).is_some() {
        let stem_len = stem(&sanitized).len();
        sanitized.insert_str(stem_len, "_file");
    }

    if sanitized.len() > MAX_FILENAME_LENGTH {
        // Sanitized names are ASCII, so byte offsets are char boundaries.
        let extension = match sanitized.rfind('.') {
            Some(dot) if sanitized.len() - dot <= 16 => sanitized[dot..].to_string(),
            _ => String::new(),
        };
        sanitized.truncate(MAX_FILENAME_LENGTH - extension.len());
        sanitized.push_str(&extension);
    }

    sanitized
}
