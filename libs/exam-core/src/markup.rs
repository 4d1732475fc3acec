//! Parser for the markdown-like document content.
//!
//! # Format
//! ```markdown
//! # Questions
//!
//! **Question 1:** What is Rust?
//! A) A language
//! B) A metal oxide
//!
//! ---
//! # Answer Key
//! **Answer 1:** (A) A language
//! ```
//!
//! A line of exactly `---` separates pages, `# ` starts a heading and
//! `**` pairs toggle bold. Everything else is plain text. Parsing never
//! fails: unbalanced markers are kept as literal text.

const SEPARATOR: &str = "---";
const HEADING_PREFIX: &str = "# ";
const BOLD_MARKER: &str = "**";

/// A run of text with a single style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub text: &'a str,
    pub bold: bool,
}

impl<'a> Span<'a> {
    fn plain(text: &'a str) -> Self {
        Self { text, bold: false }
    }

    fn bold(text: &'a str) -> Self {
        Self { text, bold: true }
    }
}

/// One logical line of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// Explicit page break.
    Separator,
    /// Section heading, without the `# ` prefix.
    Heading(&'a str),
    /// Empty or whitespace-only line.
    Blank,
    /// Body text split into styled runs.
    Paragraph(Vec<Span<'a>>),
}

/// Parse document content into blocks, one per line.
pub fn parse(content: &str) -> Vec<Block<'_>> {
    if content.is_empty() {
        return vec![];
    }

    content.split('\n').map(parse_line).collect()
}

fn parse_line(line: &str) -> Block<'_> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    if line == SEPARATOR {
        Block::Separator
    } else if let Some(rest) = line.strip_prefix(HEADING_PREFIX) {
        Block::Heading(rest)
    } else if line.trim().is_empty() {
        Block::Blank
    } else {
        Block::Paragraph(parse_spans(line))
    }
}

/// Split a line into alternating plain and bold runs.
pub fn parse_spans(line: &str) -> Vec<Span<'_>> {
    let parts: Vec<&str> = line.split(BOLD_MARKER).collect();
    // An odd number of markers leaves the last one unmatched.
    let unmatched = parts.len() % 2 == 0;
    let last = parts.len() - 1;

    let mut spans = Vec::with_capacity(parts.len() + 1);
    for (idx, part) in parts.iter().enumerate() {
        if unmatched && idx == last {
            spans.push(Span::plain(BOLD_MARKER));
            if !part.is_empty() {
                spans.push(Span::plain(part));
            }
        } else if !part.is_empty() {
            if idx % 2 == 1 {
                spans.push(Span::bold(part));
            } else {
                spans.push(Span::plain(part));
            }
        }
    }
    spans
}
