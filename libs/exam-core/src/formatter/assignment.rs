//! Assignment format: all questions first, then an answer key.
//!
//! The two sections are split by a `---` line so the answer key always
//! starts on a fresh page.

use super::{answer_lines, push_lines, question_lines};
use crate::types::{Document, DocumentType, Question};

pub const TITLE: &str = "Assignment with Answer Key";
pub const QUESTIONS_HEADER: &str = "# Questions";
pub const ANSWER_KEY_HEADER: &str = "# Answer Key";

/// Build a single combined document with an answer key appendix.
pub fn format(questions: &[Question]) -> Vec<Document> {
    let mut content = String::new();

    content.push_str(QUESTIONS_HEADER);
    content.push('\n');
    for (idx, question) in questions.iter().enumerate() {
        content.push('\n');
        push_lines(&mut content, question_lines(idx + 1, question));
    }

    content.push_str("\n---\n");

    content.push_str(ANSWER_KEY_HEADER);
    content.push('\n');
    for (idx, question) in questions.iter().enumerate() {
        content.push('\n');
        push_lines(&mut content, answer_lines(idx + 1, question));
    }

    vec![Document::new(TITLE, content, DocumentType::Combined)]
}
