//! Solved examples: each answer directly follows its question.

use super::{answer_lines, push_lines, question_lines};
use crate::types::{Document, DocumentType, Question};

pub const TITLE: &str = "Solved Examples";

/// Build a single combined document with interleaved answers.
pub fn format(questions: &[Question]) -> Vec<Document> {
    let mut content = String::new();

    for (idx, question) in questions.iter().enumerate() {
        let number = idx + 1;
        if idx > 0 {
            content.push('\n');
        }
        push_lines(&mut content, question_lines(number, question));
        content.push('\n');
        push_lines(&mut content, answer_lines(number, question));
    }

    vec![Document::new(TITLE, content, DocumentType::Combined)]
}
