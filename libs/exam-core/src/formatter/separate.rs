//! Separate documents: a question paper and an independent answer key.
//!
//! The question paper never carries answer or explanation text, and the
//! answer key never carries stems or options.

use super::{answer_lines, push_lines, question_lines};
use crate::types::{Document, DocumentType, Question};

pub const QUESTIONS_TITLE: &str = "Questions";
pub const ANSWERS_TITLE: &str = "Answer Key";

/// Build the questions document followed by the answers document.
pub fn format(questions: &[Question]) -> Vec<Document> {
    let mut question_paper = String::new();
    let mut answer_key = String::new();

    for (idx, question) in questions.iter().enumerate() {
        let number = idx + 1;
        if idx > 0 {
            question_paper.push('\n');
            answer_key.push('\n');
        }
        push_lines(&mut question_paper, question_lines(number, question));
        push_lines(&mut answer_key, answer_lines(number, question));
    }

    vec![
        Document::new(QUESTIONS_TITLE, question_paper, DocumentType::Questions),
        Document::new(ANSWERS_TITLE, answer_key, DocumentType::Answers),
    ]
}
