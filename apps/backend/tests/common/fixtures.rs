//! Test fixtures and factory functions for request bodies.

use serde_json::{json, Value};

/// One multiple-choice question with an explanation and one free-response
/// question without. The first uses the capitalized difficulty name.
pub fn mixed_questions() -> Value {
    json!([
        {
            "id": "q1",
            "stem": "Which planet is largest?",
            "options": ["Mercury", "Jupiter", "Mars", "Venus"],
            "answer": "Jupiter",
            "explanation": "Its mass exceeds all other planets combined.",
            "difficulty": "Beginner",
            "subject": "Astronomy"
        },
        {
            "id": "q2",
            "stem": "Describe photosynthesis.",
            "answer": "Light becomes chemical energy.",
            "difficulty": "amateur",
            "subject": "Biology"
        }
    ])
}

/// Create a format request body.
pub fn format_request(format: &str) -> Value {
    json!({ "format": format, "questions": mixed_questions() })
}

/// Create a PDF export request body.
pub fn pdf_request(content: &str, doc_type: &str, title: Option<&str>) -> Value {
    let document = json!({
        "title": "Solved Examples",
        "content": content,
        "type": doc_type,
    });
    match title {
        Some(t) => json!({ "document": document, "title": t }),
        None => json!({ "document": document }),
    }
}

/// Sample content with one page break.
pub fn two_page_content() -> String {
    "# Questions\n\n**Question 1:** Which planet is largest?\nA) Mercury\nB) Jupiter\n\n---\n# Answer Key\n\n**Answer 1:** (B) Jupiter".to_string()
}

/// Create a filename validation request body.
pub fn validate_request(name: &str) -> Value {
    json!({ "name": name })
}
