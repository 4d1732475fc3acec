//! Matching a question's canonical answer against its options.
//!
//! Comparison is trim + lowercase only. There is no whitespace collapsing
//! and no fuzzy matching.

use crate::types::Question;

/// Normalize a string for option comparison.
fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Whether `option` is the correct choice for `answer`.
pub fn is_correct_option(option: &str, answer: &str) -> bool {
    normalize(option) == normalize(answer)
}

/// Index of the first option matching the question's answer.
///
/// Returns `None` for free-response questions and for answers that match no
/// option; neither case is an error.
pub fn correct_option_index(question: &Question) -> Option<usize> {
    question
        .options()
        .iter()
        .position(|option| is_correct_option(option, &question.answer))
}
