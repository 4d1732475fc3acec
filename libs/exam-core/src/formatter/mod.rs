//! Formatter strategies.
//!
//! Each [`OutputFormat`] maps to a plain function with the same shape,
//! `fn(&[Question]) -> Vec<Document>`. Questions are numbered 1..N in input
//! order and a question keeps its number in every section and document.

pub mod assignment;
pub mod separate;
pub mod solved_examples;

use crate::matching::correct_option_index;
use crate::types::{Document, FormattedOutput, OutputFormat, Question};

/// Signature shared by all formatter strategies.
pub type FormatFn = fn(&[Question]) -> Vec<Document>;

impl OutputFormat {
    /// Get the strategy for this format.
    pub fn formatter(self) -> FormatFn {
        match self {
            Self::SolvedExamples => solved_examples::format,
            Self::AssignmentFormat => assignment::format,
            Self::SeparateDocuments => separate::format,
        }
    }
}

/// Format questions into the documents of the selected output format.
pub fn format(questions: &[Question], format: OutputFormat) -> FormattedOutput {
    let documents = (format.formatter())(questions);

    FormattedOutput {
        format,
        questions: questions.to_vec(),
        documents,
    }
}

/// Letter label for the option at `index` (A, B, C, ...).
///
/// Past `Z` the 1-based number is used instead.
pub fn option_label(index: usize) -> String {
    match u8::try_from(index) {
        Ok(i) if i < 26 => char::from(b'A' + i).to_string(),
        _ => (index + 1).to_string(),
    }
}

/// Lines for the question part of a question: label, stem and options.
fn question_lines(number: usize, question: &Question) -> Vec<String> {
    let mut lines = vec![format!("**Question {}:** {}", number, question.stem)];
    lines.extend(
        question
            .options()
            .iter()
            .enumerate()
            .map(|(idx, option)| format!("{}) {}", option_label(idx), option)),
    );
    lines
}

/// Lines for the answer part of a question: answer and explanation.
fn answer_lines(number: usize, question: &Question) -> Vec<String> {
    let answer = match correct_option_index(question) {
        Some(idx) => format!("**Answer {}:** ({}) {}", number, option_label(idx), question.answer),
        None => format!("**Answer {}:** {}", number, question.answer),
    };

    let mut lines = vec![answer];
    if let Some(explanation) = question.explanation() {
        lines.push(format!("**Explanation:** {}", explanation));
    }
    lines
}

fn push_lines(out: &mut String, lines: Vec<String>) {
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn option_labels() {
        assert_eq!(option_label(0), "A");
        assert_eq!(option_label(3), "D");
        assert_eq!(option_label(25), "Z");
        assert_eq!(option_label(26), "27");
    }

    #[test]
    fn format_keeps_questions_and_format() {
        let questions = fixtures::mixed_pair();
        for output_format in OutputFormat::ALL {
            let output = format(&questions, output_format);
            assert_eq!(output.format, output_format);
            assert_eq!(output.questions, questions);
        }
    }

    #[test]
    fn numbering_is_consistent_across_formats() {
        let questions: Vec<Question> = (1..=5)
            .map(|i| Question::new(format!("q{}", i), format!("stem {}", i), format!("answer {}", i)))
            .collect();

        for output_format in OutputFormat::ALL {
            let output = format(&questions, output_format);
            let all: String = output
                .documents
                .iter()
                .map(|d| d.content.as_str())
                .collect::<Vec<_>>()
                .join("\n");

            for (idx, question) in questions.iter().enumerate() {
                let n = idx + 1;
                assert!(all.contains(&format!("**Question {}:** {}", n, question.stem)));
                assert!(all.contains(&format!("**Answer {}:** {}", n, question.answer)));
            }
        }
    }

    #[test]
    fn special_characters_pass_through() {
        let stem = "Evaluate ∑ x² ≤ π 🎉 <script>alert('x')</script>";
        let answer = "{\"json\": [1, 2]} \u{7} &amp;";
        let explanation = "∫₀¹ f(x) dx ≠ ∞ <b>bold</b>";
        let questions = vec![Question::new("q1", stem, answer).with_explanation(explanation)];

        for output_format in OutputFormat::ALL {
            let output = format(&questions, output_format);
            let all: String = output
                .documents
                .iter()
                .map(|d| d.content.clone())
                .collect();
            assert!(all.contains(stem), "{output_format}: stem altered");
            assert!(all.contains(answer), "{output_format}: answer altered");
            assert!(all.contains(explanation), "{output_format}: explanation altered");
        }
    }

    #[test]
    fn missing_optional_fields_degrade_gracefully() {
        let question = Question::new("q1", "Why is the sky blue?", "Rayleigh scattering.");
        for output_format in OutputFormat::ALL {
            let output = format(std::slice::from_ref(&question), output_format);
            let all: String = output
                .documents
                .iter()
                .map(|d| d.content.clone())
                .collect();
            assert!(all.contains(&question.stem));
            assert!(all.contains(&question.answer));
            assert!(!all.contains("**Explanation:**"));
        }
    }

    #[test]
    fn blank_stem_and_answer_rendered_as_is() {
        let question = Question::new("q1", "   ", "");
        let output = format(&[question], OutputFormat::SolvedExamples);
        assert!(output.documents[0].content.contains("**Question 1:**    \n"));
        assert!(output.documents[0].content.contains("**Answer 1:** \n"));
    }
}
