//! Core types for exam question export.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Question difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[serde(alias = "Beginner")]
    Beginner,
    #[serde(alias = "Amateur")]
    Amateur,
    #[serde(alias = "Ninja")]
    Ninja,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Beginner
    }
}

impl Difficulty {
    /// Get the difficulty name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Amateur => "amateur",
            Self::Ninja => "ninja",
        }
    }
}

impl FromStr for Difficulty {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "amateur" => Ok(Self::Amateur),
            "ninja" => Ok(Self::Ninja),
            _ => Err(CoreError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// A single exam question.
///
/// Questions are never modified by the formatter; every document is derived
/// from borrowed question text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub stem: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub subject: String,
}

impl Question {
    /// Create a free-response question with only the required fields set.
    pub fn new(id: impl Into<String>, stem: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            stem: stem.into(),
            options: None,
            answer: answer.into(),
            explanation: None,
            difficulty: Difficulty::default(),
            subject: String::new(),
        }
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Answer choices, empty for free-response questions.
    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or(&[])
    }

    /// Whether the question has answer choices. An empty list counts as none.
    pub fn is_multiple_choice(&self) -> bool {
        !self.options().is_empty()
    }

    /// Explanation text, if there is any worth printing.
    pub fn explanation(&self) -> Option<&str> {
        self.explanation
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

/// Output format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Each answer directly follows its question.
    SolvedExamples,
    /// All questions, then an answer key appendix.
    AssignmentFormat,
    /// Two independent documents: questions and answers.
    SeparateDocuments,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [
        Self::SolvedExamples,
        Self::AssignmentFormat,
        Self::SeparateDocuments,
    ];

    /// Get the wire name of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SolvedExamples => "solved-examples",
            Self::AssignmentFormat => "assignment-format",
            Self::SeparateDocuments => "separate-documents",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solved-examples" => Ok(Self::SolvedExamples),
            "assignment-format" => Ok(Self::AssignmentFormat),
            "separate-documents" => Ok(Self::SeparateDocuments),
            _ => Err(CoreError::UnknownOutputFormat(s.to_string())),
        }
    }
}

/// What a document contains, independent of the format that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Questions,
    Answers,
    Combined,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Questions => "questions",
            Self::Answers => "answers",
            Self::Combined => "combined",
        }
    }
}


/// One renderable document.
///
/// `content` is written in a small markdown-like dialect: newline separated
/// paragraphs, a line of exactly `---` as page separator, `# ` headings and
/// `**bold**` spans. See [`crate::markup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
}

impl Document {
    pub fn new(title: impl Into<String>, content: String, doc_type: DocumentType) -> Self {
        Self {
            title: title.into(),
            content,
            doc_type,
        }
    }
}

/// Full result of formatting a question list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedOutput {
    pub format: OutputFormat,
    pub questions: Vec<Question>,
    pub documents: Vec<Document>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_names_round_trip() {
        for format in OutputFormat::ALL {
            assert_eq!(format.as_str().parse::<OutputFormat>(), Ok(format));
        }
        assert_eq!(
            "interleaved".parse::<OutputFormat>(),
            Err(CoreError::UnknownOutputFormat("interleaved".to_string()))
        );
    }

    #[test]
    fn empty_options_count_as_free_response() {
        let question = Question::new("q1", "Define entropy.", "A measure of disorder.")
            .with_options(Vec::<String>::new());
        assert!(!question.is_multiple_choice());
        assert!(question.options().is_empty());
    }

    #[test]
    fn blank_explanation_is_absent() {
        let question = Question::new("q1", "2 + 2", "4").with_explanation("   ");
        assert_eq!(question.explanation(), None);
    }

    #[test]
    fn document_serializes_type_field() {
        let doc = Document::new("Questions", "body".to_string(), DocumentType::Questions);
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["type"], "questions");
        assert_eq!(json["title"], "Questions");
    }

    #[test]
    fn question_deserializes_without_optional_fields() {
        let json = r#"{"id":"7","stem":"Name a prime.","answer":"2"}"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.options, None);
        assert_eq!(question.explanation, None);
        assert_eq!(question.difficulty, Difficulty::Beginner);
        assert_eq!(question.subject, "");
    }

    #[test]
    fn question_accepts_capitalized_difficulty() {
        let json = r#"{"id":"1","stem":"s","answer":"a","difficulty":"Beginner"}"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.difficulty, Difficulty::Beginner);

        let json = r#"{"id":"2","stem":"s","answer":"a","difficulty":"Ninja"}"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.difficulty, Difficulty::Ninja);
        assert_eq!(serde_json::to_value(&question).unwrap()["difficulty"], "ninja");
    }

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("Ninja".parse::<Difficulty>(), Ok(Difficulty::Ninja));
        assert!("expert".parse::<Difficulty>().is_err());
    }
}
