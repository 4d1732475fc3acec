//! Export pipeline: render documents to PDF and deliver them.

use crate::config::LayoutConfig;
use crate::error::{ExportError, Result};
use crate::layout::layout_document;
use crate::pdf::PdfCanvas;
use crate::target::DownloadTarget;
use chrono::{Local, NaiveDateTime};
use exam_core::{generate_filename, sanitize_filename, Document, DocumentType, FormattedOutput};
use tracing::{info, warn};

/// A rendered PDF ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfFile {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

/// Options for one export.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub layout: LayoutConfig,
    /// Replaces the document-type prefix of the filename.
    pub custom_title: Option<String>,
    /// Timestamp for the filename; the local time of the export when unset.
    pub timestamp: Option<NaiveDateTime>,
}

impl ExportOptions {
    pub fn new(layout: LayoutConfig) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.custom_title = Some(title.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Sanitized download filename for a document of `doc_type`.
    pub fn filename_for(&self, doc_type: DocumentType) -> String {
        let timestamp = self
            .timestamp
            .unwrap_or_else(|| Local::now().naive_local());
        sanitize_filename(&generate_filename(
            doc_type,
            self.custom_title.as_deref(),
            &timestamp,
        ))
    }
}

fn render_blocking(document: &Document, options: &ExportOptions) -> Result<PdfFile> {
    let layout = &options.layout;
    let mut canvas = PdfCanvas::new(layout.page_size)
        .with_title(document.title.clone())
        .with_max_pages(layout.max_pages);

    let summary = layout_document(&mut canvas, document, layout)?;
    let bytes = canvas.finish()?;

    Ok(PdfFile {
        filename: options.filename_for(document.doc_type),
        bytes,
        page_count: summary.pages,
    })
}

/// Render `document` to a PDF file.
///
/// Layout runs on the blocking thread pool. Layout failures, including a
/// panicking layout task, are reported as [`ExportError::GenerationFailed`].
pub async fn render_pdf(document: &Document, options: &ExportOptions) -> Result<PdfFile> {
    let document = document.clone();
    let options = options.clone();

    tokio::task::spawn_blocking(move || render_blocking(&document, &options))
        .await
        .map_err(|e| ExportError::GenerationFailed(format!("layout task failed: {}", e)))?
}

/// Render `document` and deliver it to `target`.
pub async fn generate_pdf<T: DownloadTarget>(
    document: &Document,
    options: &ExportOptions,
    target: &T,
) -> Result<PdfFile> {
    if let Err(reason) = target.check_support() {
        warn!(reason = %reason, "PDF export unsupported");
        return Err(ExportError::BrowserUnsupported(reason));
    }

    let file = render_pdf(document, options).await.map_err(|e| {
        warn!(title = %document.title, error = %e, "PDF generation failed");
        e
    })?;

    target.deliver(&file).await.map_err(|e| {
        warn!(filename = %file.filename, error = %e, "PDF delivery failed");
        e
    })?;

    info!(
        filename = %file.filename,
        pages = file.page_count,
        bytes = file.bytes.len(),
        "PDF exported"
    );
    Ok(file)
}

/// Export every document of `output` in order, stopping at the first failure.
///
/// With several documents a custom title is combined with each document's
/// own title so the filenames stay distinct.
pub async fn export_all<T: DownloadTarget>(
    output: &FormattedOutput,
    options: &ExportOptions,
    target: &T,
) -> Result<Vec<PdfFile>> {
    let custom_title = options
        .custom_title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());
    let several = output.documents.len() > 1;

    let mut files = Vec::with_capacity(output.documents.len());
    for document in &output.documents {
        let doc_options = match custom_title {
            Some(custom) if several => ExportOptions {
                custom_title: Some(format!("{} {}", custom, document.title)),
                ..options.clone()
            },
            _ => options.clone(),
        };
        files.push(generate_pdf(document, &doc_options, target).await?);
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportErrorKind;
    use crate::target::{DirectoryTarget, MemoryTarget};
    use chrono::NaiveDate;
    use exam_core::{format, OutputFormat, Question};
    use pretty_assertions::assert_eq;
    use std::future::Future;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    fn options() -> ExportOptions {
        ExportOptions::default().with_timestamp(timestamp())
    }

    fn questions() -> Vec<Question> {
        vec![
            Question::new("q1", "Which planet is largest?", "Jupiter")
                .with_options(["Mercury", "Jupiter", "Mars", "Venus"])
                .with_explanation("Jupiter is the largest planet."),
            Question::new("q2", "Describe photosynthesis.", "Light becomes chemical energy."),
        ]
    }

    struct FailingTarget;

    impl DownloadTarget for FailingTarget {
        fn check_support(&self) -> std::result::Result<(), String> {
            Ok(())
        }

        fn deliver(&self, _file: &PdfFile) -> impl Future<Output = Result<()>> + Send {
            async { Err(ExportError::DownloadFailed("blocked".to_string())) }
        }
    }

    #[tokio::test]
    async fn test_render_solved_examples() {
        let output = format(&questions(), OutputFormat::SolvedExamples);
        let file = render_pdf(&output.documents[0], &options()).await.unwrap();

        assert_eq!(file.filename, "Questions_and_Answers_2024-01-15_14-30.pdf");
        assert_eq!(file.page_count, 1);
        assert!(file.bytes.starts_with(b"%PDF-1.4"));
        assert!(file.bytes.ends_with(b"%%EOF\n"));
    }

    #[tokio::test]
    async fn test_assignment_renders_two_pages() {
        let output = format(&questions(), OutputFormat::AssignmentFormat);
        let file = render_pdf(&output.documents[0], &options()).await.unwrap();
        assert_eq!(file.page_count, 2);
    }

    #[tokio::test]
    async fn test_generate_pdf_with_custom_title() {
        let output = format(&questions(), OutputFormat::SolvedExamples);
        let target = MemoryTarget::new();
        let file = generate_pdf(&output.documents[0], &options().with_title("Custom Title"), &target)
            .await
            .unwrap();

        assert_eq!(file.filename, "Custom_Title_2024-01-15_14-30.pdf");
        assert_eq!(target.files(), vec![file]);
    }

    #[test]
    fn test_filename_sanitizes_custom_title() {
        let options = options().with_title("Unit 3: Review");
        assert_eq!(
            options.filename_for(DocumentType::Combined),
            "Unit_3_Review_2024-01-15_14-30.pdf"
        );

        let options = options.with_title("  Físic@ / Quiz  ");
        assert_eq!(
            options.filename_for(DocumentType::Questions),
            "F_sic_Quiz_2024-01-15_14-30.pdf"
        );
    }

    #[tokio::test]
    async fn test_unsupported_target() {
        let dir = tempfile::tempdir().unwrap();
        let target = DirectoryTarget::new(dir.path().join("nope"));
        let output = format(&questions(), OutputFormat::SolvedExamples);

        let err = generate_pdf(&output.documents[0], &options(), &target)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ExportErrorKind::BrowserUnsupported);
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_delivery_failure_is_classified() {
        let output = format(&questions(), OutputFormat::SolvedExamples);
        let err = generate_pdf(&output.documents[0], &options(), &FailingTarget)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ExportErrorKind::DownloadFailed);
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_generation_failure_is_classified() {
        let mut options = options();
        options.layout.max_pages = 1;
        let document = Document::new("Two pages", "one\n---\ntwo".to_string(), DocumentType::Combined);

        let target = MemoryTarget::new();
        let err = generate_pdf(&document, &options, &target).await.unwrap_err();
        assert_eq!(err.kind(), ExportErrorKind::GenerationFailed);
        assert!(target.files().is_empty());
    }

    #[tokio::test]
    async fn test_export_all_separate_documents() {
        let output = format(&questions(), OutputFormat::SeparateDocuments);
        let dir = tempfile::tempdir().unwrap();
        let target = DirectoryTarget::new(dir.path());

        let files = export_all(&output, &options(), &target).await.unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(
            names,
            vec!["Questions_2024-01-15_14-30.pdf", "Answers_2024-01-15_14-30.pdf"]
        );
        for name in names {
            assert!(dir.path().join(name).is_file());
        }
    }

    #[tokio::test]
    async fn test_export_all_combines_custom_title() {
        let output = format(&questions(), OutputFormat::SeparateDocuments);
        let target = MemoryTarget::new();

        let files = export_all(&output, &options().with_title("Unit 3"), &target)
            .await
            .unwrap();
        assert_eq!(files[0].filename, "Unit_3_Questions_2024-01-15_14-30.pdf");
        assert_eq!(files[1].filename, "Unit_3_Answer_Key_2024-01-15_14-30.pdf");
    }
}
