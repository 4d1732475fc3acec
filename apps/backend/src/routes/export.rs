//! Export endpoints

use axum::{
    extract::State,
    http::{header, HeaderName},
    response::{IntoResponse, Response},
    Json,
};
use exam_pdf::{generate_pdf, ExportOptions, MemoryTarget};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/export/format
pub async fn format(Json(request): Json<FormatRequest>) -> Result<Json<FormattedOutput>> {
    let format: OutputFormat = request.format.parse()?;
    info!(
        format = %format,
        questions = request.questions.len(),
        "Formatting questions"
    );
    Ok(Json(exam_core::format(&request.questions, format)))
}

/// POST /api/export/pdf
pub async fn pdf(
    State(state): State<AppState>,
    Json(request): Json<PdfRequest>,
) -> Result<Response> {
    let export_id = Uuid::new_v4();
    let span = info_span!("export_pdf", export_id = %export_id);

    async move {
        info!(
            title = %request.document.title,
            doc_type = request.document.doc_type.as_str(),
            "Export requested"
        );

        let mut options = ExportOptions::new(state.config.layout());
        options.custom_title = request.title;

        let target = MemoryTarget::new();
        let file = generate_pdf(&request.document, &options, &target).await?;

        let disposition = format!("attachment; filename=\"{}\"", file.filename);
        let headers = [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
            (HeaderName::from_static("x-page-count"), file.page_count.to_string()),
        ];
        Ok::<_, ApiError>((headers, file.bytes).into_response())
    }
    .instrument(span)
    .await
}
