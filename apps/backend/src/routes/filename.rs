//! Filename endpoints

use axum::Json;

use crate::models::*;

/// POST /api/filename/validate
pub async fn validate(Json(request): Json<ValidateFilenameRequest>) -> Json<FilenameValidation> {
    Json(exam_core::validate_filename(&request.name))
}
