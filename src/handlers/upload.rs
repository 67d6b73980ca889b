use axum::{
    extract::{Json, Multipart, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, Result},
    handlers::AppState,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
    /// false when the returned path is not backed by a file on disk
    pub stored: bool,
}

/// Multipart image upload for the admin screens. Expects a single `file` field.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Upload(e.to_string()))?;

        let stored = state
            .uploads
            .store(content_type.as_deref(), file_name.as_deref(), &bytes)
            .await?;

        return Ok((
            StatusCode::OK,
            Json(UploadResponse {
                url: stored.url().to_string(),
                stored: stored.is_stored(),
            }),
        ));
    }

    Err(AppError::Upload("لم يتم إرفاق أي ملف".to_string()))
}
