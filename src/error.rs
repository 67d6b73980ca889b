use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Record not found")]
    NotFound,

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Mail error: {0}")]
    Mail(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

// User-facing messages are Arabic display strings; internals go to the log.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, redirect) = match &self {
            AppError::Auth(_) => (
                StatusCode::UNAUTHORIZED,
                "يجب تسجيل الدخول للمتابعة".to_string(),
                Some("/adminlogin".to_string()),
            ),
            AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "حدث خطأ في الخادم، حاول مرة أخرى".to_string(),
                None,
            ),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                "العنصر المطلوب غير موجود".to_string(),
                None,
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::Upload(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::Mail(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "تعذر إرسال البريد الإلكتروني".to_string(),
                None,
            ),
            AppError::Internal(_) | AppError::Json(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "حدث خطأ غير متوقع".to_string(),
                None,
            ),
        };

        tracing::error!(?self);
        let body = Json(ErrorResponse {
            error: error_message,
            redirect,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

pub type Result<T> = std::result::Result<T, AppError>;
