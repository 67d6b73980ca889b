use axum::{
    extract::{Json, Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{
    error::{AppError, Result},
    handlers::AppState,
    models::admin::{LoginRequest, SessionInfo},
};

/// Header carrying the signed fallback token the client keeps locally
pub const FALLBACK_TOKEN_HEADER: &str = "x-fallback-token";

/// Handler for admin login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse> {
    if request.username.trim().is_empty() || request.password.is_empty() {
        return Err(AppError::BadRequest(
            "يرجى إدخال اسم المستخدم وكلمة المرور".to_string(),
        ));
    }

    let response = state.auth.login(&request.username, &request.password).await?;
    Ok((StatusCode::OK, Json(response)))
}

/// Handler for admin logout; deleting an unknown token is fine
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Result<impl IntoResponse> {
    if let Some(token) = bearer_token(&headers) {
        state.auth.logout(&token).await?;
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Tri-state session check: live session, degraded fallback grant, or neither
pub async fn session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse> {
    let identity = state
        .auth
        .resolve(
            bearer_token(&headers).as_deref(),
            fallback_token(&headers).as_deref(),
        )
        .await?;

    let info = match identity {
        Some(identity) => SessionInfo {
            authenticated: true,
            degraded: identity.degraded,
            admin: Some(identity.admin),
        },
        None => SessionInfo {
            authenticated: false,
            degraded: false,
            admin: None,
        },
    };

    Ok((StatusCode::OK, Json(info)))
}

/// Middleware guarding every /api/admin route. The resolved identity is
/// attached to the request for handlers that care.
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let identity = state
        .auth
        .resolve(
            bearer_token(request.headers()).as_deref(),
            fallback_token(request.headers()).as_deref(),
        )
        .await?
        .ok_or_else(|| AppError::Auth("no valid session".to_string()))?;

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

fn fallback_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(FALLBACK_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
