use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    db::admin_store::AdminStore,
    error::{AppError, Result},
    handlers::AppState,
    models::admin::{AdminUserDto, CreateAdminRequest, UpdatePasswordRequest},
    services::auth_service,
};

const MIN_PASSWORD_LEN: usize = 6;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let admins = AdminStore::new(state.pool.clone()).all().await?;
    let dtos: Vec<AdminUserDto> = admins.into_iter().map(AdminUserDto::from).collect();
    Ok((StatusCode::OK, Json(dtos)))
}

/// Create an admin account. Username uniqueness is checked in the store.
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateAdminRequest>,
) -> Result<impl IntoResponse> {
    if request.username.trim().is_empty() {
        return Err(AppError::BadRequest("يرجى إدخال اسم المستخدم".to_string()));
    }
    validate_password(&request.password)?;

    let hash = auth_service::hash_password(&request.password)?;
    let admin = AdminStore::new(state.pool.clone())
        .create(request.username.trim(), &hash)
        .await?;

    Ok((StatusCode::CREATED, Json(AdminUserDto::from(admin))))
}

pub async fn update_password(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdatePasswordRequest>,
) -> Result<impl IntoResponse> {
    validate_password(&request.password)?;

    let hash = auth_service::hash_password(&request.password)?;
    AdminStore::new(state.pool.clone())
        .update_password(id, &hash)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    AdminStore::new(state.pool.clone()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn validate_password(password: &str) -> Result<()> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest(
            "كلمة المرور يجب ألا تقل عن ستة أحرف".to_string(),
        ));
    }
    Ok(())
}
