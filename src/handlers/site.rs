use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    db::site_store::SiteStore,
    error::Result,
    handlers::AppState,
    models::site::{AboutDraft, ContactInfoDraft, GeneralSettingsDraft},
};

pub async fn update_contact_info(
    State(state): State<AppState>,
    Json(draft): Json<ContactInfoDraft>,
) -> Result<impl IntoResponse> {
    let info = SiteStore::new(state.pool.clone())
        .update_contact_info(draft)
        .await?;
    Ok((StatusCode::OK, Json(info)))
}

pub async fn update_about(
    State(state): State<AppState>,
    Json(draft): Json<AboutDraft>,
) -> Result<impl IntoResponse> {
    let about = SiteStore::new(state.pool.clone()).update_about(draft).await?;
    Ok((StatusCode::OK, Json(about)))
}

pub async fn update_settings(
    State(state): State<AppState>,
    Json(draft): Json<GeneralSettingsDraft>,
) -> Result<impl IntoResponse> {
    let settings = SiteStore::new(state.pool.clone())
        .update_settings(draft)
        .await?;
    Ok((StatusCode::OK, Json(settings)))
}
