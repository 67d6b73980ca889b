use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    db::software_store::SoftwareStore, error::Result, handlers::AppState,
    models::software::SoftwareDraft,
};

pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<SoftwareDraft>,
) -> Result<impl IntoResponse> {
    let product = SoftwareStore::new(state.pool.clone()).create(draft).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<SoftwareDraft>,
) -> Result<impl IntoResponse> {
    let product = SoftwareStore::new(state.pool.clone())
        .update(id, draft)
        .await?;
    Ok((StatusCode::OK, Json(product)))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    SoftwareStore::new(state.pool.clone()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct GalleryImageDraft {
    pub image_url: String,
}

pub async fn add_gallery_image(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<GalleryImageDraft>,
) -> Result<impl IntoResponse> {
    let image = SoftwareStore::new(state.pool.clone())
        .add_gallery_image(id, &draft.image_url)
        .await?;
    Ok((StatusCode::CREATED, Json(image)))
}

pub async fn remove_gallery_image(
    State(state): State<AppState>,
    Path(image_id): Path<i64>,
) -> Result<impl IntoResponse> {
    SoftwareStore::new(state.pool.clone())
        .remove_gallery_image(image_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
