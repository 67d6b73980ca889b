use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    db::{partner_store::PartnerStore, slide_store::SlideStore},
    error::Result,
    handlers::AppState,
    models::{partner::PartnerDraft, slide::SlideDraft},
};

// Slides

pub async fn list_slides(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let slides = SlideStore::new(state.pool.clone()).all().await?;
    Ok((StatusCode::OK, Json(slides)))
}

pub async fn create_slide(
    State(state): State<AppState>,
    Json(draft): Json<SlideDraft>,
) -> Result<impl IntoResponse> {
    let slide = SlideStore::new(state.pool.clone()).create(draft).await?;
    Ok((StatusCode::CREATED, Json(slide)))
}

pub async fn update_slide(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<SlideDraft>,
) -> Result<impl IntoResponse> {
    let slide = SlideStore::new(state.pool.clone()).update(id, draft).await?;
    Ok((StatusCode::OK, Json(slide)))
}

pub async fn delete_slide(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    SlideStore::new(state.pool.clone()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// Partners (admin view works on the raw rows, without the fallback merge)

pub async fn list_partners(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let partners = PartnerStore::new(state.pool.clone()).all().await?;
    Ok((StatusCode::OK, Json(partners)))
}

pub async fn create_partner(
    State(state): State<AppState>,
    Json(draft): Json<PartnerDraft>,
) -> Result<impl IntoResponse> {
    let partner = PartnerStore::new(state.pool.clone()).create(draft).await?;
    Ok((StatusCode::CREATED, Json(partner)))
}

pub async fn update_partner(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<PartnerDraft>,
) -> Result<impl IntoResponse> {
    let partner = PartnerStore::new(state.pool.clone())
        .update(id, draft)
        .await?;
    Ok((StatusCode::OK, Json(partner)))
}

pub async fn delete_partner(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    PartnerStore::new(state.pool.clone()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
