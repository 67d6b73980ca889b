use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    db::ticket_store::TicketStore,
    error::Result,
    handlers::AppState,
    models::ticket::{TicketDraft, TicketResponseDraft, TicketStatus},
};

#[derive(Debug, Deserialize)]
pub struct TicketFilter {
    pub status: Option<TicketStatus>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<TicketFilter>,
) -> Result<impl IntoResponse> {
    let tickets = TicketStore::new(state.pool.clone()).list(filter.status).await?;
    Ok((StatusCode::OK, Json(tickets)))
}

pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<TicketDraft>,
) -> Result<impl IntoResponse> {
    let ticket = TicketStore::new(state.pool.clone()).create(draft).await?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

pub async fn thread(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let thread = TicketStore::new(state.pool.clone()).thread(id).await?;
    Ok((StatusCode::OK, Json(thread)))
}

pub async fn respond(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<TicketResponseDraft>,
) -> Result<impl IntoResponse> {
    let response = TicketStore::new(state.pool.clone()).respond(id, draft).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn close(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let ticket = TicketStore::new(state.pool.clone())
        .set_status(id, TicketStatus::Closed)
        .await?;
    Ok((StatusCode::OK, Json(ticket)))
}

pub async fn reopen(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let ticket = TicketStore::new(state.pool.clone())
        .set_status(id, TicketStatus::Open)
        .await?;
    Ok((StatusCode::OK, Json(ticket)))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    TicketStore::new(state.pool.clone()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
