use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    db::{order_store::OrderStore, request_store::RequestStore, trial_store::TrialStore},
    error::Result,
    handlers::AppState,
    models::{order::OrderStatus, request::RequestStatus},
};

/// Tab selector filter shared by the triage list views
#[derive(Debug, Deserialize)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
}

#[derive(Debug, Deserialize)]
pub struct RequestFilter {
    pub status: Option<RequestStatus>,
}

// Software orders

pub async fn list_orders(
    State(state): State<AppState>,
    Query(filter): Query<OrderFilter>,
) -> Result<impl IntoResponse> {
    let orders = OrderStore::new(state.pool.clone()).list(filter.status).await?;
    Ok((StatusCode::OK, Json(orders)))
}

pub async fn advance_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let order = OrderStore::new(state.pool.clone()).advance(id).await?;
    Ok((StatusCode::OK, Json(order)))
}

pub async fn reject_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let order = OrderStore::new(state.pool.clone()).reject(id).await?;
    Ok((StatusCode::OK, Json(order)))
}

pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    OrderStore::new(state.pool.clone()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// Trial requests

pub async fn list_trials(
    State(state): State<AppState>,
    Query(filter): Query<OrderFilter>,
) -> Result<impl IntoResponse> {
    let trials = TrialStore::new(state.pool.clone()).list(filter.status).await?;
    Ok((StatusCode::OK, Json(trials)))
}

pub async fn advance_trial(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let trial = TrialStore::new(state.pool.clone()).advance(id).await?;
    Ok((StatusCode::OK, Json(trial)))
}

pub async fn reject_trial(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let trial = TrialStore::new(state.pool.clone()).reject(id).await?;
    Ok((StatusCode::OK, Json(trial)))
}

pub async fn delete_trial(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    TrialStore::new(state.pool.clone()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// Project requests

pub async fn list_projects(
    State(state): State<AppState>,
    Query(filter): Query<RequestFilter>,
) -> Result<impl IntoResponse> {
    let requests = RequestStore::new(state.pool.clone()).list(filter.status).await?;
    Ok((StatusCode::OK, Json(requests)))
}

pub async fn advance_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let request = RequestStore::new(state.pool.clone()).advance(id).await?;
    Ok((StatusCode::OK, Json(request)))
}

pub async fn reject_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let request = RequestStore::new(state.pool.clone()).reject(id).await?;
    Ok((StatusCode::OK, Json(request)))
}

pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    RequestStore::new(state.pool.clone()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
