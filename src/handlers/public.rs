use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tokio::time::Duration;

use crate::{
    carousel::load_with_retry,
    db::{
        order_store::OrderStore, partner_store, partner_store::PartnerStore,
        request_store::RequestStore, site_store::SiteStore, slide_store::SlideStore,
        software_store::SoftwareStore, trial_store::TrialStore,
    },
    error::{AppError, Result},
    handlers::AppState,
    models::{
        order::SoftwareOrderForm,
        partner::Partner,
        request::ProjectRequestForm,
        slide::{Slide, default_slides},
        software::{SoftwareCard, SoftwareDetail},
        trial::TrialRequestForm,
    },
    services::mail_service::Notification,
};

/// Carousel data fetches retry a bounded number of times with linearly
/// increasing delay before the built-in content takes over.
const FETCH_ATTEMPTS: u32 = 3;
const FETCH_BASE_DELAY: Duration = Duration::from_millis(400);

#[derive(Debug, Serialize, Deserialize)]
pub struct SlidesResponse {
    pub source: String,
    pub slides: Vec<Slide>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PartnersResponse {
    pub source: String,
    pub partners: Vec<Partner>,
}

/// Hero carousel content, falling back to the built-in slides
pub async fn slides(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let store = SlideStore::new(state.pool.clone());
    let fetched = load_with_retry(
        FETCH_ATTEMPTS,
        FETCH_BASE_DELAY,
        move || {
            let store = store.clone();
            async move { store.all().await }
        },
        default_slides,
    )
    .await;

    let response = SlidesResponse {
        source: fetched.source().to_string(),
        slides: fetched.into_inner(),
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Partner carousel content. The Wisal partner is present exactly once in
/// both the live and the fallback list.
pub async fn partners(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let store = PartnerStore::new(state.pool.clone());
    let fetched = load_with_retry(
        FETCH_ATTEMPTS,
        FETCH_BASE_DELAY,
        move || {
            let store = store.clone();
            async move { store.all().await }
        },
        Vec::new,
    )
    .await;

    let response = PartnersResponse {
        source: fetched.source().to_string(),
        partners: partner_store::merge_fallback(fetched.into_inner()),
    };

    Ok((StatusCode::OK, Json(response)))
}

pub async fn software_list(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let products = SoftwareStore::new(state.pool.clone()).all().await?;
    let cards: Vec<SoftwareCard> = products.into_iter().map(SoftwareCard::from).collect();
    Ok((StatusCode::OK, Json(cards)))
}

pub async fn software_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let store = SoftwareStore::new(state.pool.clone());
    let product = store.get(id).await?;
    let gallery = store.gallery(id).await?;

    let detail = SoftwareDetail {
        card: product.into(),
        gallery,
    };

    Ok((StatusCode::OK, Json(detail)))
}

pub async fn about(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let about = SiteStore::new(state.pool.clone()).about().await?;
    Ok((StatusCode::OK, Json(about)))
}

pub async fn contact_info(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let info = SiteStore::new(state.pool.clone()).contact_info().await?;
    Ok((StatusCode::OK, Json(info)))
}

pub async fn settings(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let settings = SiteStore::new(state.pool.clone()).settings().await?;
    Ok((StatusCode::OK, Json(settings)))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub message: String,
}

fn receipt() -> Json<SubmissionReceipt> {
    Json(SubmissionReceipt {
        message: "تم الإرسال بنجاح، سنتواصل معك قريباً".to_string(),
    })
}

fn required(value: &str, message: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(message.to_string()));
    }
    Ok(())
}

/// Contact form: validated, emailed, not stored (there is no contact table)
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<impl IntoResponse> {
    required(&form.name, "يرجى إدخال الاسم")?;
    required(&form.email, "يرجى إدخال البريد الإلكتروني")?;
    required(&form.message, "يرجى كتابة رسالتك")?;

    state.mailer.clone().spawn_send(Notification::Contact {
        name: form.name,
        email: form.email,
        message: form.message,
    });

    Ok((StatusCode::OK, receipt()))
}

pub async fn submit_trial(
    State(state): State<AppState>,
    Json(form): Json<TrialRequestForm>,
) -> Result<impl IntoResponse> {
    required(&form.company_name, "يرجى إدخال اسم الشركة")?;
    required(&form.whatsapp, "يرجى إدخال رقم الواتساب")?;

    let trial = TrialStore::new(state.pool.clone()).create(form).await?;
    state.mailer.clone().spawn_send(Notification::Trial(trial));

    Ok((StatusCode::CREATED, receipt()))
}

pub async fn submit_order(
    State(state): State<AppState>,
    Json(form): Json<SoftwareOrderForm>,
) -> Result<impl IntoResponse> {
    required(&form.company_name, "يرجى إدخال اسم الشركة")?;
    required(&form.whatsapp, "يرجى إدخال رقم الواتساب")?;

    // The referenced product must exist
    let product = SoftwareStore::new(state.pool.clone())
        .get(form.software_id)
        .await?;
    let order = OrderStore::new(state.pool.clone()).create(form).await?;

    state.mailer.clone().spawn_send(Notification::Purchase {
        order,
        product_title: product.title,
    });

    Ok((StatusCode::CREATED, receipt()))
}

pub async fn submit_project(
    State(state): State<AppState>,
    Json(form): Json<ProjectRequestForm>,
) -> Result<impl IntoResponse> {
    required(&form.name, "يرجى إدخال الاسم")?;
    required(&form.title, "يرجى إدخال عنوان المشروع")?;
    required(&form.description, "يرجى وصف المشروع")?;

    let request = RequestStore::new(state.pool.clone()).create(form).await?;
    state.mailer.clone().spawn_send(Notification::Project(request));

    Ok((StatusCode::CREATED, receipt()))
}
