use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, post, put},
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::{
    config::Config,
    db::DbPool,
    error::AppError,
    services::{AuthService, MailService, UploadService},
};

pub mod admin_users;
pub mod auth;
pub mod public;
pub mod requests;
pub mod site;
pub mod slides_partners;
pub mod software;
pub mod tickets;
pub mod upload;

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub config: Arc<Config>,
    pub auth: AuthService,
    pub mailer: Arc<MailService>,
    pub uploads: UploadService,
}

impl AppState {
    pub fn new(pool: DbPool, config: Config) -> Self {
        let auth = AuthService::new(pool.clone(), &config);
        let mailer = Arc::new(MailService::new(&config));
        let uploads = UploadService::new(&config);

        Self {
            pool,
            config: Arc::new(config),
            auth,
            mailer,
            uploads,
        }
    }
}

/// Build the full application router
pub fn router(state: AppState) -> Router {
    let admin = Router::new()
        .route(
            "/slides",
            get(slides_partners::list_slides).post(slides_partners::create_slide),
        )
        .route(
            "/slides/{id}",
            put(slides_partners::update_slide).delete(slides_partners::delete_slide),
        )
        .route(
            "/partners",
            get(slides_partners::list_partners).post(slides_partners::create_partner),
        )
        .route(
            "/partners/{id}",
            put(slides_partners::update_partner).delete(slides_partners::delete_partner),
        )
        .route("/software", post(software::create))
        .route(
            "/software/{id}",
            put(software::update).delete(software::remove),
        )
        .route("/software/{id}/gallery", post(software::add_gallery_image))
        .route(
            "/software/gallery/{image_id}",
            delete(software::remove_gallery_image),
        )
        .route("/orders", get(requests::list_orders))
        .route("/orders/{id}/advance", post(requests::advance_order))
        .route("/orders/{id}/reject", post(requests::reject_order))
        .route("/orders/{id}", delete(requests::delete_order))
        .route("/trial-requests", get(requests::list_trials))
        .route("/trial-requests/{id}/advance", post(requests::advance_trial))
        .route("/trial-requests/{id}/reject", post(requests::reject_trial))
        .route("/trial-requests/{id}", delete(requests::delete_trial))
        .route("/project-requests", get(requests::list_projects))
        .route(
            "/project-requests/{id}/advance",
            post(requests::advance_project),
        )
        .route(
            "/project-requests/{id}/reject",
            post(requests::reject_project),
        )
        .route("/project-requests/{id}", delete(requests::delete_project))
        .route("/tickets", get(tickets::list).post(tickets::create))
        .route("/tickets/{id}", get(tickets::thread).delete(tickets::remove))
        .route("/tickets/{id}/responses", post(tickets::respond))
        .route("/tickets/{id}/close", post(tickets::close))
        .route("/tickets/{id}/reopen", post(tickets::reopen))
        .route("/contact-info", put(site::update_contact_info))
        .route("/about", put(site::update_about))
        .route("/settings", put(site::update_settings))
        .route(
            "/admins",
            get(admin_users::list).post(admin_users::create),
        )
        .route("/admins/{id}", delete(admin_users::remove))
        .route("/admins/{id}/password", put(admin_users::update_password))
        .route("/uploads", post(upload::upload_image))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_admin,
        ));

    Router::new()
        .route("/api/slides", get(public::slides))
        .route("/api/partners", get(public::partners))
        .route("/api/software", get(public::software_list))
        .route("/api/software/{id}", get(public::software_detail))
        .route("/api/about", get(public::about))
        .route("/api/contact-info", get(public::contact_info))
        .route("/api/settings", get(public::settings))
        .route("/api/contact", post(public::submit_contact))
        .route("/api/trial-requests", post(public::submit_trial))
        .route("/api/orders", post(public::submit_order))
        .route("/api/project-requests", post(public::submit_project))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/session", get(auth::session))
        .nest("/api/admin", admin)
        .nest_service(
            "/uploads",
            ServeDir::new(state.config.upload_dir.clone()),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes + 64 * 1024))
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound
}
