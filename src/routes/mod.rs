// src/routes/mod.rs
pub mod chat;
pub mod forms;
pub mod pricing;

use crate::error::AppError;
use crate::services::metrics_manager::MetricsData;
use crate::state::SharedState;
use axum::{
    Json, Router,
    extract::{FromRequestParts, State},
    http::request::Parts,
    routing::{delete, get, post, put},
};
use chat::{
    chat_handler, close_session_handler, history_handler, open_session_handler, theme_handler,
};
use forms::{contact_handler, info_handler, schedule_handler};
use pricing::{
    catalog_handler, exam_search_handler, quote_handler, recommendation_handler,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    let admin_routes = Router::new().route("/metrics", get(get_metrics_handler));

    let form_routes = Router::new()
        .route("/contact", post(contact_handler))
        .route("/schedule", post(schedule_handler))
        .route("/info", post(info_handler));

    Router::new()
        .route("/chat", post(chat_handler))
        .route("/sessions", post(open_session_handler))
        .route("/sessions/{id}", delete(close_session_handler))
        .route("/sessions/{id}/messages", get(history_handler))
        .route("/sessions/{id}/theme", put(theme_handler))
        .route("/catalog", get(catalog_handler))
        .route("/quote", post(quote_handler))
        .route("/exams", get(exam_search_handler))
        .route("/exams/recommendations", get(recommendation_handler))
        .nest("/forms", form_routes)
        .nest("/admin", admin_routes)
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
}

/// Passes only when `x-admin-key` matches the configured key.
pub struct AdminKey;

impl FromRequestParts<SharedState> for AdminKey {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        match parts.headers.get("x-admin-key") {
            Some(val) if val.as_bytes() == state.admin_key.as_bytes() => Ok(AdminKey),
            _ => Err(AppError::Unauthorized),
        }
    }
}

async fn get_metrics_handler(
    _admin: AdminKey,
    State(state): State<SharedState>,
) -> Json<MetricsData> {
    Json(state.metrics.get_metrics().await)
}
