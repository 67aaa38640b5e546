// Presentation layer - HTTP routes and HTML rendering
pub mod app_state;
pub mod handlers;
pub mod page_view;

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{dashboard_page, dashboard_snapshot, health_check};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    // Compression is applied per response, so no CompressionLayer here
    Router::new()
        .route("/healthz", get(health_check))
        .route("/", get(dashboard_page))
        .route("/dashboard.json", get(dashboard_snapshot))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
