// HTTP request handlers
use crate::application::dashboard_service::{DashboardContext, RefreshReport};
use crate::application::surface::SurfaceError;
use crate::infrastructure::http_response::{
    accepts_brotli, encoded_response, HTML_CONTENT_TYPE, JSON_CONTENT_TYPE,
};
use crate::infrastructure::page::Page;
use crate::presentation::app_state::AppState;
use crate::presentation::page_view::render_page;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct DashboardSnapshot<'a> {
    page: &'a Page,
    report: &'a RefreshReport,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// One page load: a fresh shell refreshed once by the orchestrator
async fn load_page(state: &AppState) -> Result<(Page, RefreshReport), SurfaceError> {
    let mut page = Page::dashboard_shell();
    let mut context = DashboardContext::default();
    let report = state
        .dashboard_service
        .refresh(&mut page, &mut context)
        .await?;
    Ok((page, report))
}

async fn respond(body: Vec<u8>, content_type: &'static str, compress: bool) -> Response {
    match encoded_response(body, content_type, compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Render the dashboard as an HTML document
pub async fn dashboard_page(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let compress = accepts_brotli(&headers);

    match load_page(&state).await {
        Ok((page, _report)) => {
            let html = render_page(&page, &state.display, chrono::Local::now()).into_string();
            respond(html.into_bytes(), HTML_CONTENT_TYPE, compress).await
        }
        Err(e) => {
            tracing::error!("Dashboard page setup error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Page contents, live chart configurations and the refresh report as JSON
pub async fn dashboard_snapshot(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let compress = accepts_brotli(&headers);

    let (page, report) = match load_page(&state).await {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("Dashboard page setup error: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let snapshot = DashboardSnapshot {
        page: &page,
        report: &report,
    };
    match serde_json::to_vec(&snapshot) {
        Ok(body) => respond(body, JSON_CONTENT_TYPE, compress).await,
        Err(e) => {
            tracing::error!("Snapshot serialization error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::DashboardService;
    use crate::domain::format::Formatter;
    use crate::domain::resource::Resource;
    use crate::infrastructure::config::DisplaySettings;
    use crate::infrastructure::mock_source::MockDataSource;
    use crate::presentation::router;
    use axum::http::{header, HeaderValue};
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use std::time::Duration;

    fn server(source: MockDataSource) -> TestServer {
        let state = Arc::new(AppState {
            dashboard_service: DashboardService::new(Arc::new(source), Formatter::default()),
            display: DisplaySettings::default(),
        });
        TestServer::new(router(state)).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let server = server(MockDataSource::immediate());
        let response = server.get("/healthz").await;
        response.assert_status_ok();
        assert_eq!(response.text(), "ok");
    }

    #[tokio::test]
    async fn test_dashboard_page_renders_sample_data() {
        let server = server(MockDataSource::sample(Duration::ZERO));
        let response = server.get("/").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("₺2.4M"));
        assert!(html.contains("Wireless Headphones"));
        assert!(html.contains("Online Store"));
        assert!(html.contains(r#""revenueTrendChart":{"type":"line""#));
    }

    #[tokio::test]
    async fn test_dashboard_page_brotli() {
        let server = server(MockDataSource::sample(Duration::ZERO));
        let response = server
            .get("/")
            .add_header(header::ACCEPT_ENCODING, HeaderValue::from_static("br"))
            .await;

        response.assert_status_ok();
        assert_eq!(response.headers()[header::CONTENT_ENCODING], "br");
    }

    #[tokio::test]
    async fn test_snapshot_reports_sections() {
        let server = server(MockDataSource::sample(Duration::ZERO).with_payload(Resource::TopProducts, json!([])));
        let response = server.get("/dashboard.json").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["report"]["sections"][0]["resource"], "metrics");
        assert_eq!(body["report"]["sections"][0]["outcome"], "rendered");
        assert_eq!(body["report"]["sections"][3]["outcome"], "absent");
        assert_eq!(body["page"]["elements"]["totalRevenue"]["text"], "₺2.4M");
        assert_eq!(
            body["page"]["canvases"]["salesChannelChart"]["chart"]["config"]["type"],
            "doughnut"
        );
        assert_eq!(
            body["page"]["elements"]["topProductsGrid"]["children"][0]["class"],
            "empty-row"
        );
    }
}
