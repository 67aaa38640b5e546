// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::data_source::DataSource;
use crate::infrastructure::config::{load_dashboard_config, SourceKind, DEFAULT_CONFIG_PATH};
use crate::infrastructure::http_source::HttpDataSource;
use crate::infrastructure::mock_source::MockDataSource;
use crate::presentation::app_state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config(DEFAULT_CONFIG_PATH)?;

    // Create data source (infrastructure layer)
    let source: Arc<dyn DataSource> = match config.data_source.kind {
        SourceKind::Mock => {
            tracing::info!(
                delay_ms = config.data_source.mock_delay_ms,
                "Using mock data source"
            );
            Arc::new(MockDataSource::sample(config.data_source.mock_delay()))
        }
        SourceKind::Http => {
            tracing::info!(base_url = %config.data_source.base_url, "Using HTTP data source");
            Arc::new(HttpDataSource::new(
                &config.data_source.base_url,
                config.data_source.endpoints.clone(),
            ))
        }
    };

    // Create services (application layer)
    let dashboard_service = DashboardService::new(source, config.display.formatter());

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service,
        display: config.display.clone(),
    });

    // Build router (presentation layer)
    let router = presentation::router(state);

    // Start server
    let addr = config.server.socket_addr()?;
    tracing::info!("Starting sales-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
