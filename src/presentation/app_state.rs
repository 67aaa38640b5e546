// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::DisplaySettings;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub display: DisplaySettings,
}
