use crate::domain::format::{Formatter, NumberLocale};
use crate::domain::resource::Resource;
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "config/dashboard";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data_source: DataSourceSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Mock,
    Http,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataSourceSettings {
    #[serde(default)]
    pub kind: SourceKind,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub endpoints: EndpointSettings,
    #[serde(default = "default_mock_delay_ms")]
    pub mock_delay_ms: u64,
}

impl Default for DataSourceSettings {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            base_url: default_base_url(),
            endpoints: EndpointSettings::default(),
            mock_delay_ms: default_mock_delay_ms(),
        }
    }
}

impl DataSourceSettings {
    pub fn mock_delay(&self) -> Duration {
        Duration::from_millis(self.mock_delay_ms)
    }
}

/// Endpoint path per resource, relative to the base URL
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EndpointSettings {
    pub metrics: String,
    pub revenue_trend: String,
    pub sales_by_channel: String,
    pub top_products: String,
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            metrics: Resource::Metrics.default_endpoint().to_string(),
            revenue_trend: Resource::RevenueTrend.default_endpoint().to_string(),
            sales_by_channel: Resource::SalesByChannel.default_endpoint().to_string(),
            top_products: Resource::TopProducts.default_endpoint().to_string(),
        }
    }
}

impl EndpointSettings {
    pub fn path(&self, resource: Resource) -> &str {
        match resource {
            Resource::Metrics => &self.metrics,
            Resource::RevenueTrend => &self.revenue_trend,
            Resource::SalesByChannel => &self.sales_by_channel,
            Resource::TopProducts => &self.top_products,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DisplaySettings {
    pub title: String,
    pub currency_symbol: String,
    pub locale: String,
    pub chart_js_url: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            title: "Sales & Revenue".to_string(),
            currency_symbol: "₺".to_string(),
            locale: NumberLocale::default().tag().to_string(),
            chart_js_url: "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js".to_string(),
        }
    }
}

impl DisplaySettings {
    pub fn formatter(&self) -> Formatter {
        let locale = self.locale.parse().unwrap_or_else(|e| {
            tracing::warn!("{}; falling back to {}", e, NumberLocale::default().tag());
            NumberLocale::default()
        });
        Formatter::new(locale, &self.currency_symbol)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_mock_delay_ms() -> u64 {
    400
}

/// Load settings from `<path>.toml`; a missing file yields the defaults
pub fn load_dashboard_config(path: &str) -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}
