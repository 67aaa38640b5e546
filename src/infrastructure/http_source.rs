// HTTP data source - JSON resources served by the sales revenue API
use crate::application::data_source::{DataSource, SourceError};
use crate::domain::resource::Resource;
use crate::infrastructure::config::EndpointSettings;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct HttpDataSource {
    client: reqwest::Client,
    base_url: String,
    endpoints: EndpointSettings,
}

impl HttpDataSource {
    pub fn new(base_url: &str, endpoints: EndpointSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            endpoints,
        }
    }

    pub fn url_for(&self, resource: Resource) -> String {
        let path = self.endpoints.path(resource);
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn fetch(&self, resource: Resource) -> Result<serde_json::Value, SourceError> {
        let url = self.url_for(resource);
        tracing::debug!(%resource, %url, "Fetching resource");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| SourceError::Transport { resource, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status { resource, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| SourceError::Transport { resource, source })?;

        serde_json::from_slice(&body).map_err(|source| SourceError::Decode { resource, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Json, Router};
    use serde_json::json;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/", addr)
    }

    #[test]
    fn test_url_for_joins_paths() {
        let mut endpoints = EndpointSettings::default();
        endpoints.metrics = "metrics.json".to_string();
        let source = HttpDataSource::new("http://localhost:5000/", endpoints);

        assert_eq!(source.url_for(Resource::Metrics), "http://localhost:5000/metrics.json");
        assert_eq!(
            source.url_for(Resource::TopProducts),
            "http://localhost:5000/api/sales_revenue/top_products"
        );
    }

    #[tokio::test]
    async fn test_fetch_json_and_errors() {
        let router = Router::new()
            .route(
                "/api/sales_revenue/revenue_trend",
                get(|| async { Json(json!({"labels": ["Jan"], "values": [1]})) }),
            )
            .route(
                "/api/sales_revenue/top_metrics",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            )
            .route("/api/sales_revenue/top_products", get(|| async { "not json" }));
        let base_url = serve(router).await;
        let source = HttpDataSource::new(&base_url, EndpointSettings::default());

        let trend = source.fetch(Resource::RevenueTrend).await.unwrap();
        assert_eq!(trend["labels"][0], "Jan");

        let metrics = source.fetch(Resource::Metrics).await;
        assert!(matches!(
            metrics,
            Err(SourceError::Status { status, .. }) if status == StatusCode::INTERNAL_SERVER_ERROR
        ));

        let products = source.fetch(Resource::TopProducts).await;
        assert!(matches!(products, Err(SourceError::Decode { .. })));

        let channels = source.fetch(Resource::SalesByChannel).await;
        assert!(matches!(channels, Err(SourceError::Status { .. })));
    }

    #[tokio::test]
    async fn test_refused_connection_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = HttpDataSource::new(&format!("http://{}", addr), EndpointSettings::default());
        let result = source.fetch(Resource::Metrics).await;

        assert!(matches!(
            result,
            Err(SourceError::Transport { resource: Resource::Metrics, .. })
        ));
    }
}
