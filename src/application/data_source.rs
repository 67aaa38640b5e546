// Data source trait for the dashboard resources
use crate::domain::resource::Resource;
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("no data registered for resource {0}")]
    NotRegistered(Resource),
    #[error("request for {resource} failed: {source}")]
    Transport {
        resource: Resource,
        #[source]
        source: reqwest::Error,
    },
    #[error("request for {resource} returned status {status}")]
    Status {
        resource: Resource,
        status: reqwest::StatusCode,
    },
    #[error("payload for {resource} is not valid JSON: {source}")]
    Decode {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch the raw JSON payload for one resource
    async fn fetch(&self, resource: Resource) -> Result<serde_json::Value, SourceError>;
}
