// Fetcher - Typed, failure-absorbing access to a data source
use crate::application::data_source::DataSource;
use crate::domain::resource::{PayloadShape, Resource};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct Fetcher {
    source: Arc<dyn DataSource>,
}

impl Fetcher {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    /// Fetch and decode one resource.
    ///
    /// Returns `None` ("absent") on any transport, status or decode failure;
    /// errors are only reported as diagnostics and never reach the caller.
    pub async fn fetch<T: DeserializeOwned>(&self, resource: Resource) -> Option<T> {
        let value = match self.source.fetch(resource).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(%resource, "Error fetching resource: {}", e);
                return None;
            }
        };

        if value.is_null() {
            tracing::debug!(%resource, "Resource returned null payload");
            return None;
        }

        let value = conform(resource, value)?;

        match serde_json::from_value(value) {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::warn!(%resource, "Unexpected payload shape: {}", e);
                None
            }
        }
    }
}

/// Checks the top-level payload shape before decoding. Serde would otherwise
/// accept a JSON array as a positional struct. List items that are not
/// objects are dropped individually.
fn conform(resource: Resource, value: Value) -> Option<Value> {
    match (resource.shape(), value) {
        (PayloadShape::Object, value @ Value::Object(_)) => Some(value),
        (PayloadShape::List, Value::Array(items)) => {
            let total = items.len();
            let items: Vec<Value> = items.into_iter().filter(Value::is_object).collect();
            if items.len() < total {
                tracing::warn!(%resource, dropped = total - items.len(), "Skipping non-object list items");
            }
            Some(Value::Array(items))
        }
        (shape, other) => {
            tracing::warn!(%resource, ?shape, "Unexpected payload shape: {}", json_kind(&other));
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
