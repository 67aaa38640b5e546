// In-memory data source with simulated network latency
use crate::application::data_source::{DataSource, SourceError};
use crate::domain::resource::Resource;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;

/// How long a mock request takes to settle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latency {
    Immediate,
    Fixed(Duration),
    /// The request never settles, like a hung connection
    Never,
}

impl Latency {
    async fn settle(self) {
        match self {
            Latency::Immediate => {}
            Latency::Fixed(delay) => tokio::time::sleep(delay).await,
            Latency::Never => std::future::pending::<()>().await,
        }
    }
}

impl From<Duration> for Latency {
    fn from(delay: Duration) -> Self {
        if delay.is_zero() {
            Latency::Immediate
        } else {
            Latency::Fixed(delay)
        }
    }
}

#[derive(Debug, Clone)]
pub struct MockDataSource {
    payloads: HashMap<Resource, Value>,
    latency: Latency,
    overrides: HashMap<Resource, Latency>,
}

impl MockDataSource {
    /// A source with nothing registered
    pub fn new(latency: impl Into<Latency>) -> Self {
        Self {
            payloads: HashMap::new(),
            latency: latency.into(),
            overrides: HashMap::new(),
        }
    }

    pub fn immediate() -> Self {
        Self::new(Latency::Immediate)
    }

    /// The fixed sample dashboard data
    pub fn sample(delay: Duration) -> Self {
        Resource::ALL
            .into_iter()
            .fold(Self::new(delay), |source, resource| {
                source.with_payload(resource, sample_payload(resource))
            })
    }

    pub fn with_payload(mut self, resource: Resource, payload: Value) -> Self {
        self.payloads.insert(resource, payload);
        self
    }

    pub fn with_latency(mut self, resource: Resource, latency: Latency) -> Self {
        self.overrides.insert(resource, latency);
        self
    }

    fn latency_for(&self, resource: Resource) -> Latency {
        self.overrides.get(&resource).copied().unwrap_or(self.latency)
    }
}

#[async_trait]
impl DataSource for MockDataSource {
    async fn fetch(&self, resource: Resource) -> Result<Value, SourceError> {
        self.latency_for(resource).settle().await;

        tracing::debug!(%resource, "Serving mock payload");
        self.payloads
            .get(&resource)
            .cloned()
            .ok_or(SourceError::NotRegistered(resource))
    }
}

fn sample_payload(resource: Resource) -> Value {
    match resource {
        Resource::Metrics => json!({
            "totalRevenue": "₺2.4M",
            "conversionRate": "3.47%",
            "averageBasket": "₺347",
            "totalOrders": "6,847",
            "revenueChange": 12.5,
            "conversionChange": 0.8,
            "basketChange": -2.3,
            "ordersChange": 8.1
        }),
        Resource::RevenueTrend => json!({
            "labels": ["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
            "values": [1850000, 1920000, 2100000, 1980000, 2250000, 2400000]
        }),
        Resource::SalesByChannel => json!({
            "labels": ["Online Store", "Mobile App", "Marketplace", "Social Media"],
            "values": [45, 28, 17, 10]
        }),
        Resource::TopProducts => json!([
            {
                "name": "Wireless Headphones",
                "price": 2499,
                "iconUrl": "https://cdn.example.com/products/headphones.png"
            },
            { "name": "Smart Watch", "price": 4999, "iconBgColor": "#10B981" },
            { "name": "Laptop Stand", "price": 899, "iconBgColor": "#F59E0B" },
            {
                "name": "Mechanical Keyboard",
                "price": 1749,
                "iconUrl": "https://cdn.example.com/products/keyboard.png"
            },
            { "name": "USB-C Hub", "price": 649.9, "iconBgColor": "#EC4899" },
            { "name": "Webcam HD", "price": 1299 }
        ]),
    }
}
