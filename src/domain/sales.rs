// Sales revenue domain models
//
// Payload fields are decoded leniently: a field that is missing or has the
// wrong shape becomes `None` instead of failing the whole payload, so each
// updater can decide how to degrade.
use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    #[serde(default, deserialize_with = "lenient_text")]
    pub total_revenue: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub conversion_rate: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub average_basket: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub total_orders: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub revenue_change: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub conversion_change: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub basket_change: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub orders_change: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    #[serde(default, deserialize_with = "lenient")]
    pub labels: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub values: Option<Vec<f64>>,
}

impl TrendSeries {
    /// Labels and values, only when both are present
    pub fn complete(&self) -> Option<(&[String], &[f64])> {
        match (&self.labels, &self.values) {
            (Some(labels), Some(values)) => Some((labels, values)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelMix {
    #[serde(default, deserialize_with = "lenient")]
    pub labels: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub values: Option<Vec<f64>>,
}

impl ChannelMix {
    pub fn complete(&self) -> Option<(&[String], &[f64])> {
        match (&self.labels, &self.values) {
            (Some(labels), Some(values)) => Some((labels, values)),
            _ => None,
        }
    }

    /// Sum of all channel shares; expected to be 100 but never enforced
    pub fn total(&self) -> f64 {
        self.values.as_deref().unwrap_or_default().iter().sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub icon_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub icon_bg_color: Option<String>,
}

impl ProductSummary {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Remote icon, ignoring blank URLs
    pub fn remote_icon(&self) -> Option<&str> {
        self.icon_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
impl TrendSeries {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            labels: Some(labels),
            values: Some(values),
        }
    }
}

#[cfg(test)]
impl ChannelMix {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            labels: Some(labels),
            values: Some(values),
        }
    }
}

#[cfg(test)]
impl ProductSummary {
    pub fn new(name: &str, price: f64) -> Self {
        Self {
            name: Some(name.to_string()),
            price: Some(price),
            icon_url: None,
            icon_bg_color: None,
        }
    }

    pub fn with_icon_url(mut self, url: &str) -> Self {
        self.icon_url = Some(url.to_string());
        self
    }

    pub fn with_icon_bg_color(mut self, color: &str) -> Self {
        self.icon_bg_color = Some(color.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metrics_missing_and_malformed_fields() {
        let metrics: MetricsSnapshot = serde_json::from_value(json!({
            "totalRevenue": "₺2.4M",
            "conversionRate": null,
            "averageBasket": 347,
            "totalOrders": ["6,847"],
            "revenueChange": "12.5"
        }))
        .unwrap();

        assert_eq!(metrics.total_revenue.as_deref(), Some("₺2.4M"));
        assert_eq!(metrics.conversion_rate, None);
        assert_eq!(metrics.average_basket.as_deref(), Some("347"));
        assert_eq!(metrics.total_orders, None);
        assert_eq!(metrics.revenue_change, Some(12.5));
        assert_eq!(metrics.orders_change, None);
    }

    #[test]
    fn test_trend_incomplete() {
        let trend: TrendSeries = serde_json::from_value(json!({
            "labels": ["Jan", "Feb"],
            "values": "oops"
        }))
        .unwrap();
        assert!(trend.complete().is_none());

        let trend: TrendSeries = serde_json::from_value(json!({
            "labels": ["Jan", "Feb"],
            "values": [1.0, 2.0]
        }))
        .unwrap();
        let (labels, values) = trend.complete().unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(values, &[1.0, 2.0]);
    }

    #[test]
    fn test_channel_total_is_not_enforced() {
        let mix = ChannelMix::new(vec!["Web".into(), "App".into()], vec![60.0, 30.0]);
        assert_eq!(mix.total(), 90.0);
        assert!(mix.complete().is_some());
    }

    #[test]
    fn test_product_remote_icon_ignores_blank() {
        let product: ProductSummary = serde_json::from_value(json!({
            "name": "Kahve Makinesi",
            "price": "1249.90",
            "iconUrl": "   "
        }))
        .unwrap();

        assert_eq!(product.display_name(), "Kahve Makinesi");
        assert_eq!(product.price, Some(1249.9));
        assert_eq!(product.remote_icon(), None);
    }
}
