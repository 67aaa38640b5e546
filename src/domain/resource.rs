// Resource identifiers for the four dashboard data feeds
use serde::Serialize;
use std::fmt;

/// JSON shape a resource payload must have to be decoded at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    Object,
    /// Array of objects
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Metrics,
    RevenueTrend,
    SalesByChannel,
    TopProducts,
}

impl Resource {
    /// Fetch order used by the orchestrator
    pub const ALL: [Resource; 4] = [
        Resource::Metrics,
        Resource::RevenueTrend,
        Resource::SalesByChannel,
        Resource::TopProducts,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Resource::Metrics => "metrics",
            Resource::RevenueTrend => "revenue_trend",
            Resource::SalesByChannel => "sales_by_channel",
            Resource::TopProducts => "top_products",
        }
    }

    pub fn shape(&self) -> PayloadShape {
        match self {
            Resource::TopProducts => PayloadShape::List,
            _ => PayloadShape::Object,
        }
    }

    /// Default path under the sales revenue API prefix
    pub fn default_endpoint(&self) -> &'static str {
        match self {
            Resource::Metrics => "/api/sales_revenue/top_metrics",
            Resource::RevenueTrend => "/api/sales_revenue/revenue_trend",
            Resource::SalesByChannel => "/api/sales_revenue/sales_by_channel",
            Resource::TopProducts => "/api/sales_revenue/top_products",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_endpoints_are_distinct() {
        let endpoints: HashSet<&str> = Resource::ALL.iter().map(|r| r.default_endpoint()).collect();
        assert_eq!(endpoints.len(), Resource::ALL.len());

        // No endpoint is a prefix of another, so lookups can never cross-match
        for a in Resource::ALL {
            for b in Resource::ALL {
                if a != b {
                    assert!(!a.default_endpoint().starts_with(b.default_endpoint()));
                }
            }
        }
    }

    #[test]
    fn test_fetch_order() {
        assert_eq!(Resource::ALL[0], Resource::Metrics);
        assert_eq!(Resource::ALL[3], Resource::TopProducts);
        assert_eq!(Resource::SalesByChannel.to_string(), "sales_by_channel");
    }

    #[test]
    fn test_only_products_are_a_list() {
        for resource in Resource::ALL {
            let expected = if resource == Resource::TopProducts {
                PayloadShape::List
            } else {
                PayloadShape::Object
            };
            assert_eq!(resource.shape(), expected);
        }
    }
}
