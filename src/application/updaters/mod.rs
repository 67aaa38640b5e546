// View updaters - one per resource, each mutating a single page region
pub mod channel;
pub mod metrics;
pub mod products;
pub mod trend;

use serde::Serialize;

pub use channel::update_channel_chart;
pub use metrics::update_metrics;
pub use products::update_products;
pub use trend::update_trend_chart;

/// Placeholder shown for any value the data source did not provide
pub const MISSING_VALUE: &str = "N/A";

/// Insertion points of the dashboard page shell
pub mod ids {
    pub const TOTAL_REVENUE: &str = "totalRevenue";
    pub const CONVERSION_RATE: &str = "conversionRate";
    pub const AVERAGE_BASKET: &str = "averageBasket";
    pub const TOTAL_ORDERS: &str = "totalOrders";
    pub const TOTAL_REVENUE_CHANGE: &str = "totalRevenueChange";
    pub const CONVERSION_RATE_CHANGE: &str = "conversionRateChange";
    pub const AVERAGE_BASKET_CHANGE: &str = "averageBasketChange";
    pub const TOTAL_ORDERS_CHANGE: &str = "totalOrdersChange";
    pub const CHANNEL_LEGEND: &str = "channelLegend";
    pub const TOP_PRODUCTS: &str = "topProductsGrid";

    pub const REVENUE_TREND_CANVAS: &str = "revenueTrendChart";
    pub const SALES_CHANNEL_CANVAS: &str = "salesChannelChart";

    pub const ELEMENTS: [&str; 10] = [
        TOTAL_REVENUE,
        CONVERSION_RATE,
        AVERAGE_BASKET,
        TOTAL_ORDERS,
        TOTAL_REVENUE_CHANGE,
        CONVERSION_RATE_CHANGE,
        AVERAGE_BASKET_CHANGE,
        TOTAL_ORDERS_CHANGE,
        CHANNEL_LEGEND,
        TOP_PRODUCTS,
    ];

    pub const CANVASES: [&str; 2] = [REVENUE_TREND_CANVAS, SALES_CHANNEL_CANVAS];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionOutcome {
    Rendered,
    Absent,
}
