// Metrics updater - headline figures and their change badges
use super::{ids, SectionOutcome, MISSING_VALUE};
use crate::application::surface::{Surface, SurfaceError};
use crate::domain::format::Formatter;
use crate::domain::sales::MetricsSnapshot;

pub fn update_metrics(
    surface: &mut dyn Surface,
    metrics: Option<&MetricsSnapshot>,
    formatter: &Formatter,
) -> Result<SectionOutcome, SurfaceError> {
    let Some(metrics) = metrics else {
        return Ok(SectionOutcome::Absent);
    };

    let fields = [
        (ids::TOTAL_REVENUE, &metrics.total_revenue),
        (ids::CONVERSION_RATE, &metrics.conversion_rate),
        (ids::AVERAGE_BASKET, &metrics.average_basket),
        (ids::TOTAL_ORDERS, &metrics.total_orders),
    ];
    for (id, value) in fields {
        surface.set_text(id, value.as_deref().unwrap_or(MISSING_VALUE))?;
    }

    // Absent change fields leave their badge untouched
    let changes = [
        (ids::TOTAL_REVENUE_CHANGE, metrics.revenue_change),
        (ids::CONVERSION_RATE_CHANGE, metrics.conversion_change),
        (ids::AVERAGE_BASKET_CHANGE, metrics.basket_change),
        (ids::TOTAL_ORDERS_CHANGE, metrics.orders_change),
    ];
    for (id, change) in changes {
        if let Some(change) = change {
            surface.set_text(id, &formatter.change(change))?;
        }
    }

    Ok(SectionOutcome::Rendered)
}
