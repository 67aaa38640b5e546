// Trend-chart updater - monthly revenue line chart
use super::{ids, SectionOutcome};
use crate::application::surface::{ChartSlot, Surface, SurfaceError};
use crate::domain::chart::{ChartConfig, LineChart};
use crate::domain::format::Formatter;
use crate::domain::sales::TrendSeries;

pub fn update_trend_chart(
    surface: &mut dyn Surface,
    slot: &mut ChartSlot,
    trend: Option<&TrendSeries>,
    formatter: &Formatter,
) -> Result<SectionOutcome, SurfaceError> {
    let Some((labels, values)) = trend.and_then(TrendSeries::complete) else {
        return Ok(SectionOutcome::Absent);
    };

    if labels.len() != values.len() {
        tracing::warn!(
            labels = labels.len(),
            values = values.len(),
            "Trend labels and values differ in length; extra points dropped"
        );
    }

    let config = ChartConfig::Line(LineChart::revenue(labels, values, formatter));
    slot.replace(surface, ids::REVENUE_TREND_CANVAS, config)?;

    Ok(SectionOutcome::Rendered)
}
