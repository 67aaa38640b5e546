// Channel-chart updater - sales mix doughnut and its hand-built legend
use super::{ids, SectionOutcome};
use crate::application::surface::{ChartSlot, Node, Surface, SurfaceError};
use crate::domain::chart::{ChartConfig, DoughnutChart};
use crate::domain::sales::ChannelMix;
use maud::html;

pub const LEGEND_ROW_CLASS: &str = "legend-row";

pub fn update_channel_chart(
    surface: &mut dyn Surface,
    slot: &mut ChartSlot,
    mix: Option<&ChannelMix>,
) -> Result<SectionOutcome, SurfaceError> {
    let Some(mix) = mix else {
        return Ok(SectionOutcome::Absent);
    };
    let Some((labels, values)) = mix.complete() else {
        return Ok(SectionOutcome::Absent);
    };

    if labels.len() != values.len() {
        tracing::warn!(
            labels = labels.len(),
            values = values.len(),
            "Channel labels and values differ in length; charting matched pairs only"
        );
    }

    let total = mix.total();
    if (total - 100.0).abs() > f64::EPSILON * 100.0 {
        tracing::debug!(total, "Channel shares do not sum to 100");
    }

    let chart = DoughnutChart::channels(labels, values);
    let legend: Vec<(String, String)> = chart
        .labels
        .iter()
        .cloned()
        .zip(chart.colors.iter().cloned())
        .collect();

    slot.replace(surface, ids::SALES_CHANNEL_CANVAS, ChartConfig::Doughnut(chart))?;

    surface.clear(ids::CHANNEL_LEGEND)?;
    for (label, color) in legend {
        let row = html! {
            div class="legend-item" {
                span class="legend-color" style=(format!("background-color: {}", color)) {}
                span class="legend-label" { (label) }
            }
        };
        surface.append(ids::CHANNEL_LEGEND, Node::new(LEGEND_ROW_CLASS, row))?;
    }

    Ok(SectionOutcome::Rendered)
}
