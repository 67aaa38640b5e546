// Chart configurations handed to the page's chart renderer
use super::format::Formatter;
use serde::Serialize;

/// Channel colors; the last entry is shared by every channel past the fourth
pub const CHANNEL_PALETTE: [&str; 5] = [
    "#4F46E5", // Indigo
    "#10B981", // Emerald
    "#F59E0B", // Amber
    "#EC4899", // Pink
    "#94A3B8", // Slate (overflow)
];

pub const OVERFLOW_COLOR_INDEX: usize = CHANNEL_PALETTE.len() - 1;

pub const DOUGHNUT_CUTOUT: &str = "70%";

const TREND_LINE_COLOR: &str = "#4F46E5";
const TREND_FILL_COLOR: &str = "rgba(79, 70, 229, 0.1)";

/// Assigns palette colors to `count` channels in order
pub fn channel_colors(count: usize) -> Vec<&'static str> {
    (0..count)
        .map(|i| CHANNEL_PALETTE[i.min(OVERFLOW_COLOR_INDEX)])
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ChartConfig {
    Line(LineChart),
    Doughnut(DoughnutChart),
}

#[cfg(test)]
impl ChartConfig {
    pub fn kind(&self) -> &'static str {
        match self {
            ChartConfig::Line(_) => "line",
            ChartConfig::Doughnut(_) => "doughnut",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickFormat {
    pub prefix: String,
    pub divisor: f64,
    pub suffix: String,
}

impl TickFormat {
    /// Thousands of the display currency, e.g. `₺1850K`
    pub fn thousands(currency_symbol: &str) -> Self {
        Self {
            prefix: currency_symbol.to_string(),
            divisor: 1000.0,
            suffix: "K".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChart {
    pub dataset_label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
    pub y_ticks: TickFormat,
    pub tooltip_labels: Vec<String>,
}

impl LineChart {
    pub fn revenue(labels: &[String], values: &[f64], formatter: &Formatter) -> Self {
        let points = labels.len().min(values.len());
        let labels = labels[..points].to_vec();
        let values = values[..points].to_vec();
        let tooltip_labels = values.iter().map(|v| formatter.currency(*v)).collect();

        Self {
            dataset_label: "Revenue".to_string(),
            labels,
            values,
            border_color: TREND_LINE_COLOR.to_string(),
            background_color: TREND_FILL_COLOR.to_string(),
            y_ticks: TickFormat::thousands(&formatter.currency_symbol),
            tooltip_labels,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoughnutChart {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<String>,
    pub cutout: String,
    pub tooltip_labels: Vec<String>,
}

impl DoughnutChart {
    /// Labels and values are paired up; extra entries on either side are dropped
    pub fn channels(labels: &[String], values: &[f64]) -> Self {
        let pairs = labels.len().min(values.len());
        let labels = labels[..pairs].to_vec();
        let values = values[..pairs].to_vec();
        let colors = channel_colors(pairs)
            .into_iter()
            .map(String::from)
            .collect();
        let tooltip_labels = labels
            .iter()
            .zip(&values)
            .map(|(label, value)| format!("{}: {}%", label, value))
            .collect();

        Self {
            labels,
            values,
            colors,
            cutout: DOUGHNUT_CUTOUT.to_string(),
            tooltip_labels,
        }
    }
}
