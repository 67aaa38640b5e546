//! HTML rendering of a refreshed dashboard page.
//!
//! The page shell places every insertion point of [`Page`] into the layout and
//! hands live chart configurations to Chart.js through a small bootstrap
//! script. Tooltip text is computed server-side; axis ticks are labelled in
//! the browser from the serialized `yTicks` prefix, divisor and suffix.

use crate::application::updaters::ids;
use crate::infrastructure::config::DisplaySettings;
use crate::infrastructure::page::Page;
use chrono::{DateTime, Local};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use std::collections::BTreeMap;

struct MetricCard {
    label: &'static str,
    value_id: &'static str,
    change_id: &'static str,
}

const METRIC_CARDS: [MetricCard; 4] = [
    MetricCard {
        label: "Total Revenue",
        value_id: ids::TOTAL_REVENUE,
        change_id: ids::TOTAL_REVENUE_CHANGE,
    },
    MetricCard {
        label: "Conversion Rate",
        value_id: ids::CONVERSION_RATE,
        change_id: ids::CONVERSION_RATE_CHANGE,
    },
    MetricCard {
        label: "Average Basket",
        value_id: ids::AVERAGE_BASKET,
        change_id: ids::AVERAGE_BASKET_CHANGE,
    },
    MetricCard {
        label: "Total Orders",
        value_id: ids::TOTAL_ORDERS,
        change_id: ids::TOTAL_ORDERS_CHANGE,
    },
];

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f8fafc; color: #0f172a; }
.dashboard { max-width: 1200px; margin: 0 auto; padding: 24px; }
.metrics-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px; }
.metric-card, .chart-card, .products-section { background: #fff; border-radius: 12px; padding: 20px; box-shadow: 0 1px 3px rgba(15, 23, 42, 0.08); }
.metric-label { font-size: 13px; color: #64748b; }
.metric-value { font-size: 28px; font-weight: 600; margin-top: 6px; }
.metric-change { font-size: 13px; margin-top: 4px; color: #64748b; }
.charts-grid { display: grid; grid-template-columns: 2fr 1fr; gap: 16px; margin: 16px 0; }
.chart-legend { margin-top: 12px; }
.legend-item { display: flex; align-items: center; gap: 8px; font-size: 13px; margin-bottom: 6px; }
.legend-color { width: 12px; height: 12px; border-radius: 50%; display: inline-block; }
.products-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 12px; }
.product-card { display: flex; align-items: center; gap: 12px; padding: 12px; border: 1px solid #e2e8f0; border-radius: 10px; }
.product-icon img { border-radius: 8px; object-fit: cover; }
.product-name { font-weight: 500; }
.product-price { color: #4f46e5; font-weight: 600; }
.no-data { color: #94a3b8; text-align: center; padding: 24px; }
footer { color: #94a3b8; font-size: 12px; margin-top: 16px; }
"#;

const CHART_BOOTSTRAP: &str = r#"
function buildChart(config) {
  const tooltip = { callbacks: { label: (ctx) => config.tooltipLabels[ctx.dataIndex] } };
  if (config.type === "line") {
    const ticks = config.yTicks;
    return {
      type: "line",
      data: {
        labels: config.labels,
        datasets: [{
          label: config.datasetLabel,
          data: config.values,
          borderColor: config.borderColor,
          backgroundColor: config.backgroundColor,
          fill: true,
          tension: 0.4
        }]
      },
      options: {
        responsive: true,
        plugins: { legend: { display: false }, tooltip },
        scales: { y: { ticks: { callback: (value) => ticks.prefix + value / ticks.divisor + ticks.suffix } } }
      }
    };
  }
  return {
    type: "doughnut",
    data: {
      labels: config.labels,
      datasets: [{ data: config.values, backgroundColor: config.colors, borderWidth: 0 }]
    },
    options: { responsive: true, cutout: config.cutout, plugins: { legend: { display: false }, tooltip } }
  };
}
document.addEventListener("DOMContentLoaded", function () {
  for (const [canvasId, config] of Object.entries(DASHBOARD_CHARTS)) {
    const canvas = document.getElementById(canvasId);
    if (canvas) {
      new Chart(canvas, buildChart(config));
    }
  }
});
"#;

/// Render an element's text followed by its rendered children
fn region(page: &Page, id: &str) -> Markup {
    html! {
        @if let Some(text) = page.text(id) {
            (text)
        }
        @for node in page.children(id) {
            (PreEscaped(&node.html))
        }
    }
}

/// Inline script declaring the live charts, keyed by canvas id
fn charts_script(page: &Page) -> PreEscaped<String> {
    let charts: BTreeMap<&str, _> = page
        .live_charts()
        .map(|(canvas, chart)| (canvas, &chart.config))
        .collect();

    let json = serde_json::to_string(&charts).unwrap_or_else(|e| {
        tracing::error!("Chart config serialization error: {}", e);
        "{}".to_string()
    });

    PreEscaped(format!(
        "const DASHBOARD_CHARTS = {};\n{}",
        json.replace("</", "<\\/"),
        CHART_BOOTSTRAP
    ))
}

pub fn render_page(page: &Page, display: &DisplaySettings, rendered_at: DateTime<Local>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (display.title) }
                style { (PreEscaped(STYLES)) }
                script src=(display.chart_js_url) {}
            }
            body {
                main class="dashboard" {
                    h1 { (display.title) }

                    section class="metrics-grid" {
                        @for card in &METRIC_CARDS {
                            div class="metric-card" {
                                div class="metric-label" { (card.label) }
                                div class="metric-value" id=(card.value_id) { (region(page, card.value_id)) }
                                div class="metric-change" id=(card.change_id) { (region(page, card.change_id)) }
                            }
                        }
                    }

                    section class="charts-grid" {
                        div class="chart-card" {
                            h2 { "Revenue Trend" }
                            canvas id=(ids::REVENUE_TREND_CANVAS) {}
                        }
                        div class="chart-card" {
                            h2 { "Sales by Channel" }
                            canvas id=(ids::SALES_CHANNEL_CANVAS) {}
                            div class="chart-legend" id=(ids::CHANNEL_LEGEND) { (region(page, ids::CHANNEL_LEGEND)) }
                        }
                    }

                    section class="products-section" {
                        h2 { "Top Selling Products" }
                        div class="products-grid" id=(ids::TOP_PRODUCTS) { (region(page, ids::TOP_PRODUCTS)) }
                    }

                    footer { "Last updated: " (rendered_at.format("%Y-%m-%d %H:%M").to_string()) }
                }
                script { (charts_script(page)) }
            }
        }
    }
}
