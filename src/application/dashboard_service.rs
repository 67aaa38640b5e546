// Dashboard service - Sequential fetch-and-update refresh workflow
use crate::application::data_source::DataSource;
use crate::application::fetcher::Fetcher;
use crate::application::surface::{ChartSlot, Surface, SurfaceError};
use crate::application::updaters::{
    update_channel_chart, update_metrics, update_products, update_trend_chart, SectionOutcome,
};
use crate::domain::format::Formatter;
use crate::domain::resource::Resource;
use crate::domain::sales::{ChannelMix, MetricsSnapshot, ProductSummary, TrendSeries};
use serde::Serialize;
use std::sync::Arc;
use tokio::time::Instant;

/// Chart instances owned across refreshes of one page
#[derive(Debug, Default)]
pub struct DashboardContext {
    pub trend_chart: ChartSlot,
    pub channel_chart: ChartSlot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionReport {
    pub resource: Resource,
    pub outcome: SectionOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshReport {
    pub sections: Vec<SectionReport>,
    pub elapsed_ms: u64,
}

#[cfg(test)]
impl RefreshReport {
    pub fn outcome(&self, resource: Resource) -> Option<SectionOutcome> {
        self.sections
            .iter()
            .find(|s| s.resource == resource)
            .map(|s| s.outcome)
    }
}

#[derive(Clone)]
pub struct DashboardService {
    fetcher: Fetcher,
    formatter: Formatter,
}

impl DashboardService {
    pub fn new(source: Arc<dyn DataSource>, formatter: Formatter) -> Self {
        Self {
            fetcher: Fetcher::new(source),
            formatter,
        }
    }

    /// Run the four fetch/update pairs in order: metrics, trend, channels,
    /// products. Each fetch settles before the next one starts.
    ///
    /// Missing data never fails the refresh; only a page that lacks an
    /// insertion point does.
    pub async fn refresh<S: Surface + Send>(
        &self,
        surface: &mut S,
        context: &mut DashboardContext,
    ) -> Result<RefreshReport, SurfaceError> {
        let started = Instant::now();
        let mut sections = Vec::with_capacity(Resource::ALL.len());

        let metrics: Option<MetricsSnapshot> = self.fetcher.fetch(Resource::Metrics).await;
        let outcome = update_metrics(surface, metrics.as_ref(), &self.formatter)?;
        sections.push(Self::record(Resource::Metrics, outcome));

        let trend: Option<TrendSeries> = self.fetcher.fetch(Resource::RevenueTrend).await;
        let outcome = update_trend_chart(
            surface,
            &mut context.trend_chart,
            trend.as_ref(),
            &self.formatter,
        )?;
        sections.push(Self::record(Resource::RevenueTrend, outcome));

        let channels: Option<ChannelMix> = self.fetcher.fetch(Resource::SalesByChannel).await;
        let outcome = update_channel_chart(surface, &mut context.channel_chart, channels.as_ref())?;
        sections.push(Self::record(Resource::SalesByChannel, outcome));

        let products: Option<Vec<ProductSummary>> = self.fetcher.fetch(Resource::TopProducts).await;
        let outcome = update_products(surface, products.as_deref(), &self.formatter)?;
        sections.push(Self::record(Resource::TopProducts, outcome));

        let elapsed_ms = started.elapsed().as_millis() as u64;
        tracing::info!(elapsed_ms, "Dashboard refresh complete");

        Ok(RefreshReport {
            sections,
            elapsed_ms,
        })
    }

    fn record(resource: Resource, outcome: SectionOutcome) -> SectionReport {
        tracing::debug!(%resource, ?outcome, "Section updated");
        SectionReport { resource, outcome }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::data_source::SourceError;
    use crate::application::updaters::ids;
    use crate::application::updaters::products::{EMPTY_ROW_CLASS, PRODUCT_CARD_CLASS};
    use crate::infrastructure::mock_source::{Latency, MockDataSource};
    use crate::infrastructure::page::Page;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    fn service(source: MockDataSource) -> DashboardService {
        DashboardService::new(Arc::new(source), Formatter::default())
    }

    #[tokio::test(start_paused = true)]
    async fn test_sample_data_fills_every_region() {
        let service = service(MockDataSource::sample(Duration::from_millis(400)));
        let mut page = Page::dashboard_shell();
        let mut context = DashboardContext::default();

        let report = service.refresh(&mut page, &mut context).await.unwrap();

        for resource in Resource::ALL {
            assert_eq!(report.outcome(resource), Some(SectionOutcome::Rendered));
        }
        assert!(report.elapsed_ms >= 1600);

        assert_eq!(page.text(ids::TOTAL_REVENUE), Some("₺2.4M"));
        assert_eq!(page.text(ids::CONVERSION_RATE), Some("3.47%"));
        assert_eq!(page.text(ids::AVERAGE_BASKET), Some("₺347"));
        assert_eq!(page.text(ids::TOTAL_ORDERS), Some("6,847"));
        assert_eq!(page.live_chart_count(ids::REVENUE_TREND_CANVAS), 1);
        assert_eq!(page.live_chart_count(ids::SALES_CHANNEL_CANVAS), 1);
        assert_eq!(page.children(ids::CHANNEL_LEGEND).len(), 4);
        assert_eq!(page.children_with_class(ids::TOP_PRODUCTS, PRODUCT_CARD_CLASS).count(), 6);
        assert!(context.trend_chart.is_live());
        assert!(context.channel_chart.is_live());
    }

    #[tokio::test]
    async fn test_repeated_refresh_keeps_one_chart_per_canvas() {
        let service = service(MockDataSource::sample(Duration::ZERO));
        let mut page = Page::dashboard_shell();
        let mut context = DashboardContext::default();

        service.refresh(&mut page, &mut context).await.unwrap();
        service.refresh(&mut page, &mut context).await.unwrap();

        for canvas in ids::CANVASES {
            assert_eq!(page.live_chart_count(canvas), 1);
            assert_eq!(page.canvas(canvas).unwrap().attached, 2);
            assert_eq!(page.canvas(canvas).unwrap().destroyed, 1);
        }
    }

    #[tokio::test]
    async fn test_empty_source_degrades_without_error() {
        let service = service(MockDataSource::immediate());
        let mut page = Page::dashboard_shell();
        let mut context = DashboardContext::default();

        let report = service.refresh(&mut page, &mut context).await.unwrap();

        for resource in Resource::ALL {
            assert_eq!(report.outcome(resource), Some(SectionOutcome::Absent));
        }
        assert_eq!(page.text(ids::TOTAL_REVENUE), Some(""));
        assert_eq!(page.live_chart_count(ids::REVENUE_TREND_CANVAS), 0);
        assert_eq!(page.children_with_class(ids::TOP_PRODUCTS, EMPTY_ROW_CLASS).count(), 1);
    }

    #[tokio::test]
    async fn test_missing_insertion_point_fails_refresh() {
        let service = service(MockDataSource::sample(Duration::ZERO));
        let mut page = Page::new(&ids::ELEMENTS[..4], &ids::CANVASES);
        let mut context = DashboardContext::default();

        let result = service.refresh(&mut page, &mut context).await;
        assert!(matches!(result, Err(SurfaceError::MissingElement(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_hung_fetch_stalls_later_sections() {
        let source = MockDataSource::sample(Duration::from_millis(10))
            .with_latency(Resource::SalesByChannel, Latency::Never);
        let service = service(source);
        let mut page = Page::dashboard_shell();
        let mut context = DashboardContext::default();

        let result = tokio::time::timeout(
            Duration::from_secs(60),
            service.refresh(&mut page, &mut context),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(page.text(ids::TOTAL_REVENUE), Some("₺2.4M"));
        assert_eq!(page.live_chart_count(ids::REVENUE_TREND_CANVAS), 1);
        assert_eq!(page.live_chart_count(ids::SALES_CHANNEL_CANVAS), 0);
        assert!(page.children(ids::TOP_PRODUCTS).is_empty());
    }

    #[tokio::test]
    async fn test_positional_metrics_payload_leaves_metrics_untouched() {
        let source = MockDataSource::sample(Duration::ZERO).with_payload(
            Resource::Metrics,
            serde_json::json!(["₺9.9M", "1%", "₺1", "1"]),
        );
        let service = service(source);
        let mut page = Page::dashboard_shell();
        let mut context = DashboardContext::default();

        let report = service.refresh(&mut page, &mut context).await.unwrap();

        assert_eq!(report.outcome(Resource::Metrics), Some(SectionOutcome::Absent));
        assert_eq!(page.text(ids::TOTAL_REVENUE), Some(""));
        assert_eq!(report.outcome(Resource::TopProducts), Some(SectionOutcome::Rendered));
    }

    struct RecordingSource {
        inner: MockDataSource,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
        order: Mutex<Vec<Resource>>,
    }

    #[async_trait]
    impl DataSource for RecordingSource {
        async fn fetch(&self, resource: Resource) -> Result<serde_json::Value, SourceError> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            self.order.lock().unwrap().push(resource);

            let result = self.inner.fetch(resource).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            result
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetches_are_sequential_and_ordered() {
        let source = Arc::new(RecordingSource {
            inner: MockDataSource::sample(Duration::from_millis(250)),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            order: Mutex::new(Vec::new()),
        });
        let service = DashboardService::new(source.clone(), Formatter::default());
        let mut page = Page::dashboard_shell();

        service
            .refresh(&mut page, &mut DashboardContext::default())
            .await
            .unwrap();

        assert_eq!(source.max_in_flight.load(Ordering::SeqCst), 1);
        assert_eq!(*source.order.lock().unwrap(), Resource::ALL.to_vec());
    }
}
