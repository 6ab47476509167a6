// Dashboard service - joined history/statistics fetch for the dashboard view
use crate::application::prediction_gateway::{PredictionGateway, TransportError};
use crate::application::view_controller::ViewController;
use crate::domain::history::{DashboardData, HistoryFilter};
use std::sync::Arc;

/// History fetches are bounded to the most recent records.
const HISTORY_PAGE_SIZE: u32 = 50;

#[derive(Clone)]
pub struct DashboardService {
    gateway: Arc<dyn PredictionGateway>,
}

impl DashboardService {
    pub fn new(gateway: Arc<dyn PredictionGateway>) -> Self {
        Self { gateway }
    }

    /// Fetch history and statistics concurrently for one dashboard refresh.
    ///
    /// The filter is sent to the server (never applied client-side) and the
    /// records are kept in gateway order. Statistics are always the global
    /// unfiltered counts. The join is all-or-nothing: if either fetch fails,
    /// the whole refresh fails and the other's partial success is discarded.
    pub async fn load(&self, filter: HistoryFilter) -> Result<DashboardData, TransportError> {
        let (records, statistics) = tokio::try_join!(
            self.gateway
                .fetch_history(filter.prediction_type(), HISTORY_PAGE_SIZE),
            self.gateway.fetch_statistics(),
        )?;
        tracing::debug!(
            records = records.len(),
            total = statistics.total_predictions,
            "dashboard refresh complete"
        );
        Ok(DashboardData {
            records,
            statistics,
        })
    }

    /// Drive the dashboard's view controller through one refresh cycle.
    /// Rapid filter changes supersede each other via the controller's
    /// request tokens, so a slow earlier refresh never overwrites a newer
    /// filter's data.
    pub async fn refresh(&self, controller: &ViewController<DashboardData>, filter: HistoryFilter) {
        controller.submit(Ok(filter), |filter| self.load(filter)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::view_controller::ViewState;
    use crate::domain::history::{HistoryRecord, RecordOutcome, Statistics};
    use crate::domain::prediction::{
        DiseaseResult, ImagePayload, PredictionType, SoilResult, SoilSample, WeatherResult,
    };
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn stats() -> Statistics {
        Statistics {
            total_predictions: 3,
            disease_predictions: 1,
            soil_predictions: 1,
            weather_predictions: 1,
        }
    }

    fn soil_record(id: i64) -> HistoryRecord {
        HistoryRecord {
            id,
            confidence: Some(0.85),
            created_at: chrono::Utc::now(),
            outcome: RecordOutcome::Soil(SoilResult {
                recommended_crop: "Rice".to_string(),
                confidence: Some(0.85),
                fertilizer_advice: "Add urea".to_string(),
                additional_tips: None,
            }),
        }
    }

    /// Gateway stub recording history-call arguments, with switchable
    /// failures per endpoint.
    #[derive(Default)]
    struct StubGateway {
        history_calls: Mutex<Vec<(Option<PredictionType>, u32)>>,
        history_count: AtomicUsize,
        fail_history: bool,
        fail_statistics: bool,
    }

    #[async_trait]
    impl PredictionGateway for StubGateway {
        async fn submit_disease_image(
            &self,
            _image: ImagePayload,
        ) -> Result<DiseaseResult, TransportError> {
            unimplemented!("not exercised by dashboard tests")
        }

        async fn submit_soil_sample(
            &self,
            _sample: SoilSample,
        ) -> Result<SoilResult, TransportError> {
            unimplemented!("not exercised by dashboard tests")
        }

        async fn query_weather(&self, _location: &str) -> Result<WeatherResult, TransportError> {
            unimplemented!("not exercised by dashboard tests")
        }

        async fn fetch_history(
            &self,
            filter: Option<PredictionType>,
            limit: u32,
        ) -> Result<Vec<HistoryRecord>, TransportError> {
            self.history_calls.lock().push((filter, limit));
            self.history_count.fetch_add(1, Ordering::SeqCst);
            if self.fail_history {
                return Err(TransportError::NetworkUnreachable);
            }
            Ok(vec![soil_record(2), soil_record(1)])
        }

        async fn fetch_statistics(&self) -> Result<Statistics, TransportError> {
            if self.fail_statistics {
                return Err(TransportError::ServerRejected {
                    status: 500,
                    message: String::new(),
                });
            }
            Ok(stats())
        }

        async fn health_check(&self) -> Result<(), TransportError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn soil_filter_is_sent_to_the_server() {
        let gateway = Arc::new(StubGateway::default());
        let service = DashboardService::new(gateway.clone());

        let data = service.load(HistoryFilter::Soil).await.unwrap();
        assert_eq!(data.records.len(), 2);
        // Gateway order is preserved, no client-side re-sort.
        assert_eq!(data.records[0].id, 2);

        let calls = gateway.history_calls.lock();
        assert_eq!(calls.as_slice(), &[(Some(PredictionType::Soil), 50)]);
    }

    #[tokio::test]
    async fn all_filter_omits_the_type_parameter() {
        let gateway = Arc::new(StubGateway::default());
        let service = DashboardService::new(gateway.clone());
        service.load(HistoryFilter::All).await.unwrap();
        assert_eq!(gateway.history_calls.lock().as_slice(), &[(None, 50)]);
    }

    #[tokio::test]
    async fn statistics_failure_fails_the_whole_refresh() {
        let gateway = Arc::new(StubGateway {
            fail_statistics: true,
            ..StubGateway::default()
        });
        let service = DashboardService::new(gateway);

        let err = service.load(HistoryFilter::All).await.unwrap_err();
        assert!(matches!(err, TransportError::ServerRejected { .. }));
    }

    #[tokio::test]
    async fn history_failure_fails_the_whole_refresh() {
        let gateway = Arc::new(StubGateway {
            fail_history: true,
            ..StubGateway::default()
        });
        let service = DashboardService::new(gateway);

        let err = service.load(HistoryFilter::Weather).await.unwrap_err();
        assert_eq!(err, TransportError::NetworkUnreachable);
    }

    #[tokio::test]
    async fn refresh_resolves_the_controller_to_failure_not_partial_success() {
        let gateway = Arc::new(StubGateway {
            fail_statistics: true,
            ..StubGateway::default()
        });
        let service = DashboardService::new(gateway.clone());
        let controller = ViewController::new();

        service.refresh(&controller, HistoryFilter::All).await;
        assert!(matches!(controller.state(), ViewState::Failure { .. }));
        // History itself succeeded, but the partial result was discarded.
        assert_eq!(gateway.history_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn refresh_populates_the_controller_on_success() {
        let gateway = Arc::new(StubGateway::default());
        let service = DashboardService::new(gateway);
        let controller = ViewController::new();

        service.refresh(&controller, HistoryFilter::Soil).await;
        match controller.state() {
            ViewState::Success { value } => {
                assert_eq!(value.statistics, stats());
                assert_eq!(value.records.len(), 2);
            }
            other => panic!("expected success, got {other:?}"),
        }
    }
}
