// HTTP gateway implementation over the prediction service's REST endpoints
use crate::application::prediction_gateway::{PredictionGateway, TransportError};
use crate::domain::history::{HistoryRecord, RecordOutcome, Statistics};
use crate::domain::prediction::{
    DiseaseResult, ImagePayload, PredictionType, SoilResult, SoilSample, WeatherResult,
};
use crate::infrastructure::config::ApiConfig;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpPredictionGateway {
    client: reqwest::Client,
    base_url: String,
}

/// History record as the server sends it: the result is an untyped JSON
/// object discriminated by `prediction_type`.
#[derive(Debug, Deserialize)]
struct RawHistoryRecord {
    id: i64,
    prediction_type: String,
    #[serde(default)]
    confidence: Option<f64>,
    result: serde_json::Value,
    created_at: DateTime<Utc>,
}

/// FastAPI-style error body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

impl HttpPredictionGateway {
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Classify a completed HTTP exchange and decode the success body.
    /// Non-2xx statuses become `ServerRejected` carrying the server's
    /// `detail` string when the body parses as one; a 2xx body that fails to
    /// decode becomes `MalformedResponse`.
    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, TransportError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.detail)
                .unwrap_or(body);
            tracing::debug!(status = status.as_u16(), %message, "server rejected request");
            return Err(TransportError::ServerRejected {
                status: status.as_u16(),
                message,
            });
        }
        response.json::<T>().await.map_err(|err| {
            tracing::error!(%err, "failed to decode prediction service response");
            TransportError::MalformedResponse
        })
    }

    fn send_error(err: reqwest::Error) -> TransportError {
        tracing::error!(%err, "prediction service unreachable");
        TransportError::NetworkUnreachable
    }
}

fn map_history_record(raw: RawHistoryRecord) -> HistoryRecord {
    let outcome = match raw.prediction_type.as_str() {
        "disease" => serde_json::from_value::<DiseaseResult>(raw.result)
            .map(RecordOutcome::Disease)
            .ok(),
        "soil" => serde_json::from_value::<SoilResult>(raw.result)
            .map(RecordOutcome::Soil)
            .ok(),
        "weather" => serde_json::from_value::<WeatherResult>(raw.result)
            .map(RecordOutcome::Weather)
            .ok(),
        _ => None,
    }
    .unwrap_or_else(|| {
        // One undecodable record must not fail the whole history feed.
        tracing::warn!(
            id = raw.id,
            kind = %raw.prediction_type,
            "unrecognized history record, rendering as unknown"
        );
        RecordOutcome::Unknown {
            kind: raw.prediction_type.clone(),
        }
    });

    HistoryRecord {
        id: raw.id,
        confidence: raw.confidence,
        created_at: raw.created_at,
        outcome,
    }
}

#[async_trait]
impl PredictionGateway for HttpPredictionGateway {
    async fn submit_disease_image(
        &self,
        image: ImagePayload,
    ) -> Result<DiseaseResult, TransportError> {
        let part = Part::stream(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.mime_type)
            .map_err(|_| TransportError::MalformedResponse)?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.url("/predict/disease"))
            .multipart(form)
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::decode(response).await
    }

    async fn submit_soil_sample(&self, sample: SoilSample) -> Result<SoilResult, TransportError> {
        let response = self
            .client
            .post(self.url("/predict/soil"))
            .json(&sample)
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::decode(response).await
    }

    async fn query_weather(&self, location: &str) -> Result<WeatherResult, TransportError> {
        let response = self
            .client
            .get(self.url("/predict/weather"))
            .query(&[("location", location)])
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::decode(response).await
    }

    async fn fetch_history(
        &self,
        filter: Option<PredictionType>,
        limit: u32,
    ) -> Result<Vec<HistoryRecord>, TransportError> {
        let mut request = self
            .client
            .get(self.url("/predict/history"))
            .query(&[("limit", limit.to_string())]);
        if let Some(kind) = filter {
            request = request.query(&[("prediction_type", kind.as_str())]);
        }

        let response = request.send().await.map_err(Self::send_error)?;
        let raw: Vec<RawHistoryRecord> = Self::decode(response).await?;
        Ok(raw.into_iter().map(map_history_record).collect())
    }

    async fn fetch_statistics(&self) -> Result<Statistics, TransportError> {
        let response = self
            .client
            .get(self.url("/predict/statistics"))
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::decode(response).await
    }

    async fn health_check(&self) -> Result<(), TransportError> {
        let response = self
            .client
            .get(self.url("/health"))
            .send()
            .await
            .map_err(Self::send_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::ServerRejected {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }
}
