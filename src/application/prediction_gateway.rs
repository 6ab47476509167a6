// Gateway trait for the remote prediction service
use crate::domain::history::{HistoryRecord, Statistics};
use crate::domain::prediction::{
    DiseaseResult, ImagePayload, PredictionType, SoilResult, SoilSample, WeatherResult,
};
use async_trait::async_trait;
use thiserror::Error;

/// Classified transport failure. Each gateway call is attempted exactly once
/// and its outcome reported verbatim; retrying is the caller's decision (and
/// nothing in this crate retries).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("prediction service unreachable")]
    NetworkUnreachable,
    #[error("prediction service rejected the request ({status}): {message}")]
    ServerRejected { status: u16, message: String },
    #[error("prediction service returned a malformed response")]
    MalformedResponse,
}

impl TransportError {
    /// User-facing failure text. Server-provided detail is preserved when
    /// available; everything else collapses to a generic message.
    pub fn user_message(&self) -> String {
        match self {
            Self::ServerRejected { message, .. } if !message.is_empty() => message.clone(),
            _ => "Request failed. Please try again.".to_string(),
        }
    }
}

#[async_trait]
pub trait PredictionGateway: Send + Sync {
    /// Upload a crop image for disease detection.
    async fn submit_disease_image(
        &self,
        image: ImagePayload,
    ) -> Result<DiseaseResult, TransportError>;

    /// Submit soil measurements for a crop recommendation. The sample has
    /// already been range-checked upstream; no re-validation here.
    async fn submit_soil_sample(&self, sample: SoilSample) -> Result<SoilResult, TransportError>;

    /// Fetch the weather advisory for a location.
    async fn query_weather(&self, location: &str) -> Result<WeatherResult, TransportError>;

    /// Fetch the most recent prediction records, optionally filtered by type
    /// on the server side.
    async fn fetch_history(
        &self,
        filter: Option<PredictionType>,
        limit: u32,
    ) -> Result<Vec<HistoryRecord>, TransportError>;

    /// Fetch global prediction counts (always unfiltered).
    async fn fetch_statistics(&self) -> Result<Statistics, TransportError>;

    /// Probe service liveness.
    async fn health_check(&self) -> Result<(), TransportError>;
}
