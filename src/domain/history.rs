// Prediction history and dashboard domain models
use super::prediction::{DiseaseResult, PredictionType, SoilResult, WeatherResult};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Decoded outcome of a past prediction, keyed by the record's type tag.
///
/// Records whose type tag is unrecognized (or whose result payload does not
/// decode) are carried as `Unknown` so one bad record never fails a whole
/// history fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    Disease(DiseaseResult),
    Soil(SoilResult),
    Weather(WeatherResult),
    Unknown { kind: String },
}

/// One entry in the prediction history feed. Immutable once received; the
/// list is replaced wholesale on every refresh, never patched.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRecord {
    pub id: i64,
    pub confidence: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub outcome: RecordOutcome,
}

/// Display fields derived from a record's outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSummary {
    pub headline: String,
    pub detail: String,
}

impl HistoryRecord {
    /// The record's type tag, `None` when the tag was unrecognized.
    pub fn prediction_type(&self) -> Option<PredictionType> {
        match &self.outcome {
            RecordOutcome::Disease(_) => Some(PredictionType::Disease),
            RecordOutcome::Soil(_) => Some(PredictionType::Soil),
            RecordOutcome::Weather(_) => Some(PredictionType::Weather),
            RecordOutcome::Unknown { .. } => None,
        }
    }

    /// Derive the headline/detail pair shown in the history list.
    pub fn summary(&self) -> RecordSummary {
        match &self.outcome {
            RecordOutcome::Disease(r) => RecordSummary {
                headline: r.disease.clone(),
                detail: r.treatment.clone(),
            },
            RecordOutcome::Soil(r) => RecordSummary {
                headline: format!("Recommended: {}", r.recommended_crop),
                detail: r.fertilizer_advice.clone(),
            },
            RecordOutcome::Weather(r) => RecordSummary {
                headline: format!("{} - {}°C", r.location, r.temperature_c),
                detail: r.irrigation_advice.clone(),
            },
            RecordOutcome::Unknown { .. } => RecordSummary {
                headline: "Unknown prediction".to_string(),
                detail: String::new(),
            },
        }
    }
}

/// Global prediction counts, one snapshot per fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Statistics {
    pub total_predictions: u64,
    pub disease_predictions: u64,
    pub soil_predictions: u64,
    pub weather_predictions: u64,
}

/// The dashboard's history filter. `All` means no server-side filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryFilter {
    #[default]
    All,
    Disease,
    Soil,
    Weather,
}

impl HistoryFilter {
    pub fn prediction_type(&self) -> Option<PredictionType> {
        match self {
            Self::All => None,
            Self::Disease => Some(PredictionType::Disease),
            Self::Soil => Some(PredictionType::Soil),
            Self::Weather => Some(PredictionType::Weather),
        }
    }
}

/// History records and statistics fetched together for one dashboard view.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub records: Vec<HistoryRecord>,
    pub statistics: Statistics,
}
