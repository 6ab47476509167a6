// Prediction domain models - value types exchanged across the transport boundary
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// The three kinds of prediction the service offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionType {
    Disease,
    Soil,
    Weather,
}

impl PredictionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disease => "disease",
            Self::Soil => "soil",
            Self::Weather => "weather",
        }
    }
}

/// A validated crop image ready for multipart upload.
///
/// Only the image validator constructs these, so the content type is
/// guaranteed to be an image kind by the time transport sees it.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub bytes: Bytes,
    pub mime_type: String,
    pub file_name: String,
}

/// Soil measurements for crop recommendation.
///
/// Field names match the wire contract, so the sample serializes directly
/// as the request body. Values are range-checked by the soil validator
/// before a sample is ever constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoilSample {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
    pub rainfall: f64,
}

/// Closed range for nitrogen, phosphorus and potassium content.
pub const NUTRIENT_RANGE: (f64, f64) = (0.0, 200.0);
/// Closed range for soil pH.
pub const PH_RANGE: (f64, f64) = (0.0, 14.0);
/// Closed range for rainfall in mm.
pub const RAINFALL_RANGE: (f64, f64) = (0.0, 500.0);

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DiseaseResult {
    pub disease: String,
    pub confidence: f64,
    pub treatment: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SoilResult {
    pub recommended_crop: String,
    #[serde(default)]
    pub confidence: Option<f64>,
    pub fertilizer_advice: String,
    #[serde(default)]
    pub additional_tips: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherResult {
    pub location: String,
    #[serde(rename = "temperature")]
    pub temperature_c: f64,
    #[serde(rename = "humidity")]
    pub humidity_pct: f64,
    pub rain_prediction: String,
    pub irrigation_advice: String,
    #[serde(default)]
    pub farming_tips: Option<String>,
}
