// Input validation and payload construction for the prediction views
use crate::domain::prediction::{
    ImagePayload, NUTRIENT_RANGE, PH_RANGE, RAINFALL_RANGE, SoilSample,
};
use bytes::Bytes;
use thiserror::Error;

/// Local validation failure. Never reaches the network; the message is the
/// human-readable reason shown to the user.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Please select a valid image file")]
    NotAnImage,
    #[error("{field} must be a number")]
    NotANumber { field: &'static str },
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
    #[error("Please enter a location")]
    EmptyLocation,
}

/// Accept a candidate file for disease detection iff its declared content
/// type is an image kind. No size limit is enforced here; the UI's 10MB
/// guidance is advisory only.
pub fn validate_image(
    file_name: &str,
    content_type: &str,
    bytes: Bytes,
) -> Result<ImagePayload, ValidationError> {
    if !content_type.starts_with("image/") {
        return Err(ValidationError::NotAnImage);
    }
    Ok(ImagePayload {
        bytes,
        mime_type: content_type.to_string(),
        file_name: file_name.to_string(),
    })
}

/// Raw soil form fields as the user typed them.
#[derive(Debug, Clone, Default)]
pub struct SoilForm {
    pub nitrogen: String,
    pub phosphorus: String,
    pub potassium: String,
    pub ph: String,
    pub rainfall: String,
}

/// Parse and range-check all five soil fields. Any unparseable or
/// out-of-range field rejects the whole form; there is no partial
/// submission.
pub fn parse_soil_form(form: &SoilForm) -> Result<SoilSample, ValidationError> {
    let nitrogen = parse_field("Nitrogen", &form.nitrogen, NUTRIENT_RANGE)?;
    let phosphorus = parse_field("Phosphorus", &form.phosphorus, NUTRIENT_RANGE)?;
    let potassium = parse_field("Potassium", &form.potassium, NUTRIENT_RANGE)?;
    let ph = parse_field("pH", &form.ph, PH_RANGE)?;
    let rainfall = parse_field("Rainfall", &form.rainfall, RAINFALL_RANGE)?;
    Ok(SoilSample {
        nitrogen,
        phosphorus,
        potassium,
        ph,
        rainfall,
    })
}

fn parse_field(
    field: &'static str,
    raw: &str,
    (min, max): (f64, f64),
) -> Result<f64, ValidationError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber { field })?;
    // NaN fails both comparisons below, so it is rejected as out of range.
    if !(value >= min && value <= max) {
        return Err(ValidationError::OutOfRange { field, min, max });
    }
    Ok(value)
}

/// Reject empty or whitespace-only locations; pass the trimmed string
/// through otherwise. No geocoding at this layer.
pub fn validate_location(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyLocation);
    }
    Ok(trimmed.to_string())
}
