// Per-view orchestration: each interactive page owns one controller and
// wires its validator to the matching gateway operation.
use crate::application::prediction_gateway::PredictionGateway;
use crate::application::validation::{
    SoilForm, parse_soil_form, validate_image, validate_location,
};
use crate::application::view_controller::ViewController;
use crate::domain::prediction::{DiseaseResult, SoilResult, WeatherResult};
use bytes::Bytes;
use std::sync::Arc;

/// Disease detection page: image upload → disease prediction.
#[derive(Clone)]
pub struct DiseaseView {
    pub controller: ViewController<DiseaseResult>,
    gateway: Arc<dyn PredictionGateway>,
}

impl DiseaseView {
    pub fn new(gateway: Arc<dyn PredictionGateway>) -> Self {
        Self {
            controller: ViewController::new(),
            gateway,
        }
    }

    pub async fn submit(&self, file_name: &str, content_type: &str, bytes: Bytes) {
        self.controller
            .submit(validate_image(file_name, content_type, bytes), |image| {
                self.gateway.submit_disease_image(image)
            })
            .await;
    }

    /// Picking a new image clears the previous result or error.
    pub fn reset(&self) {
        self.controller.reset();
    }
}

/// Soil recommendation page: five free-text fields → crop recommendation.
#[derive(Clone)]
pub struct SoilView {
    pub controller: ViewController<SoilResult>,
    gateway: Arc<dyn PredictionGateway>,
}

impl SoilView {
    pub fn new(gateway: Arc<dyn PredictionGateway>) -> Self {
        Self {
            controller: ViewController::new(),
            gateway,
        }
    }

    pub async fn submit(&self, form: &SoilForm) {
        self.controller
            .submit(parse_soil_form(form), |sample| {
                self.gateway.submit_soil_sample(sample)
            })
            .await;
    }

    pub fn reset(&self) {
        self.controller.reset();
    }
}

/// Weather advisory page: location string → advisory.
#[derive(Clone)]
pub struct WeatherView {
    pub controller: ViewController<WeatherResult>,
    gateway: Arc<dyn PredictionGateway>,
}

impl WeatherView {
    pub fn new(gateway: Arc<dyn PredictionGateway>) -> Self {
        Self {
            controller: ViewController::new(),
            gateway,
        }
    }

    pub async fn submit(&self, location: &str) {
        self.controller
            .submit(validate_location(location), |location| async move {
                self.gateway.query_weather(&location).await
            })
            .await;
    }

    pub fn reset(&self) {
        self.controller.reset();
    }
}
