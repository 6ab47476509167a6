// Application layer - Use cases and view orchestration
pub mod dashboard_service;
pub mod prediction_gateway;
pub mod validation;
pub mod view_controller;
pub mod views;
