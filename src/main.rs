// Smoke-check binary - Dependency injection and a single dashboard load
use std::sync::Arc;

use agri_advisor::application::dashboard_service::DashboardService;
use agri_advisor::application::prediction_gateway::PredictionGateway;
use agri_advisor::domain::history::HistoryFilter;
use agri_advisor::infrastructure::config::load_api_config;
use agri_advisor::infrastructure::http_gateway::HttpPredictionGateway;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_api_config()?;
    println!("Checking prediction service at {}", config.api.base_url);

    // Create gateway (infrastructure layer)
    let gateway = Arc::new(HttpPredictionGateway::new(&config)?);

    // Create service (application layer)
    let dashboard = DashboardService::new(gateway.clone());

    gateway.health_check().await?;
    println!("Service is healthy");

    let data = dashboard.load(HistoryFilter::All).await?;
    let stats = data.statistics;
    println!(
        "Predictions: {} total ({} disease, {} soil, {} weather)",
        stats.total_predictions,
        stats.disease_predictions,
        stats.soil_predictions,
        stats.weather_predictions
    );
    for record in &data.records {
        let summary = record.summary();
        println!(
            "  [{}] {} - {}",
            record.created_at.format("%Y-%m-%d %H:%M"),
            summary.headline,
            summary.detail
        );
    }

    Ok(())
}
