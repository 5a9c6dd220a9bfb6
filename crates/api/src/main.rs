use std::sync::Arc;

use anyhow::Context;

use reprice_forecast::LinearDemandModel;
use reprice_pricing::PricingPolicy;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    reprice_observability::init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let model_path = std::env::var("MODEL_PATH").unwrap_or_else(|_| {
        tracing::warn!("MODEL_PATH not set; using models/demand_model.json");
        "models/demand_model.json".to_string()
    });

    // The estimator is loaded once here and handed to the app explicitly.
    // There is no import-time global model state.
    let model = LinearDemandModel::from_path(&model_path)
        .with_context(|| format!("failed to load demand model from {model_path}"))?;
    tracing::info!(model = %model_path, "demand model loaded");

    let app = reprice_api::app::build_app(Arc::new(model), PricingPolicy::default());

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
