use std::sync::Arc;

use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use tower::ServiceBuilder;

use reprice_forecast::DemandEstimator;
use reprice_pricing::PricingPolicy;

pub mod dto;
pub mod errors;
pub mod routes;

/// Shared request-handling dependencies.
///
/// The estimator handle is constructed once at process startup and injected
/// here; handlers never touch global state. The policy is the same value the
/// batch path receives, so the two call-sites cannot diverge.
#[derive(Clone)]
pub struct AppServices {
    pub estimator: Arc<dyn DemandEstimator>,
    pub policy: PricingPolicy,
}

/// Build the application router.
pub fn build_app(estimator: Arc<dyn DemandEstimator>, policy: PricingPolicy) -> Router {
    let services = Arc::new(AppServices { estimator, policy });

    Router::new()
        .route("/health", get(routes::health))
        .route("/price-quotes", post(routes::price_quote))
        .layer(ServiceBuilder::new().layer(Extension(services)))
}
