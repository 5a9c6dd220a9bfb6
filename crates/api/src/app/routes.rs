use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use reprice_core::SkuId;
use reprice_forecast::{FeatureInputs, FeatureVector};
use reprice_pricing::{LineItem, decide, round_to_cents};

use crate::app::{AppServices, dto, errors};

/// Liveness plus the identity of the loaded demand model.
pub async fn health(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ok",
            "model": services.estimator.name(),
        })),
    )
        .into_response()
}

/// Price one line item: derive features, estimate demand, decide, round.
pub async fn price_quote(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::PriceQuoteRequest>,
) -> axum::response::Response {
    let sku_id = match SkuId::new(body.sku_id.as_str()) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let inputs = FeatureInputs {
        price: body.price,
        cost: body.cost,
        promo_discount: body.promo_discount,
        competitor_price: body.competitor_price,
        temperature: body.temperature,
        lag_1: body.lag_1,
        rolling_mean_7: body.rolling_mean_7,
        elasticity: body.elasticity,
        day_of_week: body.day_of_week,
        is_weekend: body.is_weekend != 0,
        month: body.month,
    };
    let features = match FeatureVector::derive(&inputs) {
        Ok(v) => v,
        Err(e) => return errors::forecast_error_to_response(e),
    };

    let predicted_demand = match services.estimator.predict(&features) {
        Ok(v) => v,
        Err(e) => return errors::forecast_error_to_response(e),
    };

    if !predicted_demand.is_finite() {
        // The engine falls back to "no change"; flag the anomaly here so
        // monitoring sees it.
        tracing::warn!(
            sku_id = %sku_id,
            predicted_demand,
            "non-finite demand estimate; pricing falls back to no adjustment"
        );
    }

    let item = match LineItem::new(
        sku_id,
        body.price,
        body.cost,
        body.competitor_price,
        body.rolling_mean_7,
        predicted_demand,
    ) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let priced = decide(&services.policy, item);

    if priced.market_is_degenerate() {
        tracing::warn!(
            sku_id = %priced.sku_id(),
            cost = body.cost,
            competitor_price = body.competitor_price,
            "degenerate market state: cost floor exceeds competitor ceiling"
        );
    }

    let response = dto::PriceQuoteResponse {
        sku_id: priced.sku_id().to_string(),
        predicted_demand: round_to_cents(predicted_demand),
        adjustment: priced.adjustment(),
        optimized_price: priced.rounded_price(),
    };

    (StatusCode::OK, Json(response)).into_response()
}
