use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use reprice_core::DomainError;
use reprice_forecast::ForecastError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation", msg)
        }
    }
}

pub fn forecast_error_to_response(err: ForecastError) -> axum::response::Response {
    match err {
        ForecastError::InvalidInput(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_input", msg),
        ForecastError::InferenceFailed(msg) => {
            json_error(StatusCode::BAD_GATEWAY, "inference_error", msg)
        }
        ForecastError::Artifact(msg) => {
            json_error(StatusCode::BAD_GATEWAY, "model_artifact_error", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
