use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{Value, json};

use reprice_forecast::LinearDemandModel;
use reprice_pricing::PricingPolicy;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Build the app (same router as prod) around a model artifact and bind
    /// to an ephemeral port.
    async fn spawn(model_json: &str) -> Self {
        let model = LinearDemandModel::from_json(model_json).expect("invalid test model artifact");
        let app = reprice_api::app::build_app(Arc::new(model), PricingPolicy::default());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn constant_model(intercept: f64) -> String {
    format!(r#"{{ "name": "constant-demand", "intercept": {intercept}, "weights": {{}} }}"#)
}

fn quote_request() -> Value {
    json!({
        "sku_id": "WM001",
        "price": 100.0,
        "cost": 60.0,
        "promo_discount": 0.1,
        "competitor_price": 105.0,
        "temperature": 28.0,
        "lag_1": 7.0,
        "rolling_mean_7": 6.5,
        "elasticity": -1.2,
        "day_of_week": 2,
        "is_weekend": 0,
        "month": 5
    })
}

async fn post_quote(srv: &TestServer, body: &Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{}/price-quotes", srv.base_url))
        .json(body)
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn health_reports_model_identity() {
    let srv = TestServer::spawn(&constant_model(8.0)).await;

    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["model"], "constant-demand");
}

#[tokio::test]
async fn high_demand_bumps_price() {
    // 8.0 > 6.5 * 1.1 → +5% → 105.0, inside [66, 115.5].
    let srv = TestServer::spawn(&constant_model(8.0)).await;

    let res = post_quote(&srv, &quote_request()).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["sku_id"], "WM001");
    assert_eq!(body["predicted_demand"], 8.0);
    assert_eq!(body["adjustment"], 0.05);
    assert_eq!(body["optimized_price"], 105.0);
}

#[tokio::test]
async fn low_demand_cuts_price() {
    // 5.0 < 6.5 * 0.9 → -5% → 95.0.
    let srv = TestServer::spawn(&constant_model(5.0)).await;

    let res = post_quote(&srv, &quote_request()).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["adjustment"], -0.05);
    assert_eq!(body["optimized_price"], 95.0);
}

#[tokio::test]
async fn linear_model_scores_derived_features() {
    // 2.0 + 1.0 * rolling_mean_7 + 0.5 * lag_1 = 12.0 → high demand.
    let srv = TestServer::spawn(
        r#"{
            "name": "elasticity-ridge-v1",
            "intercept": 2.0,
            "weights": { "rolling_mean_7": 1.0, "lag_1": 0.5 }
        }"#,
    )
    .await;

    let res = post_quote(&srv, &quote_request()).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["predicted_demand"], 12.0);
    assert_eq!(body["optimized_price"], 105.0);
}

#[tokio::test]
async fn missing_history_yields_no_adjustment() {
    let srv = TestServer::spawn(&constant_model(1_000.0)).await;

    let mut req = quote_request();
    req.as_object_mut().unwrap().remove("rolling_mean_7");

    let res = post_quote(&srv, &req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["adjustment"], 0.0);
    assert_eq!(body["optimized_price"], 100.0);
}

#[tokio::test]
async fn degenerate_market_is_capped_by_the_ceiling() {
    let srv = TestServer::spawn(&constant_model(8.0)).await;

    let mut req = quote_request();
    req["price"] = json!(50.0);
    req["cost"] = json!(90.0);
    req["competitor_price"] = json!(60.0);

    let res = post_quote(&srv, &req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["optimized_price"], 66.0);
}

#[tokio::test]
async fn non_positive_price_is_rejected() {
    let srv = TestServer::spawn(&constant_model(8.0)).await;

    let mut req = quote_request();
    req["price"] = json!(-10.0);

    let res = post_quote(&srv, &req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn empty_sku_is_rejected() {
    let srv = TestServer::spawn(&constant_model(8.0)).await;

    let mut req = quote_request();
    req["sku_id"] = json!("   ");

    let res = post_quote(&srv, &req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn out_of_range_calendar_field_is_rejected() {
    let srv = TestServer::spawn(&constant_model(8.0)).await;

    let mut req = quote_request();
    req["month"] = json!(13);

    let res = post_quote(&srv, &req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_input");
}
