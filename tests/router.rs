use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use carbon_dashboard::{AppState, Config, router};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    router(AppState::new(Config::default()))
}

async fn json_response(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&body).expect("failed to parse JSON")
}

async fn post_json(uri: &str, payload: Value) -> (StatusCode, Value) {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, json_response(response).await)
}

#[tokio::test]
async fn health_reports_timestamp() {
    let response = app()
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn calculate_footprint_runs_estimator() {
    let (status, body) = post_json(
        "/api/calculate-footprint",
        json!({
            "dietType": "vegan",
            "electricityKwh": "200",
            "travelMode": "car",
            "travelDistanceKm": 500,
            "deviceType": "laptop",
            "deviceHoursPerDay": "4",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["breakdown"]["diet"], json!(1.5));
    let total = body["total"].as_f64().unwrap();
    assert!((total - 1.643998).abs() < 1e-9);
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 1);
    assert_eq!(body["recommendations"][0]["impactLevel"], "Exemplary");
}

#[tokio::test]
async fn calculate_footprint_degrades_bad_fields() {
    let (status, body) = post_json(
        "/api/calculate-footprint",
        json!({ "dietType": 7, "electricityKwh": "lots", "travelMode": "teleport" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["breakdown"]["diet"], json!(2.8));
    assert_eq!(body["breakdown"]["electricity"], json!(0.0));
    assert_eq!(body["breakdown"]["travel"], json!(0.0));
}

#[tokio::test]
async fn out_of_range_numbers_coerce_to_zero() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/calculate-footprint")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"electricityKwh": 1e400, "deviceType": "desktop", "deviceHoursPerDay": 1e308}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["breakdown"]["electricity"].as_f64(), Some(0.0));
    assert_eq!(body["breakdown"]["devices"].as_f64(), Some(0.0));
    assert_eq!(body["total"].as_f64(), Some(2.8));
}

#[tokio::test]
async fn malformed_body_reports_generic_failure() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/calculate-footprint")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_response(response).await;
    assert_eq!(body["error"], "Calculation failed");
}

#[tokio::test]
async fn calculate_general_includes_projection_and_insights() {
    let (status, body) = post_json(
        "/api/calculate-general",
        json!({
            "dailyTravelKm": 30,
            "electricityUsageKwh": 500,
            "dietType": "Vegan",
            "shoppingScore": 5,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let daily = body["projection"]["daily"].as_f64().unwrap();
    assert!((daily - 62.65).abs() < 1e-9);
    assert!((body["projection"]["weekly"].as_f64().unwrap() - 62.65 * 7.0).abs() < 1e-9);
    assert!((body["projection"]["yearly"].as_f64().unwrap() - 62.65 * 365.0).abs() < 1e-6);
    assert_eq!(body["result"]["recommendations"], json!([]));
    let insights = body["insights"]["insights"].as_array().unwrap();
    assert_eq!(insights.len(), 2);
}

#[tokio::test]
async fn situation_requires_text() {
    let (status, body) = post_json("/api/ai-situation", json!({ "situation": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please describe your situation first");
}

#[tokio::test]
async fn situation_selects_template() {
    let (status, body) =
        post_json("/api/ai-situation", json!({ "situation": "Booked a FLIGHT to Oslo" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "flight");
    assert!(body["analysis"].as_str().unwrap().starts_with("**Flight Carbon Analysis:**"));
}

#[tokio::test]
async fn sector_analysis_is_fixed() {
    let (status, body) = post_json(
        "/api/sector-analysis",
        json!({ "sector": "energy", "country": "Chile", "year": "2025" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currentEmissions"], json!(4500.0));
    assert_eq!(body["country"], "Chile");
    assert_eq!(body["predictions"].as_array().unwrap().len(), 5);
    assert_eq!(body["heatmapData"][3]["country"], "United States");
    assert_eq!(body["heatmapData"][3]["riskLevel"], "very-high");
}

#[tokio::test]
async fn receipt_upload_counts_files() {
    let boundary = "X-RECEIPT-BOUNDARY";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"files\"; filename=\"a.png\"\r\n\
         Content-Type: image/png\r\n\r\n\
         abc\r\n\
         --{boundary}\r\n\
         Content-Disposition: form-data; name=\"files\"; filename=\"b.png\"\r\n\
         Content-Type: image/png\r\n\r\n\
         def\r\n\
         --{boundary}--\r\n"
    );
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/analyze-receipt")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_response(response).await;
    assert_eq!(body["receiptsScanned"], 2);
    assert!(body["report"].as_str().unwrap().starts_with("Scanned 2 receipt(s)"));
}

#[tokio::test]
async fn receipt_upload_without_content_type_fails_generically() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/analyze-receipt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_response(response).await;
    assert_eq!(body["error"], "OCR analysis failed");
}

#[tokio::test]
async fn index_renders_requested_view() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/?view=industrial")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains(r#"data-view="industrial""#));
    assert!(html.contains("sector-form"));
}
