use crate::errors::AppError;
use crate::estimator::{self, EmissionsInput, EmissionsResult};
use crate::insights;
use crate::models::{GeneralResponse, HealthResponse, SituationRequest};
use crate::profile::{self, GeneralProfileInput, Projection};
use crate::situation::{self, SituationAnalysis};
use crate::state::AppState;
use crate::stubs::{self, ReceiptScan, SectorAnalysis, SectorQuery};
use crate::ui::render_page;
use crate::view::ViewQuery;
use axum::{
    Json,
    extract::{
        Multipart, Query, State,
        multipart::MultipartRejection,
        rejection::JsonRejection,
    },
    response::Html,
};
use chrono::Utc;
use tracing::{debug, warn};

pub async fn index(Query(query): Query<ViewQuery>) -> Html<String> {
    Html(render_page(query.view()))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
    })
}

pub async fn calculate_footprint(
    payload: Result<Json<EmissionsInput>, JsonRejection>,
) -> Result<Json<EmissionsResult>, AppError> {
    let Json(input) = payload.map_err(|err| reject("Calculation", err))?;
    let result = estimator::estimate(&input);
    debug!(
        total = result.total,
        recommendations = result.recommendations.len(),
        "estimated footprint"
    );
    Ok(Json(result))
}

pub async fn calculate_general(
    payload: Result<Json<GeneralProfileInput>, JsonRejection>,
) -> Result<Json<GeneralResponse>, AppError> {
    let Json(input) = payload.map_err(|err| reject("Calculation", err))?;
    let result = profile::estimate_general(&input);
    let insights = insights::generate(&input, &result);
    debug!(daily_kg = result.total, "estimated general profile");

    Ok(Json(GeneralResponse {
        projection: Projection::from_daily(result.total),
        insights,
        result,
    }))
}

pub async fn ai_situation(
    State(state): State<AppState>,
    payload: Result<Json<SituationRequest>, JsonRejection>,
) -> Result<Json<SituationAnalysis>, AppError> {
    let Json(request) = payload.map_err(|err| reject("AI analysis", err))?;
    if request.situation.trim().is_empty() {
        return Err(AppError::bad_request("Please describe your situation first"));
    }

    state.simulate_latency().await;
    let analysis = situation::analyze(&request.situation);
    debug!(category = ?analysis.category, "analyzed situation");
    Ok(Json(analysis))
}

pub async fn analyze_receipt(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ReceiptScan>, AppError> {
    let mut multipart = multipart.map_err(|err| reject("OCR analysis", err))?;

    let mut receipts = 0usize;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| reject("OCR analysis", err))?
    {
        let is_upload = field.name() == Some("files")
            && field.file_name().is_some_and(|name| !name.is_empty());
        if is_upload {
            receipts += 1;
        }
    }

    if receipts == 0 {
        return Err(AppError::bad_request("Please upload at least one receipt image"));
    }

    state.simulate_latency().await;
    debug!(receipts, "scanned receipts");
    Ok(Json(stubs::scan_receipts(receipts)))
}

pub async fn sector_analysis(
    State(state): State<AppState>,
    payload: Result<Json<SectorQuery>, JsonRejection>,
) -> Result<Json<SectorAnalysis>, AppError> {
    let Json(query) = payload.map_err(|err| reject("Sector analysis", err))?;
    debug!(sector = %query.sector, country = %query.country, year = %query.year, "sector analysis");

    state.simulate_latency().await;
    Ok(Json(stubs::analyze_sector(query)))
}

fn reject(operation: &str, err: impl std::fmt::Display) -> AppError {
    warn!("{operation} request rejected: {err}");
    AppError::failed(operation)
}
