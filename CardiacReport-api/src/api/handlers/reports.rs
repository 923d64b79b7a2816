use axum::{extract::Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

use super::ErrorResponse;
use cardiac_report_domain::entities::{
    CiedReportInput, EchoMeasurements, EcgMeasurements, EcgMetrics, FietstestMeasurements,
    FietstestMetrics, HolterMeasurements, HolterMetrics,
};
use cardiac_report_domain::services::brief::{compose_brief_letter, BriefLetterInput};
use cardiac_report_domain::services::cied::generate_cied_report;
use cardiac_report_domain::services::ecg::{
    compute_ecg_metrics, generate_ecg_report, summarize_ecg_for_brief,
};
use cardiac_report_domain::services::echo::{
    generate_echo_report, generate_guideline_recommendations, summarize_echo_for_brief,
};
use cardiac_report_domain::services::fietstest::{
    compute_fietstest_metrics, generate_fietstest_report, summarize_fietstest_for_brief,
};
use cardiac_report_domain::services::holter::{compute_holter_metrics, generate_holter_report};

/// Echo report with guideline recommendations and brief summary
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EchoReportResponse {
    /// Generated narrative report
    pub report: String,
    /// Guideline-driven recommendations for the study
    pub recommendations: Vec<String>,
    /// Compact summary for the consult letter
    pub brief_summary: String,
}

/// Fietstest report with derived metrics and brief summary
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FietstestReportResponse {
    /// Generated narrative report
    pub report: String,
    /// Derived metrics shown alongside the report
    pub metrics: FietstestMetrics,
    /// Compact summary for the consult letter
    pub brief_summary: String,
}

/// ECG report with derived metrics and brief summary
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EcgReportResponse {
    /// Generated narrative report
    pub report: String,
    /// Derived metrics shown alongside the report
    pub metrics: EcgMetrics,
    /// Compact summary for the consult letter
    pub brief_summary: String,
}

/// Holter report with derived metrics
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HolterReportResponse {
    /// Generated narrative report
    pub report: String,
    /// Derived metrics shown alongside the report
    pub metrics: HolterMetrics,
}

/// CIED follow-up report
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CiedReportResponse {
    /// Generated narrative report
    pub report: String,
}

/// Composed consult letter
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BriefLetterResponse {
    /// The full letter text
    pub letter: String,
}

/// Generate an echo report from structured measurements
#[utoipa::path(
    post,
    path = "/api/reports/echo",
    request_body = EchoMeasurements,
    responses(
        (status = 200, description = "Echo report generated", body = EchoReportResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "reports"
)]
#[instrument(skip(measurements))]
pub async fn generate_echo(Json(measurements): Json<EchoMeasurements>) -> impl IntoResponse {
    info!("Generating echo report");

    let response = EchoReportResponse {
        report: generate_echo_report(&measurements),
        recommendations: generate_guideline_recommendations(&measurements),
        brief_summary: summarize_echo_for_brief(&measurements),
    };
    (StatusCode::OK, Json(response))
}

/// Generate a bicycle stress test report from structured measurements
#[utoipa::path(
    post,
    path = "/api/reports/fietstest",
    request_body = FietstestMeasurements,
    responses(
        (status = 200, description = "Fietstest report generated", body = FietstestReportResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "reports"
)]
#[instrument(skip(measurements))]
pub async fn generate_fietstest(
    Json(measurements): Json<FietstestMeasurements>,
) -> impl IntoResponse {
    info!("Generating fietstest report");

    let metrics = compute_fietstest_metrics(&measurements);
    let response = FietstestReportResponse {
        report: generate_fietstest_report(&measurements, &metrics),
        brief_summary: summarize_fietstest_for_brief(&measurements, &metrics),
        metrics,
    };
    (StatusCode::OK, Json(response))
}

/// Generate an ECG report from structured measurements
#[utoipa::path(
    post,
    path = "/api/reports/ecg",
    request_body = EcgMeasurements,
    responses(
        (status = 200, description = "ECG report generated", body = EcgReportResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "reports"
)]
#[instrument(skip(measurements))]
pub async fn generate_ecg(Json(measurements): Json<EcgMeasurements>) -> impl IntoResponse {
    info!("Generating ECG report");

    let metrics = compute_ecg_metrics(&measurements);
    let response = EcgReportResponse {
        report: generate_ecg_report(&measurements, &metrics),
        brief_summary: summarize_ecg_for_brief(&measurements, &metrics),
        metrics,
    };
    (StatusCode::OK, Json(response))
}

/// Generate a Holter report from structured measurements
#[utoipa::path(
    post,
    path = "/api/reports/holter",
    request_body = HolterMeasurements,
    responses(
        (status = 200, description = "Holter report generated", body = HolterReportResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "reports"
)]
#[instrument(skip(measurements))]
pub async fn generate_holter(Json(measurements): Json<HolterMeasurements>) -> impl IntoResponse {
    info!("Generating Holter report");

    let metrics = compute_holter_metrics(&measurements);
    let response = HolterReportResponse {
        report: generate_holter_report(&measurements, &metrics),
        metrics,
    };
    (StatusCode::OK, Json(response))
}

/// Generate a CIED follow-up report from structured input
#[utoipa::path(
    post,
    path = "/api/reports/cied",
    request_body = CiedReportInput,
    responses(
        (status = 200, description = "CIED report generated", body = CiedReportResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "reports"
)]
#[instrument(skip(input))]
pub async fn generate_cied(Json(input): Json<CiedReportInput>) -> impl IntoResponse {
    info!("Generating CIED report");

    let response = CiedReportResponse {
        report: generate_cied_report(&input),
    };
    (StatusCode::OK, Json(response))
}

/// Compose the consult letter from its sections
#[utoipa::path(
    post,
    path = "/api/reports/brief",
    request_body = BriefLetterInput,
    responses(
        (status = 200, description = "Consult letter composed", body = BriefLetterResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "reports"
)]
#[instrument(skip(input))]
pub async fn generate_brief(Json(input): Json<BriefLetterInput>) -> impl IntoResponse {
    info!("Composing consult letter");

    let response = BriefLetterResponse {
        letter: compose_brief_letter(&input),
    };
    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_generate_echo_handler() {
        let measurements = EchoMeasurements::default();
        let response = generate_echo(Json(measurements)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_generate_holter_handler() {
        let measurements = HolterMeasurements::default();
        let response = generate_holter(Json(measurements)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
