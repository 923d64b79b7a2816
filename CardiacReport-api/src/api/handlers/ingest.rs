use axum::{
    extract::Multipart,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};
use utoipa::ToSchema;

use cardiac_report_domain::entities::{EcgMeasurements, FietstestMeasurements, PatientContext};
use cardiac_report_domain::pdf_ingest::ecg::parse_ecg_pdf;
use cardiac_report_domain::pdf_ingest::fietstest::parse_fietstest_pdf;
use cardiac_report_domain::pdf_ingest::PdfIngestError;

use super::ErrorResponse;

/// Parsed ECG PDF upload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EcgIngestResponse {
    /// Patient details found in the document
    pub patient: PatientContext,
    /// Extracted ECG measurements
    pub measurements: EcgMeasurements,
    /// Non-fatal extraction warnings
    pub warnings: Vec<String>,
}

/// Parsed fietstest PDF upload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FietstestIngestResponse {
    /// Patient details found in the document
    pub patient: PatientContext,
    /// Extracted fietstest measurements
    pub measurements: FietstestMeasurements,
    /// Non-fatal extraction warnings
    pub warnings: Vec<String>,
}

/// Pull the uploaded PDF out of the multipart body.
/// Accepts the "file" field, or the first field that carries a filename.
async fn read_pdf_field(mut multipart: Multipart) -> Result<Vec<u8>, Response> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        warn!("Failed to read multipart field: {}", e);
        ErrorResponse::bad_request("Could not read multipart body").into_response()
    })? {
        let is_file = field.name() == Some("file") || field.file_name().is_some();
        if !is_file {
            continue;
        }

        let bytes = field.bytes().await.map_err(|e| {
            warn!("Failed to read uploaded file: {}", e);
            ErrorResponse::bad_request("Could not read uploaded file").into_response()
        })?;

        if bytes.is_empty() {
            return Err(ErrorResponse::bad_request("Uploaded file is empty").into_response());
        }
        return Ok(bytes.to_vec());
    }

    warn!("No file field found in multipart upload");
    Err(ErrorResponse::bad_request("Expected a 'file' field with the PDF").into_response())
}

/// Map extraction failures onto API error responses
fn map_ingest_error(error: PdfIngestError) -> Response {
    match &error {
        PdfIngestError::Parse(_) | PdfIngestError::NoText => {
            warn!("PDF ingest failed: {}", error);
            ErrorResponse::unprocessable(&error.to_string()).into_response()
        }
        PdfIngestError::OcrUnavailable(_) => {
            error!("OCR toolchain missing: {}", error);
            ErrorResponse::unprocessable(&error.to_string()).into_response()
        }
        PdfIngestError::Ocr(_) | PdfIngestError::Io(_) => {
            error!("PDF ingest failed unexpectedly: {}", error);
            ErrorResponse::internal_error().into_response()
        }
    }
}

/// Parse an uploaded ECG PDF into structured measurements
#[utoipa::path(
    post,
    path = "/api/ingest/ecg-pdf",
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "ECG PDF parsed", body = EcgIngestResponse),
        (status = 400, description = "Invalid upload", body = ErrorResponse),
        (status = 422, description = "PDF could not be parsed", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "ingest"
)]
#[instrument(skip(multipart))]
pub async fn ingest_ecg_pdf(multipart: Multipart) -> Result<impl IntoResponse, Response> {
    let pdf_bytes = read_pdf_field(multipart).await?;
    info!("Parsing uploaded ECG PDF ({} bytes)", pdf_bytes.len());

    // Extraction blocks on the OCR toolchain for scanned documents.
    let outcome = tokio::task::spawn_blocking(move || parse_ecg_pdf(&pdf_bytes))
        .await
        .map_err(|e| {
            error!("PDF parsing task failed: {}", e);
            ErrorResponse::internal_error().into_response()
        })?
        .map_err(map_ingest_error)?;

    Ok((
        StatusCode::OK,
        Json(EcgIngestResponse {
            patient: outcome.patient,
            measurements: outcome.measurements,
            warnings: outcome.warnings,
        }),
    ))
}

/// Parse an uploaded fietstest PDF into structured measurements
#[utoipa::path(
    post,
    path = "/api/ingest/fietstest-pdf",
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Fietstest PDF parsed", body = FietstestIngestResponse),
        (status = 400, description = "Invalid upload", body = ErrorResponse),
        (status = 422, description = "PDF could not be parsed", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "ingest"
)]
#[instrument(skip(multipart))]
pub async fn ingest_fietstest_pdf(multipart: Multipart) -> Result<impl IntoResponse, Response> {
    let pdf_bytes = read_pdf_field(multipart).await?;
    info!("Parsing uploaded fietstest PDF ({} bytes)", pdf_bytes.len());

    let outcome = tokio::task::spawn_blocking(move || parse_fietstest_pdf(&pdf_bytes))
        .await
        .map_err(|e| {
            error!("PDF parsing task failed: {}", e);
            ErrorResponse::internal_error().into_response()
        })?
        .map_err(map_ingest_error)?;

    Ok((
        StatusCode::OK,
        Json(FietstestIngestResponse {
            patient: outcome.patient,
            measurements: outcome.measurements,
            warnings: outcome.warnings,
        }),
    ))
}
