use std::sync::Arc;
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};
use utoipa::{IntoParams, ToSchema};

use cardiac_report_domain::services::{
    create_default_study_service, StudyServiceError, StudyServiceTrait,
};

use crate::entities::study::{StoreSnapshotRequest, StoreSnapshotResponse, StudyResponse};
use super::ErrorResponse;

/// Service type for dependency injection
pub type StudyService = Arc<dyn StudyServiceTrait + Send + Sync>;

/// Create a default service for the handlers to use
pub fn create_service() -> StudyService {
    Arc::new(create_default_study_service())
}

/// Query parameters for the study listing
#[derive(Debug, Deserialize, Clone, IntoParams, ToSchema)]
pub struct StudiesQueryParams {
    /// Restrict to one study type ("echo", "ecg", ...)
    pub study_type: Option<String>,

    /// Maximum number of results (default: 100, max: 1000)
    pub limit: Option<usize>,

    /// Pagination offset (default: 0)
    pub offset: Option<usize>,

    /// Sort direction (asc/desc, default: desc)
    pub sort: Option<String>,
}

/// Paginated response for stored studies
#[derive(Serialize, ToSchema)]
pub struct PaginatedStudiesResponse {
    /// Total count of items available
    pub total_count: usize,

    /// Current offset
    pub offset: usize,

    /// Current limit
    pub limit: usize,

    /// Actual data items
    pub data: Vec<StudyResponse>,
}

/// Map service errors to API error responses
fn map_service_error(error: StudyServiceError) -> Response {
    match error {
        StudyServiceError::Validation(message) => {
            warn!("Study request rejected: {}", message);
            ErrorResponse::validation_error(&message, None).into_response()
        }
        StudyServiceError::NotFound(message) => {
            info!("Study not found: {}", message);
            ErrorResponse::not_found("study").into_response()
        }
        StudyServiceError::Repository(message) => {
            error!("Study repository error: {}", message);
            ErrorResponse::internal_error().into_response()
        }
    }
}

/// Store a study snapshot for later retrieval
#[utoipa::path(
    post,
    path = "/api/studies/{study_type}/from-snapshot",
    params(
        ("study_type" = String, Path, description = "Study modality (echo, ecg, fietstest, holter, cied)")
    ),
    request_body = StoreSnapshotRequest,
    responses(
        (status = 200, description = "Snapshot stored", body = StoreSnapshotResponse),
        (status = 400, description = "Invalid snapshot", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "studies"
)]
#[instrument(skip(service, request))]
pub async fn store_snapshot(
    State(service): State<StudyService>,
    Path(study_type): Path<String>,
    Json(request): Json<StoreSnapshotRequest>,
) -> Result<impl IntoResponse, Response> {
    info!("Storing {} snapshot", study_type);

    let stored = service
        .store_snapshot(
            &study_type,
            request.payload,
            request.study_datetime,
            request.source,
        )
        .await
        .map_err(map_service_error)?;

    info!("Snapshot stored with id {}", stored.id);
    Ok((StatusCode::OK, Json(StoreSnapshotResponse { id: stored.id })))
}

/// Get all studies for a patient, oldest first
#[utoipa::path(
    get,
    path = "/api/patients/{patient_id}/studies",
    params(
        ("patient_id" = String, Path, description = "Patient identifier")
    ),
    responses(
        (status = 200, description = "Studies for the patient", body = [StudyResponse]),
        (status = 400, description = "Invalid patient id", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "studies"
)]
#[instrument(skip(service))]
pub async fn get_patient_studies(
    State(service): State<StudyService>,
    Path(patient_id): Path<String>,
) -> Result<impl IntoResponse, Response> {
    info!("Fetching studies for patient {}", patient_id);

    let studies = service
        .studies_for_patient(&patient_id)
        .await
        .map_err(map_service_error)?;

    let response: Vec<StudyResponse> = studies.into_iter().map(StudyResponse::from).collect();
    Ok((StatusCode::OK, Json(response)))
}

/// Get a single stored study by id
#[utoipa::path(
    get,
    path = "/api/studies/record/{id}",
    params(
        ("id" = i64, Path, description = "Study identifier")
    ),
    responses(
        (status = 200, description = "Study found", body = StudyResponse),
        (status = 404, description = "Study not found", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "studies"
)]
#[instrument(skip(service))]
pub async fn get_study(
    State(service): State<StudyService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Response> {
    info!("Fetching study {}", id);

    let study = service.get_study(id).await.map_err(map_service_error)?;
    Ok((StatusCode::OK, Json(StudyResponse::from(study))))
}

/// Get a filtered, paginated study listing
#[utoipa::path(
    get,
    path = "/api/studies",
    params(StudiesQueryParams),
    responses(
        (status = 200, description = "Study listing", body = PaginatedStudiesResponse),
        (status = 400, description = "Invalid filter", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "studies"
)]
#[instrument(skip(service))]
pub async fn get_filtered_studies(
    State(service): State<StudyService>,
    Query(params): Query<StudiesQueryParams>,
) -> Result<impl IntoResponse, Response> {
    let limit = params.limit.unwrap_or(100).min(1000);
    let offset = params.offset.unwrap_or(0);
    let sort_desc = !matches!(params.sort.as_deref(), Some("asc"));

    let (studies, total_count) = service
        .get_filtered_studies(params.study_type, Some(limit), Some(offset), Some(sort_desc))
        .await
        .map_err(map_service_error)?;

    let response = PaginatedStudiesResponse {
        total_count,
        offset,
        limit,
        data: studies.into_iter().map(StudyResponse::from).collect(),
    };

    Ok((StatusCode::OK, Json(response)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardiac_report_domain::entities::{PatientContext, StudySnapshot};

    fn snapshot_request(patient_id: &str) -> StoreSnapshotRequest {
        let mut payload = StudySnapshot::default();
        payload.patient = Some(PatientContext {
            patient_id: Some(patient_id.to_string()),
            ..Default::default()
        });
        payload
            .report_texts
            .insert("echo".to_string(), "LV: Normotroof.".to_string());

        StoreSnapshotRequest {
            study_datetime: Some("2024-03-12T10:00:00Z".to_string()),
            source: Some("manual".to_string()),
            payload,
        }
    }

    #[tokio::test]
    async fn test_store_and_list_roundtrip() {
        let service = create_service();

        let response = store_snapshot(
            State(service.clone()),
            Path("echo".to_string()),
            Json(snapshot_request("p-100")),
        )
        .await;
        assert!(response.is_ok());

        let listed = get_patient_studies(State(service), Path("p-100".to_string())).await;
        assert!(listed.is_ok());
    }

    #[tokio::test]
    async fn test_store_snapshot_rejects_unknown_type() {
        let service = create_service();

        let response = store_snapshot(
            State(service),
            Path("angiogram".to_string()),
            Json(snapshot_request("p-101")),
        )
        .await;

        let error = response.err().expect("expected validation error");
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_study_not_found() {
        let service = create_service();
        let response = get_study(State(service), Path(123456)).await;

        let error = response.err().expect("expected not found");
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
    }
}
