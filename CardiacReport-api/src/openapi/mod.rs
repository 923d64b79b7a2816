use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Report endpoints
        crate::api::handlers::reports::generate_echo,
        crate::api::handlers::reports::generate_fietstest,
        crate::api::handlers::reports::generate_ecg,
        crate::api::handlers::reports::generate_holter,
        crate::api::handlers::reports::generate_cied,
        crate::api::handlers::reports::generate_brief,

        // PDF ingest endpoints
        crate::api::handlers::ingest::ingest_ecg_pdf,
        crate::api::handlers::ingest::ingest_fietstest_pdf,

        // Study endpoints
        crate::api::handlers::studies::store_snapshot,
        crate::api::handlers::studies::get_patient_studies,
        crate::api::handlers::studies::get_study,
        crate::api::handlers::studies::get_filtered_studies,

        // Scenario endpoints
        crate::api::handlers::scenarios::list_scenarios,
        crate::api::handlers::scenarios::get_scenario,
    ),
    components(
        schemas(
            // Common entities
            crate::entities::common::PublicErrorResponse,
            crate::entities::study::StoreSnapshotRequest,
            crate::entities::study::StoreSnapshotResponse,
            crate::entities::study::StudyResponse,

            // Handler schemas
            crate::api::handlers::ErrorResponse,
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus,
            crate::api::handlers::reports::EchoReportResponse,
            crate::api::handlers::reports::FietstestReportResponse,
            crate::api::handlers::reports::EcgReportResponse,
            crate::api::handlers::reports::HolterReportResponse,
            crate::api::handlers::reports::CiedReportResponse,
            crate::api::handlers::reports::BriefLetterResponse,
            crate::api::handlers::ingest::EcgIngestResponse,
            crate::api::handlers::ingest::FietstestIngestResponse,
            crate::api::handlers::studies::StudiesQueryParams,
            crate::api::handlers::studies::PaginatedStudiesResponse,
            crate::api::handlers::scenarios::ScenarioSummary,
            crate::api::handlers::scenarios::ScenarioResponse,
            crate::api::handlers::scenarios::ScenarioQueryParams,

            // Domain entities
            cardiac_report_domain::entities::patient::Sex,
            cardiac_report_domain::entities::patient::PatientContext,
            cardiac_report_domain::entities::echo::EchoMeasurements,
            cardiac_report_domain::entities::fietstest::FietstestMeasurements,
            cardiac_report_domain::entities::fietstest::FietstestMetrics,
            cardiac_report_domain::entities::ecg::EcgMeasurements,
            cardiac_report_domain::entities::ecg::EcgMetrics,
            cardiac_report_domain::entities::holter::HolterMeasurements,
            cardiac_report_domain::entities::holter::HolterMetrics,
            cardiac_report_domain::entities::cied::CiedReportInput,
            cardiac_report_domain::entities::cied::LeadMeasurements,
            cardiac_report_domain::entities::snapshot::StudySnapshot,
            cardiac_report_domain::services::brief::BriefLetterInput,
            cardiac_report_domain::services::brief::ClinicalExam,
            cardiac_report_domain::services::brief::InvestigationSection,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "reports", description = "Report generation endpoints"),
        (name = "ingest", description = "PDF ingestion endpoints"),
        (name = "studies", description = "Study snapshot storage endpoints"),
        (name = "scenarios", description = "Clinical scenario catalog")
    ),
    info(
        title = "CardiacReport API",
        version = "0.1.0",
        description = "Backend API for structured cardiac report generation",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
struct ApiDoc;
