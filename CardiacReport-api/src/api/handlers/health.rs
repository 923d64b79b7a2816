use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;
use std::sync::Once;
use std::time::{SystemTime, UNIX_EPOCH};
use once_cell::sync::OnceCell;

use cardiac_report_domain::database;
use cardiac_report_domain::pdf_ingest;

/// Health check response model
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Current service status ("ok", "degraded", or "error")
    pub status: String,
    /// Current application version from the Cargo manifest
    pub version: String,
    /// Timestamp of when the response was generated
    pub timestamp: u64,
    /// Uptime of the service in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<u64>,
    /// Details about various components of the system
    pub components: ComponentStatus,
    /// Environment information
    pub environment: String,
}

/// Status of individual system components
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ComponentStatus {
    /// Database connection status
    pub database: ComponentHealthStatus,
    /// API status
    pub api: ComponentHealthStatus,
    /// OCR toolchain availability
    pub ocr: ComponentHealthStatus,
}

/// Health status for an individual component
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ComponentHealthStatus {
    /// Status of the component ("ok" or "degraded")
    pub status: String,
    /// Optional message with more details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// Track the time when the server started using a thread-safe OnceCell
static SERVER_START_TIME: OnceCell<u64> = OnceCell::new();
static INIT: Once = Once::new();

/// Initialize the server start time
pub fn initialize_server_start_time() {
    INIT.call_once(|| {
        let start_time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let _ = SERVER_START_TIME.set(start_time);
    });
}

/// Health check endpoint to verify the API is running
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "API is healthy", body = HealthResponse),
    ),
    tag = "health"
)]
#[instrument]
pub async fn health_check() -> impl IntoResponse {
    info!("Health check requested");

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let uptime = SERVER_START_TIME.get().map(|&start| now.saturating_sub(start));

    // The repository falls back to in-memory storage when the pool is
    // gone, so a missing database degrades the component but not the
    // service as a whole.
    let database = match database::get_connection_info() {
        Some(info) => ComponentHealthStatus {
            status: "ok".to_string(),
            message: Some(info),
        },
        None => ComponentHealthStatus {
            status: "degraded".to_string(),
            message: Some("Database pool not initialized; using in-memory storage".to_string()),
        },
    };

    // OCR availability only matters for scanned PDF uploads.
    let ocr = if pdf_ingest::ocr_available() {
        ComponentHealthStatus {
            status: "ok".to_string(),
            message: None,
        }
    } else {
        ComponentHealthStatus {
            status: "degraded".to_string(),
            message: Some(
                "pdftoppm/tesseract not found; scanned PDFs cannot be imported".to_string(),
            ),
        }
    };

    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: now,
        uptime,
        components: ComponentStatus {
            database,
            api: ComponentHealthStatus {
                status: "ok".to_string(),
                message: None,
            },
            ocr,
        },
        environment: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_health_check_returns_ok() {
        initialize_server_start_time();

        let response = health_check().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
