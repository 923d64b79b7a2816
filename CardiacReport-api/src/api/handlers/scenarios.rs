use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::{IntoParams, ToSchema};

use cardiac_report_domain::scenarios;

use super::ErrorResponse;

/// Catalog entry without the plan text, for listings
#[derive(Debug, Serialize, ToSchema)]
pub struct ScenarioSummary {
    /// Scenario name
    pub name: String,
    /// One-line description
    pub description: String,
}

/// Full scenario with its plan blocks
#[derive(Debug, Serialize, ToSchema)]
pub struct ScenarioResponse {
    /// Scenario name
    pub name: String,
    /// One-line description
    pub description: String,
    /// Plan text blocks in presentation order
    pub plan: Vec<String>,
}

/// Query parameters for the scenario listing
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ScenarioQueryParams {
    /// Case-insensitive search over name and description
    pub q: Option<String>,
}

/// List clinical scenarios, optionally filtered by a search term
#[utoipa::path(
    get,
    path = "/api/scenarios",
    params(ScenarioQueryParams),
    responses(
        (status = 200, description = "Scenario catalog", body = [ScenarioSummary]),
    ),
    security(("bearer" = [])),
    tag = "scenarios"
)]
#[instrument]
pub async fn list_scenarios(Query(params): Query<ScenarioQueryParams>) -> impl IntoResponse {
    let scenarios = match params.q.as_deref() {
        Some(query) => scenarios::search(query),
        None => scenarios::all().collect(),
    };

    info!("Returning {} scenarios", scenarios.len());

    let response: Vec<ScenarioSummary> = scenarios
        .into_iter()
        .map(|scenario| ScenarioSummary {
            name: scenario.name.to_string(),
            description: scenario.description.to_string(),
        })
        .collect();

    (StatusCode::OK, Json(response))
}

/// Get one clinical scenario with its plan text
#[utoipa::path(
    get,
    path = "/api/scenarios/{name}",
    params(
        ("name" = String, Path, description = "Exact scenario name")
    ),
    responses(
        (status = 200, description = "Scenario found", body = ScenarioResponse),
        (status = 404, description = "Scenario not found", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "scenarios"
)]
#[instrument]
pub async fn get_scenario(Path(name): Path<String>) -> Result<impl IntoResponse, Response> {
    let Some(scenario) = scenarios::get(&name) else {
        info!("Scenario not found: {}", name);
        return Err(ErrorResponse::not_found("scenario").into_response());
    };

    let response = ScenarioResponse {
        name: scenario.name.to_string(),
        description: scenario.description.to_string(),
        plan: scenario.plan.iter().map(|block| block.to_string()).collect(),
    };

    Ok((StatusCode::OK, Json(response)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_scenarios_returns_catalog() {
        let response = list_scenarios(Query(ScenarioQueryParams { q: None }))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_scenario_not_found() {
        let response = get_scenario(Path("does not exist".to_string())).await;
        let error = response.err().expect("expected not found");
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_scenario_by_exact_name() {
        let response = get_scenario(Path("Atriumflutter".to_string())).await;
        assert!(response.is_ok());
    }
}
