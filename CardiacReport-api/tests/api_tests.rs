use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
};
use cardiac_report_api::api::create_app;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Helper function to get body bytes from a response
async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_app().await;

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert!(body["components"]["api"]["status"].is_string());
}

#[tokio::test]
async fn test_generate_echo_report() {
    let app = create_app().await;

    let payload = json!({
        "patient": {"sex": "Man", "leeftijd": 60.0, "bsa": 2.0},
        "lv_hypertrofie_choice": "Normotroof",
        "ivsd": 10.0,
        "lvef": 60.0,
        "systolic_option": "goede globale en regionale systolische functie"
    });

    let response = app
        .oneshot(json_request(Method::POST, "/api/reports/echo", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let report = body["report"].as_str().unwrap();
    assert!(report.starts_with("LV: Normotroof"));
    assert!(report.contains("LVEF 60%"));
    assert!(body["recommendations"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_generate_fietstest_report() {
    let app = create_app().await;

    let payload = json!({
        "patient": {"sex": "Man", "leeftijd": 50.0, "weight": 80.0},
        "start_watt": 50.0,
        "increment_watt": 25.0,
        "max_watt": 200.0,
        "duration_at_max": 45.0,
        "max_hr": 160.0,
        "conclusion": "Normale fietsproef"
    });

    let response = app
        .oneshot(json_request(Method::POST, "/api/reports/fietstest", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["report"].as_str().unwrap().contains("Start aan 50 W"));
    assert_eq!(body["metrics"]["predicted_max_hr"], 173);
}

#[tokio::test]
async fn test_generate_holter_report() {
    let app = create_app().await;

    let payload = json!({
        "patient": {"sex": "Vrouw"},
        "recording_duration_hours": 24,
        "avg_hr": 72,
        "min_hr": 35,
        "max_hr": 110
    });

    let response = app
        .oneshot(json_request(Method::POST, "/api/reports/holter", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["report"].as_str().unwrap().contains("bradycardie"));
    assert_eq!(body["metrics"]["brady_flag"], true);
}

#[tokio::test]
async fn test_store_snapshot_and_list_patient_studies() {
    let app = create_app().await;

    let store_payload = json!({
        "study_datetime": "2024-03-12T10:00:00Z",
        "source": "manual",
        "payload": {
            "patient": {"sex": "Man", "patient_id": "itest-1"},
            "report_texts": {"echo": "LV: Normotroof."}
        }
    });

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/studies/echo/from-snapshot",
            store_payload,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let id = body["id"].as_i64().unwrap();
    assert!(id > 0);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/patients/itest-1/studies")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let studies = body.as_array().unwrap();
    assert_eq!(studies.len(), 1);
    assert_eq!(studies[0]["id"].as_i64().unwrap(), id);
    assert_eq!(studies[0]["study_type"], "echo");
    assert_eq!(
        studies[0]["payload"]["report_texts"]["echo"],
        "LV: Normotroof."
    );
}

#[tokio::test]
async fn test_store_snapshot_rejects_unknown_study_type() {
    let app = create_app().await;

    let payload = json!({
        "payload": {
            "patient": {"sex": "Man", "patient_id": "itest-2"},
            "report_texts": {"echo": "tekst"}
        }
    });

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/studies/angiogram/from-snapshot",
            payload,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_scenario_catalog_endpoints() {
    let app = create_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/scenarios")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let scenarios = body.as_array().unwrap();
    assert!(scenarios.len() >= 10);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/scenarios/Atriumflutter")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "Atriumflutter");
    assert!(body["plan"].as_array().unwrap().len() >= 1);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/scenarios/Onbekend%20scenario")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_scenario_search() {
    let app = create_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/scenarios?q=brugada")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let scenarios = body.as_array().unwrap();
    assert_eq!(scenarios.len(), 1);
    assert_eq!(scenarios[0]["name"], "Brugada syndroom (BrS)");
}

#[tokio::test]
async fn test_ingest_rejects_missing_file_field() {
    let app = create_app().await;

    let body = "--boundary\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nwaarde\r\n--boundary--\r\n";
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/ingest/ecg-pdf")
                .header(
                    header::CONTENT_TYPE,
                    "multipart/form-data; boundary=boundary",
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_ingest_rejects_invalid_pdf() {
    let app = create_app().await;

    let body = "--boundary\r\nContent-Disposition: form-data; name=\"file\"; filename=\"report.pdf\"\r\nContent-Type: application/pdf\r\n\r\nnot a pdf\r\n--boundary--\r\n";
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/ingest/ecg-pdf")
                .header(
                    header::CONTENT_TYPE,
                    "multipart/form-data; boundary=boundary",
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"], "unprocessable");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = create_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/does-not-exist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
