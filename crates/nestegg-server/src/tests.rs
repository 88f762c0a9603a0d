//! Server API tests

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use nestegg_core::db::Database;
use nestegg_core::models::{EmploymentType, SimulationInput};
use nestegg_core::planner;

fn open_test_db() -> Database {
    Database::in_memory().unwrap()
}

fn setup_test_app() -> Router {
    let config = ServerConfig {
        require_auth: false,
        ..Default::default()
    };
    create_router_with_advisor(open_test_db(), config, None)
}

async fn get_body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body();
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn simulation_body() -> serde_json::Value {
    serde_json::json!({
        "monthly_expense": 2000.0,
        "employment": "salaried",
        "dependents": 1,
        "current_value": 5000.0,
        "goal_amount": 60000.0,
        "horizon_years": 8.0,
        "monthly_contribution": 350.0,
        "annual_return_pct": 6.0
    })
}

// ========== Health ==========

#[tokio::test]
async fn test_health() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["simulations"], 0);
    assert!(json["advisor"].is_null());
}

// ========== Simulations ==========

#[tokio::test]
async fn test_create_simulation_matches_core() {
    let app = setup_test_app();

    let response = app
        .oneshot(json_request("POST", "/api/simulations", simulation_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert!(json["id"].as_i64().unwrap() > 0);

    // The endpoint must compute exactly what the core computes
    let input = SimulationInput {
        monthly_expense: 2000.0,
        employment: EmploymentType::Salaried,
        dependents: 1,
        current_value: 5000.0,
        goal_amount: 60000.0,
        horizon_years: 8.0,
        monthly_contribution: 350.0,
        annual_return_pct: 6.0,
    };
    let outcome = planner::simulate(&input);

    assert_eq!(
        json["outcome"]["reserve_target"].as_f64().unwrap(),
        outcome.reserve_target
    );
    assert_eq!(
        json["outcome"]["required_contribution"].as_f64().unwrap(),
        outcome.required_contribution
    );
    assert_eq!(
        json["outcome"]["years_to_goal"].as_f64().unwrap(),
        outcome.years_to_goal
    );
}

#[tokio::test]
async fn test_create_simulation_without_save() {
    let db = open_test_db();
    let config = ServerConfig {
        require_auth: false,
        ..Default::default()
    };
    let app = create_router_with_advisor(db.clone(), config, None);

    let mut body = simulation_body();
    body["save"] = serde_json::json!(false);

    let response = app
        .oneshot(json_request("POST", "/api/simulations", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert!(json["id"].is_null());
    assert_eq!(db.count_simulations().unwrap(), 0);
}

#[tokio::test]
async fn test_create_simulation_rejects_negative() {
    let app = setup_test_app();

    let mut body = simulation_body();
    body["goal_amount"] = serde_json::json!(-1.0);

    let response = app
        .oneshot(json_request("POST", "/api/simulations", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = get_body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("goal_amount"));
}

#[tokio::test]
async fn test_list_get_delete_simulation() {
    let db = open_test_db();
    let config = ServerConfig {
        require_auth: false,
        ..Default::default()
    };
    let app = create_router_with_advisor(db, config, None);

    // Create two
    for goal in [50000.0, 90000.0] {
        let mut body = simulation_body();
        body["goal_amount"] = serde_json::json!(goal);
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/simulations", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    // List: newest first
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/simulations")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["goal_amount"], 90000.0);
    let id = records[0]["id"].as_i64().unwrap();

    // Get one
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/simulations/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["goal_amount"], 90000.0);
    assert_eq!(json["employment"], "salaried");

    // Delete it
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/simulations/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Gone now
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/simulations/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_rejects_excessive_limit() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/simulations?limit=100000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ========== Projections ==========

#[tokio::test]
async fn test_projection_table() {
    let app = setup_test_app();

    let body = serde_json::json!({
        "monthly_contribution": 100.0,
        "rates_pct": [0.0, 5.0],
        "horizons_years": [1.0, 10.0]
    });

    let response = app
        .oneshot(json_request("POST", "/api/projections", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;

    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["label"], "0%");
    // 100/month for 1 year at 0% is exactly 1200
    assert_eq!(rows[0]["points"][0]["value"], 1200.0);
    assert_eq!(rows[0]["points"][1]["value"], 12000.0);
}

#[tokio::test]
async fn test_projection_flat_cells() {
    let app = setup_test_app();

    let body = serde_json::json!({
        "monthly_contribution": 100.0,
        "rates_pct": [0.0, 5.0],
        "horizons_years": [1.0, 10.0],
        "timing": "period_start",
        "flat": true
    });

    let response = app
        .oneshot(json_request("POST", "/api/projections", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    let cells = json.as_array().unwrap();
    assert_eq!(cells.len(), 4);
    assert_eq!(cells[0]["label"], "0%");
}

#[tokio::test]
async fn test_projection_rejects_empty_axes() {
    let app = setup_test_app();

    let body = serde_json::json!({
        "monthly_contribution": 100.0,
        "rates_pct": [],
        "horizons_years": [1.0]
    });

    let response = app
        .oneshot(json_request("POST", "/api/projections", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ========== Advice ==========

#[tokio::test]
async fn test_advice_with_mock_advisor() {
    let db = open_test_db();
    let config = ServerConfig {
        require_auth: false,
        ..Default::default()
    };
    let app = create_router_with_advisor(
        db.clone(),
        config,
        Some(nestegg_core::advisor::AdvisorClient::mock()),
    );

    // Create a simulation first
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/simulations", simulation_body()))
        .await
        .unwrap();
    let id = get_body_json(response).await["id"].as_i64().unwrap();

    // Request advice
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/simulations/{}/advice", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["model"], "mock");
    assert!(!json["advice"].as_str().unwrap().is_empty());

    // Advice is stored on the record
    let record = db.get_simulation(id).unwrap().unwrap();
    assert!(record.advice.is_some());
}

#[tokio::test]
async fn test_advice_without_advisor_is_503() {
    let db = open_test_db();
    let config = ServerConfig {
        require_auth: false,
        ..Default::default()
    };
    let app = create_router_with_advisor(db, config, None);

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/simulations", simulation_body()))
        .await
        .unwrap();
    let id = get_body_json(response).await["id"].as_i64().unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/simulations/{}/advice", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

// ========== Authentication ==========

#[tokio::test]
async fn test_auth_rejects_missing_key() {
    let config = ServerConfig {
        require_auth: true,
        api_keys: vec!["secret-key".to_string()],
        ..Default::default()
    };
    let app = create_router_with_advisor(open_test_db(), config, None);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_accepts_valid_key() {
    let config = ServerConfig {
        require_auth: true,
        api_keys: vec!["secret-key".to_string()],
        ..Default::default()
    };
    let app = create_router_with_advisor(open_test_db(), config, None);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header("authorization", "Bearer secret-key")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_auth_rejects_wrong_key() {
    let config = ServerConfig {
        require_auth: true,
        api_keys: vec!["secret-key".to_string()],
        ..Default::default()
    };
    let app = create_router_with_advisor(open_test_db(), config, None);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header("authorization", "Bearer wrong-key")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_validate_api_key_constant_time_paths() {
    let keys = vec!["alpha".to_string(), "beta".to_string()];
    assert!(validate_api_key("alpha", &keys));
    assert!(validate_api_key("beta", &keys));
    assert!(!validate_api_key("gamma", &keys));
    assert!(!validate_api_key("", &keys));
    assert!(!validate_api_key("alpha", &[]));
}
