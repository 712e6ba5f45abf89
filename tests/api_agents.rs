//! Integration tests for the agent query, plan, and task routes.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use common::{authed_request, body_json, json_request, test_app};

#[tokio::test]
async fn study_guide_query_gets_the_canned_study_response() {
    let app = test_app();
    let response = app
        .oneshot(authed_request(
            Method::POST,
            "/api/agents/query",
            Some(json!({"query": "Please make a Study Guide for calculus"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["context"]["topic"], "Machine Learning Fundamentals");
    let sources = body["sources"].as_array().unwrap();
    assert_eq!(sources.len(), 2);
    assert_eq!(sources[1]["url"], "https://example.com/lectures/week3");
}

#[tokio::test]
async fn assignment_query_gets_the_canned_assignment_response() {
    let app = test_app();
    let response = app
        .oneshot(authed_request(
            Method::POST,
            "/api/agents/query",
            Some(json!({"query": "help me with this assignment"})),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["context"]["assignment_type"], "Problem Set");
    assert_eq!(body["context"]["due_date"], "2023-06-20T23:59:00Z");
}

#[tokio::test]
async fn generic_query_echoes_text_with_no_sources() {
    let app = test_app();
    let response = app
        .oneshot(authed_request(
            Method::POST,
            "/api/agents/query",
            Some(json!({"query": "what is backpropagation?", "context": {"course": "CS101"}})),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert!(body["response"]
        .as_str()
        .unwrap()
        .contains("what is backpropagation?"));
    assert_eq!(body["sources"], json!([]));
    assert_eq!(body["context"]["query_type"], "general");
}

#[tokio::test]
async fn plan_returns_the_fixed_four_steps() {
    let app = test_app();
    let response = app
        .oneshot(authed_request(
            Method::POST,
            "/api/agents/plan",
            Some(json!({"query": "prepare for finals week"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let steps = body["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[0]["status"], "completed");
    assert_eq!(steps[1]["status"], "in_progress");
    assert_eq!(steps[2]["status"], "pending");
    assert_eq!(body["context"]["plan_id"], "plan-123456");
    assert_eq!(body["context"]["query"], "prepare for finals week");
}

#[tokio::test]
async fn task_status_is_fixed_for_any_id() {
    let app = test_app();
    let response = app
        .oneshot(authed_request(
            Method::GET,
            "/api/agents/tasks/task-9999",
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({
            "task_id": "task-9999",
            "status": "in_progress",
            "progress": 0.65,
            "result": null
        })
    );
}

#[tokio::test]
async fn agent_routes_require_credentials() {
    let app = test_app();
    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/agents/query",
            Some(json!({"query": "hi"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
