//! Integration tests for the web form shell against a real listener.
//!
//! Each test spawns an in-process axum server on 127.0.0.1:0 backed by a
//! `MockGenerator`, then drives it over HTTP the way a browser would.

use std::sync::Arc;

use reqwest::StatusCode;
use studbud_service::MockGenerator;

async fn spawn_server(mock: Arc<MockGenerator>) -> String {
    let server = studbud_server::test_helpers::spawn_test_server(mock).await;
    server.base_url
}

fn ann_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Ann"),
        ("subjects", "math"),
        ("subjects", "science"),
        ("hours", "3"),
        ("goals", "pass exam"),
        ("strengths", "algebra"),
        ("weaknesses", "geometry"),
        ("preferences", "visual"),
    ]
}

#[tokio::test]
async fn form_page_is_served() {
    let url = spawn_server(Arc::new(MockGenerator::success("unused"))).await;
    let resp = reqwest::get(format!("{url}/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = resp.text().await.unwrap();
    assert!(html.contains("Studbud: AI Study Planner"));
    assert!(html.contains("name=\"hours\""));
}

#[tokio::test]
async fn submit_then_download() {
    let mock = Arc::new(MockGenerator::success("Week 1: algebra drills\nWeek 2: geometry"));
    let url = spawn_server(mock.clone()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{url}/plan"))
        .form(&ann_form())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = resp.text().await.unwrap();
    assert!(html.contains("Week 1: algebra drills\nWeek 2: geometry"));

    let prompt = &mock.prompts()[0];
    for needle in ["Ann", "Math, Science", "pass exam", "algebra", "geometry", "Visual", "3"] {
        assert!(prompt.contains(needle), "missing {needle:?}");
    }

    let resp = client
        .post(format!("{url}/plan/download"))
        .form(&[("plan", "Week 1: algebra drills\r\nWeek 2: geometry")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let disposition = resp.headers()["content-disposition"].to_str().unwrap().to_string();
    assert!(disposition.contains("study_plan.txt"));
    assert_eq!(
        resp.text().await.unwrap(),
        "Week 1: algebra drills\nWeek 2: geometry"
    );
}

#[tokio::test]
async fn failure_leaves_server_usable() {
    let url = spawn_server(Arc::new(MockGenerator::failure("model unavailable"))).await;
    let client = reqwest::Client::new();

    for _ in 0..2 {
        let resp = client
            .post(format!("{url}/plan"))
            .form(&ann_form())
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let html = resp.text().await.unwrap();
        assert!(html.contains("Please try again. Error:"));
        assert!(html.contains("model unavailable"));
    }

    let resp = reqwest::get(format!("{url}/api/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn json_api_roundtrip() {
    let url = spawn_server(Arc::new(MockGenerator::success("PLAN-XYZ"))).await;
    let resp = reqwest::Client::new()
        .post(format!("{url}/api/plan"))
        .json(&serde_json::json!({ "name": "Ann", "hours": 8, "subjects": ["History"] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["plan"], "PLAN-XYZ");
}
