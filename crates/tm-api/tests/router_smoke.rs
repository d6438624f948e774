use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    tm_api::create_router(tm_api::test_state())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn post_matches(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/matches")
        .header(CONTENT_TYPE, "application/json")
        .header("x-request-id", "req-smoke-1")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn candidate(id: &str, skills: &[&str], rate: [f64; 2]) -> Value {
    json!({
        "id": id,
        "skills": skills,
        "rate": { "min": rate[0], "max": rate[1] },
        "location": "Nairobi",
        "remote_preference": "remote",
        "availability": [{ "start": "2025-01-01", "end": "2025-12-31" }],
        "rating": 4.8,
        "review_count": 15
    })
}

fn match_body() -> Value {
    json!({
        "request": {
            "id": "req-1",
            "required_skills": ["React", "TypeScript", "Node.js"],
            "budget": { "min": 80, "max": 120, "currency": "USD" },
            "start_date": "2025-03-01",
            "duration": { "value": 3, "unit": "months" },
            "location": "Lagos",
            "remote_preference": "remote"
        },
        "candidates": [
            candidate("talent-a", &["React", "TypeScript", "Node.js"], [90.0, 110.0]),
            candidate("talent-b", &["React", "JavaScript"], [90.0, 110.0]),
            candidate("talent-c", &["React", "TypeScript", "Node.js"], [200.0, 300.0])
        ]
    })
}

#[tokio::test]
async fn livez_is_healthy() {
    let (status, json) = send(
        app(),
        Request::builder().uri("/livez").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn matches_returns_only_qualifying_candidates() {
    let (status, json) = send(app(), post_matches(&match_body())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 1);
    assert_eq!(json["excluded"], 2);
    assert_eq!(json["request_id"], "req-smoke-1");
    assert_eq!(json["matches"][0]["profile_id"], "talent-a");
    assert_eq!(json["matches"][0]["breakdown"]["skills"], 1.0);
    assert!(json["run_id"].as_str().is_some_and(|id| id.len() == 26));
}

#[tokio::test]
async fn matches_honours_limit_and_weight_overrides() {
    let mut body = match_body();
    body["candidates"] = json!([
        candidate("a", &["React", "TypeScript", "Node.js"], [90.0, 110.0]),
        candidate("b", &["React", "TypeScript", "Node.js"], [70.0, 130.0]),
        candidate("c", &["React", "TypeScript", "Node.js"], [100.0, 150.0])
    ]);
    body["limit"] = json!(2);
    body["weights"] = json!({ "budget": 1.0 });

    let (status, json) = send(app(), post_matches(&body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 2);
    assert_eq!(json["weights"]["budget"], 1.0);
    assert_eq!(json["matches"][0]["profile_id"], "a");
    let first = json["matches"][0]["score"].as_f64().unwrap();
    let second = json["matches"][1]["score"].as_f64().unwrap();
    assert!(first >= second);
}

#[tokio::test]
async fn empty_pool_returns_empty_matches() {
    let mut body = match_body();
    body["candidates"] = json!([]);

    let (status, json) = send(app(), post_matches(&body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 0);
    assert_eq!(json["matches"], json!([]));
}

#[tokio::test]
async fn inverted_budget_is_a_bad_request() {
    let mut body = match_body();
    body["request"]["budget"] = json!({ "min": 150, "max": 100 });

    let (status, json) = send(app(), post_matches(&body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "bad_request");
    assert!(json["message"].as_str().unwrap().contains("budget.min"));
    assert_eq!(json["request_id"], "req-smoke-1");
}

#[tokio::test]
async fn unknown_weight_is_a_bad_request() {
    let mut body = match_body();
    body["weights"] = json!({ "charisma": 1.0 });

    let (status, json) = send(app(), post_matches(&body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("charisma"));
}

#[tokio::test]
async fn overflowing_weights_are_a_bad_request() {
    let mut body = match_body();
    body["weights"] = json!({ "skills": 1e308, "budget": 1e308 });

    let (status, json) = send(app(), post_matches(&body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("sum of weights"));
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/matches")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"request\":"))
        .unwrap();

    let (status, json) = send(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "bad_request");
}

#[tokio::test]
async fn config_reports_default_weights() {
    let (status, json) = send(
        app(),
        Request::builder().uri("/api/config").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["weights"]["skills"], 0.35);
    assert_eq!(json["missing_factor_policy"], "exclude");
    assert_eq!(json["cache"]["capacity"], 0);
}

#[tokio::test]
async fn unknown_route_is_json_not_found() {
    let (status, json) = send(
        app(),
        Request::builder().uri("/api/queue/jobs").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "not_found");
}
