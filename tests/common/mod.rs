#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::Value;
use sqlx::PgPool;
use std::sync::Arc;
use tourism_reviews::state::AppState;
use uuid::Uuid;

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}

/// Full application router, `/health` and `/api/*` included.
pub fn make_server(pool: PgPool) -> TestServer {
    let app = tourism_reviews::routes::router(create_test_state(pool));
    TestServer::new(app).unwrap()
}

/// Same routes as served in production, trailing-slash normalization included.
pub fn make_app_server(pool: PgPool) -> TestServer {
    let service = tourism_reviews::routes::app_router(create_test_state(pool));
    TestServer::new(axum::Router::new().fallback_service(service)).unwrap()
}

pub async fn create_test_attraction(pool: &PgPool, name: &str, entry_fee: f64) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO attractions (name, location, entry_fee) VALUES ($1, 'Paris', $2) RETURNING id",
    )
    .bind(name)
    .bind(entry_fee)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_visitor(pool: &PgPool, email: &str, visited: &[Uuid]) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO visitors (name, email, visited_attractions) VALUES ('Test Visitor', $1, $2) RETURNING id",
    )
    .bind(email)
    .bind(visited)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn attraction_rating(pool: &PgPool, id: Uuid) -> f64 {
    sqlx::query_scalar("SELECT rating FROM attractions WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn review_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Posts a review through the API and returns the response body.
pub async fn post_review(server: &TestServer, attraction: Uuid, visitor: Uuid, score: i64) -> Value {
    let response = server
        .post("/api/reviews")
        .json(&serde_json::json!({
            "attraction": attraction,
            "visitor": visitor,
            "score": score,
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}
