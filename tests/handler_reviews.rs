mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::PgPool;
use uuid::Uuid;

#[sqlx::test]
async fn test_review_lifecycle_keeps_rating_in_sync(pool: PgPool) {
    let attraction = common::create_test_attraction(&pool, "Eiffel Tower", 10.0).await;
    let visitor = common::create_test_visitor(&pool, "v@example.com", &[attraction]).await;
    let server = common::make_server(pool.clone());

    let review = common::post_review(&server, attraction, visitor, 4).await;
    assert_eq!(review["attraction"], attraction.to_string());
    assert_eq!(review["visitor"], visitor.to_string());
    assert_eq!(review["score"], 4);

    let fetched = server
        .get(&format!("/api/attractions/{attraction}"))
        .await
        .json::<Value>();
    assert_eq!(fetched["rating"], 4.0);

    // Same pair again: rejected, rating untouched.
    let duplicate = server
        .post("/api/reviews")
        .json(&json!({ "attraction": attraction, "visitor": visitor, "score": 1 }))
        .await;
    duplicate.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        duplicate.json::<Value>()["error"],
        "Visitor has already reviewed this attraction"
    );
    assert_eq!(common::attraction_rating(&pool, attraction).await, 4.0);

    let review_id = review["id"].as_str().unwrap().to_string();
    let deleted = server.delete(&format!("/api/reviews/{review_id}")).await;
    deleted.assert_status_ok();
    assert_eq!(deleted.json::<Value>()["message"], "Review deleted successfully");

    assert_eq!(common::attraction_rating(&pool, attraction).await, 0.0);
    assert_eq!(common::review_count(&pool).await, 0);
}

#[sqlx::test]
async fn test_review_rejected_when_not_visited(pool: PgPool) {
    let attraction = common::create_test_attraction(&pool, "Louvre", 17.0).await;
    let visitor = common::create_test_visitor(&pool, "w@example.com", &[]).await;
    let server = common::make_server(pool.clone());

    let response = server
        .post("/api/reviews")
        .json(&json!({ "attraction": attraction, "visitor": visitor, "score": 5 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "Visitor has not visited this attraction"
    );
    assert_eq!(common::review_count(&pool).await, 0);
    assert_eq!(common::attraction_rating(&pool, attraction).await, 0.0);
}

#[sqlx::test]
async fn test_rating_is_unrounded_mean(pool: PgPool) {
    let attraction = common::create_test_attraction(&pool, "Notre-Dame", 0.0).await;
    let server = common::make_server(pool.clone());

    for (i, score) in [5, 4, 4].into_iter().enumerate() {
        let email = format!("mean{i}@example.com");
        let visitor = common::create_test_visitor(&pool, &email, &[attraction]).await;
        common::post_review(&server, attraction, visitor, score).await;
    }

    let rating = common::attraction_rating(&pool, attraction).await;
    assert!((rating - 13.0 / 3.0).abs() < 1e-9);
}

#[sqlx::test]
async fn test_review_validation_errors(pool: PgPool) {
    let attraction = common::create_test_attraction(&pool, "Arc", 13.0).await;
    let visitor = common::create_test_visitor(&pool, "x@example.com", &[attraction]).await;
    let server = common::make_server(pool.clone());

    let cases = [
        json!({ "visitor": visitor, "score": 3 }),
        json!({ "attraction": attraction, "score": 3 }),
        json!({ "attraction": attraction, "visitor": visitor }),
        json!({ "attraction": attraction, "visitor": visitor, "score": 0 }),
        json!({ "attraction": attraction, "visitor": visitor, "score": 6 }),
        json!({ "attraction": attraction, "visitor": visitor, "score": 3.5 }),
        json!({ "attraction": "not-an-id", "visitor": visitor, "score": 3 }),
    ];

    for body in cases {
        let response = server.post("/api/reviews").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.json::<Value>()["error"].is_string());
    }

    assert_eq!(common::review_count(&pool).await, 0);
}

#[sqlx::test]
async fn test_review_for_unknown_attraction(pool: PgPool) {
    let ghost = Uuid::new_v4();
    let visitor = common::create_test_visitor(&pool, "g@example.com", &[ghost]).await;
    let server = common::make_server(pool.clone());

    let response = server
        .post("/api/reviews")
        .json(&json!({ "attraction": ghost, "visitor": visitor, "score": 3 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(common::review_count(&pool).await, 0);
}

#[sqlx::test]
async fn test_list_reviews_expands_references(pool: PgPool) {
    let attraction = common::create_test_attraction(&pool, "Sacre-Coeur", 0.0).await;
    let visitor = common::create_test_visitor(&pool, "l@example.com", &[attraction]).await;
    let server = common::make_server(pool);

    server
        .post("/api/reviews")
        .json(&json!({
            "attraction": attraction,
            "visitor": visitor,
            "score": 5,
            "comment": "Lovely view",
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.get("/api/reviews").await;
    response.assert_status_ok();

    let list = response.json::<Value>();
    let items = list.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["attraction"]["name"], "Sacre-Coeur");
    assert_eq!(items[0]["attraction"]["rating"], 5.0);
    assert_eq!(items[0]["visitor"]["email"], "l@example.com");
    assert_eq!(items[0]["comment"], "Lovely view");
}

#[sqlx::test]
async fn test_delete_review_not_found(pool: PgPool) {
    let server = common::make_server(pool);

    server
        .delete(&format!("/api/reviews/{}", Uuid::new_v4()))
        .await
        .assert_status_not_found();

    server
        .delete("/api/reviews/garbage")
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_concurrent_reviews_keep_mean_exact(pool: PgPool) {
    let attraction = common::create_test_attraction(&pool, "Pantheon", 11.0).await;
    let state = common::create_test_state(pool.clone());

    let mut handles = Vec::new();
    for (i, score) in [1.0, 2.0, 3.0, 4.0, 5.0, 5.0].into_iter().enumerate() {
        let email = format!("c{i}@example.com");
        let visitor = common::create_test_visitor(&pool, &email, &[attraction]).await;
        let service = state.review_service.clone();
        handles.push(tokio::spawn(async move {
            service
                .create_review(tourism_reviews::domain::entities::ReviewSubmission {
                    attraction: Some(attraction.to_string()),
                    visitor: Some(visitor.to_string()),
                    score: Some(score),
                    comment: None,
                })
                .await
        }));
    }

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let rating = common::attraction_rating(&pool, attraction).await;
    assert!((rating - 20.0 / 6.0).abs() < 1e-9);
}
