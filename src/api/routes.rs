//! API route configuration.

use crate::api::handlers::{
    create_attraction_handler, create_review_handler, create_visitor_handler,
    delete_attraction_handler, delete_review_handler, delete_visitor_handler,
    get_attraction_handler, get_visitor_handler, list_attractions_handler, list_reviews_handler,
    list_visitors_handler, route_not_found_handler, top_rated_handler, update_attraction_handler,
    update_visitor_handler, visitor_activity_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// All API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST   /attractions`            - Create an attraction
/// - `GET    /attractions`            - List attractions
/// - `GET    /attractions/top-rated`  - Five best rated attractions
/// - `GET    /attractions/{id}`       - Get an attraction
/// - `PUT    /attractions/{id}`       - Partially update an attraction
/// - `DELETE /attractions/{id}`       - Delete an attraction
/// - `POST   /visitors`               - Register a visitor
/// - `GET    /visitors`               - List visitors
/// - `GET    /visitors/activity`      - Visitors with review counts
/// - `GET    /visitors/{id}`          - Get a visitor
/// - `PUT    /visitors/{id}`          - Partially update a visitor
/// - `DELETE /visitors/{id}`          - Delete a visitor
/// - `POST   /reviews`                - Create a review
/// - `GET    /reviews`                - List reviews (expanded)
/// - `DELETE /reviews/{id}`           - Delete a review
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/attractions",
            get(list_attractions_handler).post(create_attraction_handler),
        )
        .route("/attractions/top-rated", get(top_rated_handler))
        .route(
            "/attractions/{id}",
            get(get_attraction_handler)
                .put(update_attraction_handler)
                .delete(delete_attraction_handler),
        )
        .route(
            "/visitors",
            get(list_visitors_handler).post(create_visitor_handler),
        )
        .route("/visitors/activity", get(visitor_activity_handler))
        .route(
            "/visitors/{id}",
            get(get_visitor_handler)
                .put(update_visitor_handler)
                .delete(delete_visitor_handler),
        )
        .route(
            "/reviews",
            get(list_reviews_handler).post(create_review_handler),
        )
        .route("/reviews/{id}", delete(delete_review_handler))
        .method_not_allowed_fallback(route_not_found_handler)
}
