//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource.

pub mod attractions;
pub mod fallback;
pub mod health;
pub mod home;
pub mod reviews;
pub mod visitors;

pub use attractions::{
    create_attraction_handler, delete_attraction_handler, get_attraction_handler,
    list_attractions_handler, top_rated_handler, update_attraction_handler,
};
pub use fallback::route_not_found_handler;
pub use health::health_handler;
pub use home::home_handler;
pub use reviews::{create_review_handler, delete_review_handler, list_reviews_handler};
pub use visitors::{
    create_visitor_handler, delete_visitor_handler, get_visitor_handler, list_visitors_handler,
    update_visitor_handler, visitor_activity_handler,
};
