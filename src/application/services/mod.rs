//! Business logic services for the application layer.

pub mod attraction_service;
pub mod review_service;
pub mod visitor_service;

pub use attraction_service::AttractionService;
pub use review_service::ReviewService;
pub use visitor_service::VisitorService;
