//! Application layer services implementing business logic.
//!
//! Services consume repository traits, apply validation and business rules,
//! and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::attraction_service::AttractionService`] - Attraction management and top-rated listing
//! - [`services::visitor_service::VisitorService`] - Visitor management and email uniqueness
//! - [`services::review_service::ReviewService`] - Review creation/deletion under the rating rule

pub mod services;
