//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and
//! are implemented in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`AttractionRepository`] - Attraction CRUD and rating queries
//! - [`VisitorRepository`] - Visitor CRUD and activity aggregate
//! - [`ReviewRepository`] - Review writes that keep attraction ratings in sync
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod attraction_repository;
pub mod review_repository;
pub mod visitor_repository;

pub use attraction_repository::AttractionRepository;
pub use review_repository::ReviewRepository;
pub use visitor_repository::VisitorRepository;

#[cfg(test)]
pub use attraction_repository::MockAttractionRepository;
#[cfg(test)]
pub use review_repository::MockReviewRepository;
#[cfg(test)]
pub use visitor_repository::MockVisitorRepository;
