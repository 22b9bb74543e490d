//! Domain layer containing business entities and rules.
//!
//! Entities, field validation and repository contracts live here, independent
//! of storage and HTTP concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Attractions, visitors, reviews and their input types
//! - [`repositories`] - Data access trait definitions
//! - [`rating`] - The rating aggregation rule
//!
//! # Rating Consistency
//!
//! An attraction's `rating` is a cached value. It always equals
//! [`rating::average_rating`] over the scores of the reviews referencing the
//! attraction, and is rewritten in the same transaction as every review
//! insert or delete (see [`repositories::ReviewRepository`]).

pub mod entities;
pub mod rating;
pub mod repositories;
