//! Core domain entities.
//!
//! Entities are plain data structures. Input types carry the field rules and
//! are validated with [`validator::Validate`] before they reach storage.
//!
//! # Entity Types
//!
//! - [`Attraction`] - A place visitors review, with a derived rating
//! - [`Visitor`] - A person and the attractions they visited
//! - [`Review`] - One visitor's score for one attraction
//!
//! # Design Pattern
//!
//! - `NewAttraction`, `NewVisitor`, `NewReview` - For creating (or fully replacing) records
//! - `AttractionPatch`, `VisitorPatch` - Partial updates, merged before re-validation
//! - `ReviewSubmission` - Unchecked review input, see [`ReviewSubmission::into_new_review`]

pub mod attraction;
pub mod review;
pub mod visitor;

pub use attraction::{Attraction, AttractionPatch, NewAttraction};
pub use review::{NewReview, Review, ReviewDetails, ReviewSubmission};
pub use visitor::{NewVisitor, Visitor, VisitorActivity, VisitorPatch};
