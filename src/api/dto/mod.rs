//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization with camelCase field names.
//! Request DTOs check presence with `validator`; field rules live on the
//! domain input types.

pub mod attraction;
pub mod health;
pub mod message;
pub mod review;
pub mod visitor;
