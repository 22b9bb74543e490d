//! Small helpers shared by request handlers.
//!
//! - [`ids`] - Parsing identifiers taken from request paths

pub mod ids;
