//! Handler for the root path.

/// Greets clients hitting the service root.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> &'static str {
    "Welcome to the home page"
}
