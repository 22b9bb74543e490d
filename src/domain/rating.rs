//! Attraction rating aggregation.

/// Arithmetic mean of review scores.
///
/// Returns `0.0` when there are no reviews. The result is not rounded.
///
/// # Examples
///
/// ```
/// use tourism_reviews::domain::rating::average_rating;
///
/// assert_eq!(average_rating(&[4, 5]), 4.5);
/// assert_eq!(average_rating(&[]), 0.0);
/// ```
pub fn average_rating(scores: &[i16]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }

    let total: i64 = scores.iter().map(|&s| i64::from(s)).sum();
    total as f64 / scores.len() as f64
}
