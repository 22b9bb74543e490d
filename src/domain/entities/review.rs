//! Domain entity representing a review.

use std::borrow::Cow;

use uuid::Uuid;
use validator::{ValidationError, ValidationErrors};

use super::{Attraction, Visitor};

pub const MIN_SCORE: i16 = 1;
pub const MAX_SCORE: i16 = 5;

/// One visitor's opinion of one attraction.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: Uuid,
    pub attraction_id: Uuid,
    pub visitor_id: Uuid,
    pub score: i16,
    pub comment: Option<String>,
}

/// A review with both references resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDetails {
    pub id: Uuid,
    pub attraction: Attraction,
    pub visitor: Visitor,
    pub score: i16,
    pub comment: Option<String>,
}

/// Checked input for inserting a review.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub attraction_id: Uuid,
    pub visitor_id: Uuid,
    pub score: i16,
    pub comment: Option<String>,
}

/// Review input as received from a client, before any checks.
#[derive(Debug, Clone, Default)]
pub struct ReviewSubmission {
    pub attraction: Option<String>,
    pub visitor: Option<String>,
    pub score: Option<f64>,
    pub comment: Option<String>,
}

impl ReviewSubmission {
    /// Checks presence and shape of every field.
    ///
    /// References must be present and parse as identifiers; `score` must be a
    /// whole number between [`MIN_SCORE`] and [`MAX_SCORE`]. All failing fields
    /// are reported together.
    pub fn into_new_review(self) -> Result<NewReview, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let attraction_id = parse_reference(
            self.attraction.as_deref(),
            "attraction",
            "Attraction reference is required",
            &mut errors,
        );
        let visitor_id = parse_reference(
            self.visitor.as_deref(),
            "visitor",
            "Visitor reference is required",
            &mut errors,
        );
        let score = match self.score {
            Some(s) if s.fract() == 0.0 && (f64::from(MIN_SCORE)..=f64::from(MAX_SCORE)).contains(&s) => {
                Some(s as i16)
            }
            _ => {
                errors.add(
                    "score",
                    field_error("range", "Score must be an integer between 1 and 5"),
                );
                None
            }
        };

        match (attraction_id, visitor_id, score) {
            (Some(attraction_id), Some(visitor_id), Some(score)) => Ok(NewReview {
                attraction_id,
                visitor_id,
                score,
                comment: self.comment,
            }),
            _ => Err(errors),
        }
    }
}

fn parse_reference(
    raw: Option<&str>,
    field: &'static str,
    missing_message: &'static str,
    errors: &mut ValidationErrors,
) -> Option<Uuid> {
    match raw.map(str::trim) {
        None | Some("") => {
            errors.add(field, field_error("required", missing_message));
            None
        }
        Some(value) => match Uuid::parse_str(value) {
            Ok(id) => Some(id),
            Err(_) => {
                errors.add(field, field_error("invalid_id", "Reference is not a valid id"));
                None
            }
        },
    }
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(score: Option<f64>) -> ReviewSubmission {
        ReviewSubmission {
            attraction: Some(Uuid::new_v4().to_string()),
            visitor: Some(Uuid::new_v4().to_string()),
            score,
            comment: Some("Lovely".to_string()),
        }
    }

    #[test]
    fn test_valid_submission() {
        let input = submission(Some(4.0));
        let attraction = input.attraction.clone().unwrap();

        let review = input.into_new_review().unwrap();

        assert_eq!(review.score, 4);
        assert_eq!(review.attraction_id.to_string(), attraction);
        assert_eq!(review.comment.as_deref(), Some("Lovely"));
    }

    #[test]
    fn test_score_bounds() {
        assert!(submission(Some(1.0)).into_new_review().is_ok());
        assert!(submission(Some(5.0)).into_new_review().is_ok());
        assert!(submission(Some(0.0)).into_new_review().is_err());
        assert!(submission(Some(6.0)).into_new_review().is_err());
        assert!(submission(None).into_new_review().is_err());
    }

    #[test]
    fn test_fractional_score_rejected() {
        let errors = submission(Some(4.5)).into_new_review().unwrap_err();
        assert!(errors.field_errors().contains_key("score"));
    }

    #[test]
    fn test_missing_references_reported_together() {
        let input = ReviewSubmission {
            score: Some(3.0),
            ..Default::default()
        };

        let errors = input.into_new_review().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("attraction"));
        assert!(fields.contains_key("visitor"));
        assert!(!fields.contains_key("score"));
    }

    #[test]
    fn test_malformed_reference_rejected() {
        let mut input = submission(Some(3.0));
        input.visitor = Some("not-an-id".to_string());

        let errors = input.into_new_review().unwrap_err();
        assert!(errors.field_errors().contains_key("visitor"));
    }
}
