//! DTOs for review endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::attraction::AttractionItem;
use super::visitor::VisitorItem;
use crate::domain::entities::{Review, ReviewDetails, ReviewSubmission};

/// Request body for `POST /api/reviews`.
///
/// Fields are left loosely typed so that every problem is reported by the
/// review rule itself rather than by JSON deserialization.
#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub attraction: Option<String>,
    pub visitor: Option<String>,
    pub score: Option<f64>,
    pub comment: Option<String>,
}

impl From<CreateReviewRequest> for ReviewSubmission {
    fn from(req: CreateReviewRequest) -> Self {
        ReviewSubmission {
            attraction: req.attraction,
            visitor: req.visitor,
            score: req.score,
            comment: req.comment,
        }
    }
}

/// JSON representation of a stored review. References are IDs.
#[derive(Debug, Serialize)]
pub struct ReviewItem {
    pub id: Uuid,
    pub attraction: Uuid,
    pub visitor: Uuid,
    pub score: i16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl From<Review> for ReviewItem {
    fn from(r: Review) -> Self {
        ReviewItem {
            id: r.id,
            attraction: r.attraction_id,
            visitor: r.visitor_id,
            score: r.score,
            comment: r.comment,
        }
    }
}

/// Review with attraction and visitor expanded, as listed by `GET /api/reviews`.
#[derive(Debug, Serialize)]
pub struct ReviewDetailsItem {
    pub id: Uuid,
    pub attraction: AttractionItem,
    pub visitor: VisitorItem,
    pub score: i16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl From<ReviewDetails> for ReviewDetailsItem {
    fn from(r: ReviewDetails) -> Self {
        ReviewDetailsItem {
            id: r.id,
            attraction: r.attraction.into(),
            visitor: r.visitor.into(),
            score: r.score,
            comment: r.comment,
        }
    }
}
