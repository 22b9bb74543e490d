//! Row types mapped from SQL results.

use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::entities::{Attraction, Review, Visitor, VisitorActivity};

pub(super) const ATTRACTION_COLUMNS: &str = "id, name, location, entry_fee, rating";
pub(super) const VISITOR_COLUMNS: &str = "id, name, email, visited_attractions";
pub(super) const REVIEW_COLUMNS: &str = "id, attraction_id, visitor_id, score, comment";

#[derive(Debug, FromRow)]
pub(super) struct AttractionRow {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub entry_fee: f64,
    pub rating: f64,
}

impl From<AttractionRow> for Attraction {
    fn from(r: AttractionRow) -> Self {
        Attraction {
            id: r.id,
            name: r.name,
            location: r.location,
            entry_fee: r.entry_fee,
            rating: r.rating,
        }
    }
}

#[derive(Debug, FromRow)]
pub(super) struct VisitorRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub visited_attractions: Vec<Uuid>,
}

impl From<VisitorRow> for Visitor {
    fn from(r: VisitorRow) -> Self {
        Visitor {
            id: r.id,
            name: r.name,
            email: r.email,
            visited_attractions: r.visited_attractions,
        }
    }
}

#[derive(Debug, FromRow)]
pub(super) struct VisitorActivityRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub review_count: i64,
}

impl From<VisitorActivityRow> for VisitorActivity {
    fn from(r: VisitorActivityRow) -> Self {
        VisitorActivity {
            id: r.id,
            name: r.name,
            email: r.email,
            review_count: r.review_count,
        }
    }
}

#[derive(Debug, FromRow)]
pub(super) struct ReviewRow {
    pub id: Uuid,
    pub attraction_id: Uuid,
    pub visitor_id: Uuid,
    pub score: i16,
    pub comment: Option<String>,
}

impl From<ReviewRow> for Review {
    fn from(r: ReviewRow) -> Self {
        Review {
            id: r.id,
            attraction_id: r.attraction_id,
            visitor_id: r.visitor_id,
            score: r.score,
            comment: r.comment,
        }
    }
}

/// Review joined with its attraction and visitor, columns prefixed `a_` / `v_`.
#[derive(Debug, FromRow)]
pub(super) struct ReviewDetailsRow {
    pub id: Uuid,
    pub score: i16,
    pub comment: Option<String>,
    pub a_id: Uuid,
    pub a_name: String,
    pub a_location: String,
    pub a_entry_fee: f64,
    pub a_rating: f64,
    pub v_id: Uuid,
    pub v_name: String,
    pub v_email: String,
    pub v_visited_attractions: Vec<Uuid>,
}
