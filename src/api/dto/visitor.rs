//! DTOs for visitor endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::{NewVisitor, Visitor, VisitorActivity, VisitorPatch};

/// Request body for `POST /api/visitors`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVisitorRequest {
    #[validate(required(message = "Name is required"))]
    pub name: Option<String>,

    #[validate(required(message = "Email is required"))]
    pub email: Option<String>,

    pub visited_attractions: Option<Vec<Uuid>>,
}

impl CreateVisitorRequest {
    /// Converts a request that already passed [`Validate::validate`].
    pub fn into_new_visitor(self) -> NewVisitor {
        NewVisitor {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            visited_attractions: self.visited_attractions.unwrap_or_default(),
        }
    }
}

/// Request body for `PUT /api/visitors/{id}`. All fields are optional.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVisitorRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub visited_attractions: Option<Vec<Uuid>>,
}

impl From<UpdateVisitorRequest> for VisitorPatch {
    fn from(req: UpdateVisitorRequest) -> Self {
        VisitorPatch {
            name: req.name,
            email: req.email,
            visited_attractions: req.visited_attractions,
        }
    }
}

/// JSON representation of a visitor.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorItem {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub visited_attractions: Vec<Uuid>,
}

impl From<Visitor> for VisitorItem {
    fn from(v: Visitor) -> Self {
        VisitorItem {
            id: v.id,
            name: v.name,
            email: v.email,
            visited_attractions: v.visited_attractions,
        }
    }
}

/// Entry of `GET /api/visitors/activity`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorActivityItem {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub review_count: i64,
}

impl From<VisitorActivity> for VisitorActivityItem {
    fn from(a: VisitorActivity) -> Self {
        VisitorActivityItem {
            id: a.id,
            name: a.name,
            email: a.email,
            review_count: a.review_count,
        }
    }
}
