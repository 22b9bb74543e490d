//! DTOs for attraction endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::{Attraction, AttractionPatch, NewAttraction};

/// Request body for `POST /api/attractions`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttractionRequest {
    #[validate(required(message = "Name is required"))]
    pub name: Option<String>,

    #[validate(required(message = "Location is required"))]
    pub location: Option<String>,

    #[validate(required(message = "Entry fee is required"))]
    pub entry_fee: Option<f64>,
}

impl CreateAttractionRequest {
    /// Converts a request that already passed [`Validate::validate`].
    pub fn into_new_attraction(self) -> NewAttraction {
        NewAttraction {
            name: self.name.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            entry_fee: self.entry_fee.unwrap_or_default(),
        }
    }
}

/// Request body for `PUT /api/attractions/{id}`.
///
/// All fields are optional. `rating` is derived from reviews and is ignored
/// if a client sends it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAttractionRequest {
    pub name: Option<String>,
    pub location: Option<String>,
    pub entry_fee: Option<f64>,
}

impl From<UpdateAttractionRequest> for AttractionPatch {
    fn from(req: UpdateAttractionRequest) -> Self {
        AttractionPatch {
            name: req.name,
            location: req.location,
            entry_fee: req.entry_fee,
        }
    }
}

/// JSON representation of an attraction.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttractionItem {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub entry_fee: f64,
    pub rating: f64,
}

impl From<Attraction> for AttractionItem {
    fn from(a: Attraction) -> Self {
        AttractionItem {
            id: a.id,
            name: a.name,
            location: a.location,
            entry_fee: a.entry_fee,
            rating: a.rating,
        }
    }
}
