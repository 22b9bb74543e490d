//! Domain entity representing a tourist attraction.

use uuid::Uuid;
use validator::Validate;

/// A place visitors can review.
///
/// `rating` is derived from reviews and never written by clients.
#[derive(Debug, Clone, PartialEq)]
pub struct Attraction {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub entry_fee: f64,
    pub rating: f64,
}

/// Field values for creating or replacing an attraction.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewAttraction {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,

    #[validate(range(min = 0.0, message = "Entry fee must be greater than or equal to 0"))]
    pub entry_fee: f64,
}

/// Partial update for an attraction. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct AttractionPatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub entry_fee: Option<f64>,
}

impl AttractionPatch {
    /// Merges the patch over an existing record.
    ///
    /// The result must be validated again before it is stored.
    pub fn merge(self, current: &Attraction) -> NewAttraction {
        NewAttraction {
            name: self.name.unwrap_or_else(|| current.name.clone()),
            location: self.location.unwrap_or_else(|| current.location.clone()),
            entry_fee: self.entry_fee.unwrap_or(current.entry_fee),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Attraction {
        Attraction {
            id: Uuid::new_v4(),
            name: "Old Town".to_string(),
            location: "Tallinn".to_string(),
            entry_fee: 10.0,
            rating: 4.0,
        }
    }

    #[test]
    fn test_new_attraction_valid() {
        let new = NewAttraction {
            name: "Castle".to_string(),
            location: "Prague".to_string(),
            entry_fee: 0.0,
        };
        assert!(new.validate().is_ok());
    }

    #[test]
    fn test_new_attraction_rejects_negative_fee() {
        let new = NewAttraction {
            name: "Castle".to_string(),
            location: "Prague".to_string(),
            entry_fee: -0.5,
        };
        let errors = new.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("entry_fee"));
    }

    #[test]
    fn test_new_attraction_rejects_empty_strings() {
        let new = NewAttraction {
            name: String::new(),
            location: String::new(),
            entry_fee: 5.0,
        };
        let errors = new.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 2);
    }

    #[test]
    fn test_patch_merge_keeps_unset_fields() {
        let current = sample();
        let patch = AttractionPatch {
            entry_fee: Some(12.5),
            ..Default::default()
        };

        let merged = patch.merge(&current);

        assert_eq!(merged.name, "Old Town");
        assert_eq!(merged.location, "Tallinn");
        assert_eq!(merged.entry_fee, 12.5);
    }

    #[test]
    fn test_patch_merge_can_produce_invalid_record() {
        let patch = AttractionPatch {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(patch.merge(&sample()).validate().is_err());
    }
}
