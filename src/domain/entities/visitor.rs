//! Domain entity representing a visitor.

use regex::Regex;
use std::sync::LazyLock;
use uuid::Uuid;
use validator::Validate;

/// Accepts `local@domain.tld` with no whitespace. Case-sensitive, no folding.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// A person who visits and reviews attractions.
///
/// `visited_attractions` keeps the client's order and may contain duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct Visitor {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub visited_attractions: Vec<Uuid>,
}

impl Visitor {
    /// Returns true if the visitor's history contains the attraction.
    pub fn has_visited(&self, attraction_id: Uuid) -> bool {
        self.visited_attractions.contains(&attraction_id)
    }
}

/// Field values for creating or replacing a visitor.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewVisitor {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(regex(path = *EMAIL_REGEX, message = "Please provide a valid email address"))]
    pub email: String,

    pub visited_attractions: Vec<Uuid>,
}

/// Partial update for a visitor. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct VisitorPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub visited_attractions: Option<Vec<Uuid>>,
}

impl VisitorPatch {
    /// Merges the patch over an existing record.
    pub fn merge(self, current: &Visitor) -> NewVisitor {
        NewVisitor {
            name: self.name.unwrap_or_else(|| current.name.clone()),
            email: self.email.unwrap_or_else(|| current.email.clone()),
            visited_attractions: self
                .visited_attractions
                .unwrap_or_else(|| current.visited_attractions.clone()),
        }
    }
}

/// A visitor together with the number of reviews they wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct VisitorActivity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub review_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_visitor(email: &str) -> NewVisitor {
        NewVisitor {
            name: "Ada".to_string(),
            email: email.to_string(),
            visited_attractions: vec![],
        }
    }

    #[test]
    fn test_email_format() {
        assert!(new_visitor("ada@example.com").validate().is_ok());
        assert!(new_visitor("Ada.Lovelace@Example.co.uk").validate().is_ok());

        assert!(new_visitor("ada@example").validate().is_err());
        assert!(new_visitor("ada example@x.com").validate().is_err());
        assert!(new_visitor("@example.com").validate().is_err());
        assert!(new_visitor("").validate().is_err());
    }

    #[test]
    fn test_name_required() {
        let mut visitor = new_visitor("ada@example.com");
        visitor.name = String::new();
        let errors = visitor.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_has_visited() {
        let attraction = Uuid::new_v4();
        let visitor = Visitor {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            visited_attractions: vec![Uuid::new_v4(), attraction],
        };

        assert!(visitor.has_visited(attraction));
        assert!(!visitor.has_visited(Uuid::new_v4()));
    }

    #[test]
    fn test_patch_replaces_visits() {
        let current = Visitor {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            visited_attractions: vec![Uuid::new_v4()],
        };
        let new_visit = Uuid::new_v4();

        let merged = VisitorPatch {
            visited_attractions: Some(vec![new_visit]),
            ..Default::default()
        }
        .merge(&current);

        assert_eq!(merged.visited_attractions, vec![new_visit]);
        assert_eq!(merged.email, "ada@example.com");
    }
}
