//! Error collection a validated entity can carry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Field name used for errors that belong to the entity as a whole.
pub const BASE: &str = "base";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field == BASE {
            f.write_str(&self.message)
        } else {
            write!(f, "{} {}", self.field, self.message)
        }
    }
}

/// Ordered list of validation errors attached to an entity.
///
/// Validating transitions compare `len()` before and after the action, so
/// anything an action adds here rejects the transition.
///
/// # Example
///
/// ```rust
/// use entity_fsm::subject::ValidationErrors;
///
/// let mut errors = ValidationErrors::new();
/// errors.add("total", "must be positive");
/// errors.add_to_base("order is locked");
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.on("total"), vec!["must be positive"]);
/// assert_eq!(errors.to_string(), "total must be positive, order is locked");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    entries: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.entries.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_to_base(&mut self, message: impl Into<String>) {
        self.add(BASE, message);
    }

    /// Messages recorded against `field`.
    pub fn on(&self, field: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    pub fn full_messages(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.entries.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_messages().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_collection_is_empty() {
        let errors = ValidationErrors::new();
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
        assert_eq!(errors.to_string(), "");
    }

    #[test]
    fn on_filters_by_field() {
        let mut errors = ValidationErrors::new();
        errors.add("email", "is blank");
        errors.add("name", "is too short");
        errors.add("email", "is invalid");

        assert_eq!(errors.on("email"), vec!["is blank", "is invalid"]);
        assert!(errors.on("phone").is_empty());
    }

    #[test]
    fn base_errors_render_without_field() {
        let mut errors = ValidationErrors::new();
        errors.add_to_base("cannot be checked out twice");

        assert_eq!(errors.full_messages(), vec!["cannot be checked out twice"]);
        assert_eq!(errors.on(BASE).len(), 1);
    }

    #[test]
    fn clear_removes_everything() {
        let mut errors = ValidationErrors::new();
        errors.add("total", "must be positive");
        errors.clear();

        assert!(errors.is_empty());
    }
}
