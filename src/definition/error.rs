//! Errors raised while declaring or loading a definition.

use thiserror::Error;

/// A single problem found in a declaration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DefinitionViolation {
    #[error("No events declared. Add at least one event")]
    NoEvents,

    #[error("Event name must not be empty")]
    EmptyEventName,

    #[error("Event '{event}' ends with '!', which is reserved for the confirming form")]
    ReservedMarker { event: String },

    #[error("Event '{event}' declares a transition with an unnamed state")]
    UnnamedState { event: String },
}

/// Errors that can occur when building or loading a definition.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("Invalid definition: {}", join(.0))]
    Invalid(Vec<DefinitionViolation>),

    #[error("Failed to parse JSON definition: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse YAML definition: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl DefinitionError {
    /// Violations behind an `Invalid` error; empty for parse errors.
    pub fn violations(&self) -> &[DefinitionViolation] {
        match self {
            Self::Invalid(violations) => violations,
            _ => &[],
        }
    }
}

fn join(violations: &[DefinitionViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
