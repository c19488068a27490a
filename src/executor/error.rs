//! Errors returned by transitions.

use crate::core::State;
use crate::subject::{PersistenceError, ValidationErrors};
use thiserror::Error;

/// Boxed error produced by a failing action.
pub type ActionError = Box<dyn std::error::Error + Send + Sync>;

/// Hard failures of a transition.
///
/// Best-effort rejections are not errors; they come back as `Ok(false)`
/// from the validating executor.
#[derive(Debug, Error)]
pub enum TransitionError<S: State> {
    /// The event has no target for the current state.
    #[error("You cannot '{event}' when state is {}", describe(.state.as_ref()))]
    IllegalTransition { event: String, state: Option<S> },

    /// The action added errors or left the entity invalid.
    #[error("Validation failed for '{event}' in state '{}': {errors}", .state.name())]
    ValidationFailed {
        event: String,
        state: S,
        errors: ValidationErrors,
    },

    /// The state was advanced to `state` but could not be persisted.
    #[error("Failed to persist '{event}' after moving to '{}'", .state.name())]
    PersistenceFailed {
        event: String,
        state: S,
        #[source]
        source: PersistenceError,
    },

    /// The wrapped action itself failed; the state was not changed.
    #[error("Action for '{event}' failed: {source}")]
    ActionFailed {
        event: String,
        #[source]
        source: ActionError,
    },
}

impl<S: State> TransitionError<S> {
    /// Event the failing transition was fired with, including any marker.
    pub fn event(&self) -> &str {
        match self {
            Self::IllegalTransition { event, .. }
            | Self::ValidationFailed { event, .. }
            | Self::PersistenceFailed { event, .. }
            | Self::ActionFailed { event, .. } => event,
        }
    }

    pub fn is_illegal(&self) -> bool {
        matches!(self, Self::IllegalTransition { .. })
    }

    /// Errors attached to the entity when validation rejected the transition.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::ValidationFailed { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

fn describe<S: State>(state: Option<&S>) -> String {
    match state {
        Some(state) => format!("'{}'", state.name()),
        None => "unset".to_string(),
    }
}
