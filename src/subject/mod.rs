//! Contracts an entity implements to be driven by a state machine.
//!
//! [`TransitionPort`] is all the base executor needs: read and write the
//! current state. [`ValidatedSubject`] adds what the validating executor
//! needs: an error collection, an invalidity check and persistence.

pub mod errors;

pub use errors::{FieldError, ValidationErrors};

use crate::core::{Event, State};
use crate::executor::TransitionError;
use thiserror::Error;

/// Read/write access to an entity's current state.
///
/// The state is `None` until the host sets it; the engine never assigns an
/// initial state on its own.
pub trait TransitionPort {
    type State: State;

    fn state(&self) -> Option<&Self::State>;

    fn set_state(&mut self, state: Self::State);

    /// Whether the entity currently sits in `state`.
    fn is_in(&self, state: &Self::State) -> bool {
        self.state() == Some(state)
    }

    /// Called when `event` has no target for the current state.
    ///
    /// The default rejects with [`TransitionError::IllegalTransition`].
    /// Override it to record a domain error and return `Ok(())` instead;
    /// the transition then reports a soft rejection and the state is left
    /// untouched either way.
    fn illegal_event(&mut self, event: Event<'_>) -> Result<(), TransitionError<Self::State>> {
        Err(TransitionError::IllegalTransition {
            event: event.to_string(),
            state: self.state().cloned(),
        })
    }
}

/// Entity whose transitions are validated and persisted.
pub trait ValidatedSubject: TransitionPort {
    fn errors(&self) -> &ValidationErrors;

    /// Checked after the action runs. May re-run the host's validations,
    /// hence `&mut self`.
    fn is_invalid(&mut self) -> bool {
        !self.errors().is_empty()
    }

    /// Persist the entity, reporting rejection as `false`.
    fn save(&mut self) -> bool;

    /// Persist the entity, reporting rejection as an error.
    fn save_or_fail(&mut self) -> Result<(), PersistenceError> {
        if self.save() {
            Ok(())
        } else {
            Err(PersistenceError::rejected("save returned false"))
        }
    }
}

/// Errors a persistence layer reports from `save_or_fail`.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Record was rejected: {reason}")]
    Rejected { reason: String },

    #[error("Storage backend failed: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl PersistenceError {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }

    pub fn backend(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Backend(source.into())
    }
}
