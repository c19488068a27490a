//! Validating executor: run the action, check errors, commit, persist.

use super::{next_state, ActionError, TransitionError, TransitionExecutor};
use crate::core::{Event, EventForm, State};
use crate::definition::StateMachineDefinition;
use crate::subject::ValidatedSubject;
use tracing::debug;

/// Gates the commit on validation and persists afterwards.
///
/// The transition is rejected when the action grew the entity's error
/// collection or the entity reports itself invalid. Then:
///
/// | outcome             | best-effort (`"checkout"`) | confirming (`"checkout!"`) |
/// |---------------------|----------------------------|----------------------------|
/// | rejected            | `Ok(false)`, state kept    | `Err(ValidationFailed)`    |
/// | committed, saved    | `Ok(true)`                 | `Ok(true)`                 |
/// | committed, unsaved  | `Ok(false)`, state moved   | `Err(PersistenceFailed)`   |
///
/// A save that fails after the commit does not roll the in-memory state
/// back. The action's own result is discarded.
#[derive(Clone, Copy, Debug, Default)]
pub struct Validating;

impl<P: ValidatedSubject> TransitionExecutor<P> for Validating {
    type Output<R> = bool;

    fn transition<R, E, F>(
        definition: &StateMachineDefinition<P::State>,
        subject: &mut P,
        event: Event<'_>,
        action: F,
    ) -> Result<bool, TransitionError<P::State>>
    where
        F: FnOnce(&mut P) -> Result<R, E>,
        E: Into<ActionError>,
    {
        let Some((from, to)) = next_state(definition, subject, event) else {
            debug!(event = %event, "event not permitted from current state");
            subject.illegal_event(event)?;
            return Ok(false);
        };

        let new_errors =
            with_error_counting(subject, action).map_err(|source| TransitionError::ActionFailed {
                event: event.to_string(),
                source: source.into(),
            })?;

        if new_errors > 0 || subject.is_invalid() {
            debug!(event = %event, state = from.name(), new_errors, "transition rejected by validation");
            return match event.form() {
                EventForm::Confirming => Err(TransitionError::ValidationFailed {
                    event: event.to_string(),
                    state: from,
                    errors: subject.errors().clone(),
                }),
                EventForm::BestEffort => Ok(false),
            };
        }

        debug!(event = %event, from = from.name(), to = to.name(), "transition committed");
        subject.set_state(to.clone());

        match event.form() {
            EventForm::Confirming => subject
                .save_or_fail()
                .map(|()| true)
                .map_err(|source| TransitionError::PersistenceFailed {
                    event: event.to_string(),
                    state: to,
                    source,
                }),
            EventForm::BestEffort => {
                let saved = subject.save();
                if !saved {
                    debug!(event = %event, state = to.name(), "save rejected; state stays advanced");
                }
                Ok(saved)
            }
        }
    }
}

/// Run `action` and report how many errors it added to `subject`.
fn with_error_counting<P, R, E, F>(subject: &mut P, action: F) -> Result<usize, E>
where
    P: ValidatedSubject,
    F: FnOnce(&mut P) -> Result<R, E>,
{
    let before = subject.errors().len();
    action(subject)?;
    Ok(subject.errors().len().saturating_sub(before))
}
