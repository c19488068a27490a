//! Unconditional executor: run the action, then commit.

use super::{next_state, ActionError, TransitionError, TransitionExecutor};
use crate::core::{Event, EventForm, State};
use crate::definition::StateMachineDefinition;
use crate::subject::TransitionPort;
use tracing::debug;

/// Commits the target state as soon as the action returns `Ok`.
///
/// Returns `Ok(Some(result))` with the action's result on commit, and
/// `Ok(None)` when an overridden [`TransitionPort::illegal_event`] softened
/// a rejection. Only the best-effort form exists here, so a confirming
/// event such as `"publish!"` is always illegal.
#[derive(Clone, Copy, Debug, Default)]
pub struct Base;

impl<P: TransitionPort> TransitionExecutor<P> for Base {
    type Output<R> = Option<R>;

    fn accepts(form: EventForm) -> bool {
        form == EventForm::BestEffort
    }

    fn transition<R, E, F>(
        definition: &StateMachineDefinition<P::State>,
        subject: &mut P,
        event: Event<'_>,
        action: F,
    ) -> Result<Option<R>, TransitionError<P::State>>
    where
        F: FnOnce(&mut P) -> Result<R, E>,
        E: Into<ActionError>,
    {
        let permitted = if <Self as TransitionExecutor<P>>::accepts(event.form()) {
            next_state(definition, subject, event)
        } else {
            None
        };
        let Some((from, to)) = permitted else {
            debug!(event = %event, "event not permitted from current state");
            subject.illegal_event(event)?;
            return Ok(None);
        };

        let result = action(subject).map_err(|source| TransitionError::ActionFailed {
            event: event.to_string(),
            source: source.into(),
        })?;

        debug!(event = %event, from = from.name(), to = to.name(), "transition committed");
        subject.set_state(to);
        Ok(Some(result))
    }
}
