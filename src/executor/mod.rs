//! Executing events against an entity.
//!
//! Every transition follows the same protocol: look up the target for the
//! entity's current state, hand rejections to
//! [`TransitionPort::illegal_event`], otherwise run the wrapped action and
//! commit. The two executors differ in what happens between the action and
//! the commit:
//!
//! - [`Base`] commits unconditionally once the action succeeds.
//! - [`Validating`] commits only if the action added no errors and the
//!   entity is valid, then persists it. Failures are errors for the
//!   confirming form of an event and `Ok(false)` for the best-effort form.
//!
//! An entity type picks its executor once, through [`Machine::Executor`].

mod base;
mod error;
mod validating;

pub use base::Base;
pub use error::{ActionError, TransitionError};
pub use validating::Validating;

use crate::core::{Event, EventForm};
use crate::definition::StateMachineDefinition;
use crate::subject::TransitionPort;
use std::convert::Infallible;

/// Execution policy for transitions of entities of type `P`.
pub trait TransitionExecutor<P: TransitionPort> {
    /// What a transition returns when it does not fail hard.
    type Output<R>;

    /// Whether events fired in `form` can match the transition table.
    fn accepts(_form: EventForm) -> bool {
        true
    }

    /// Fire `event` on `subject`, wrapping `action`.
    ///
    /// The action runs at most once, and only when the event is permitted
    /// from the current state. After the call the state is either
    /// unchanged or the declared target; nothing else.
    fn transition<R, E, F>(
        definition: &StateMachineDefinition<P::State>,
        subject: &mut P,
        event: Event<'_>,
        action: F,
    ) -> Result<Self::Output<R>, TransitionError<P::State>>
    where
        F: FnOnce(&mut P) -> Result<R, E>,
        E: Into<ActionError>;
}

/// Output of firing an event on machine `M`.
pub type Fired<M, R> = <<M as Machine>::Executor as TransitionExecutor<M>>::Output<R>;

/// An entity type with a shared definition and a chosen executor.
///
/// # Example
///
/// ```rust
/// use entity_fsm::{Base, Machine, StateMachineDefinition, TransitionPort};
/// use once_cell::sync::Lazy;
///
/// static DOCUMENT: Lazy<StateMachineDefinition<String>> = Lazy::new(|| {
///     let s = |name: &str| name.to_string();
///     StateMachineDefinition::builder()
///         .event("publish", [(s("draft"), s("published"))])
///         .build()
///         .expect("document definition is valid")
/// });
///
/// struct Document {
///     state: Option<String>,
///     published_at: Option<u64>,
/// }
///
/// impl TransitionPort for Document {
///     type State = String;
///
///     fn state(&self) -> Option<&String> {
///         self.state.as_ref()
///     }
///
///     fn set_state(&mut self, state: String) {
///         self.state = Some(state);
///     }
/// }
///
/// impl Machine for Document {
///     type Executor = Base;
///
///     fn definition() -> &'static StateMachineDefinition<String> {
///         &DOCUMENT
///     }
/// }
///
/// let mut doc = Document { state: Some("draft".into()), published_at: None };
/// let stamped = doc.fire("publish", |doc| {
///     doc.published_at = Some(42);
///     42
/// });
///
/// assert_eq!(stamped.unwrap(), Some(42));
/// assert!(doc.is_in(&"published".to_string()));
/// assert!(doc.fire("publish", |_| ()).is_err());
/// ```
pub trait Machine: TransitionPort + Sized {
    type Executor: TransitionExecutor<Self>;

    fn definition() -> &'static StateMachineDefinition<Self::State>;

    /// Fire `event` around an action that can fail.
    ///
    /// A trailing `!` on the event name selects the confirming form.
    fn try_fire<'e, V, R, E, F>(
        &mut self,
        event: V,
        action: F,
    ) -> Result<Fired<Self, R>, TransitionError<Self::State>>
    where
        V: Into<Event<'e>>,
        F: FnOnce(&mut Self) -> Result<R, E>,
        E: Into<ActionError>,
    {
        <Self::Executor as TransitionExecutor<Self>>::transition(
            Self::definition(),
            self,
            event.into(),
            action,
        )
    }

    /// Fire `event` around an action that cannot fail.
    fn fire<'e, V, R, F>(
        &mut self,
        event: V,
        action: F,
    ) -> Result<Fired<Self, R>, TransitionError<Self::State>>
    where
        V: Into<Event<'e>>,
        F: FnOnce(&mut Self) -> R,
    {
        self.try_fire(event, |subject| Ok::<R, Infallible>(action(subject)))
    }

    /// Whether `event` is permitted from the current state.
    fn can_fire<'e, V>(&self, event: V) -> bool
    where
        V: Into<Event<'e>>,
    {
        let event = event.into();
        if !<Self::Executor as TransitionExecutor<Self>>::accepts(event.form()) {
            return false;
        }
        self.state()
            .is_some_and(|state| Self::definition().lookup(event.name(), state).is_some())
    }

    /// Events permitted from the current state, sorted by name.
    fn permitted_events(&self) -> Vec<&'static str> {
        match self.state() {
            Some(state) => Self::definition().permitted_events(state),
            None => Vec::new(),
        }
    }
}

/// Source and target for `event`, or `None` when it is not permitted.
fn next_state<P: TransitionPort>(
    definition: &StateMachineDefinition<P::State>,
    subject: &P,
    event: Event<'_>,
) -> Option<(P::State, P::State)> {
    let from = subject.state()?;
    let to = definition.lookup(event.name(), from)?;
    Some((from.clone(), to.clone()))
}
