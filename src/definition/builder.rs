//! Fluent, validated construction of definitions.
//!
//! Validation uses Stillwater's `Validation` so a single `build()` reports
//! every problem in the declaration rather than only the first one.

use crate::core::{State, CONFIRMING_MARKER};
use crate::definition::error::{DefinitionError, DefinitionViolation};
use crate::definition::registry::StateMachineDefinition;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<DefinitionViolation>>;

/// Builder for state machine definitions.
///
/// # Example
///
/// ```rust
/// use entity_fsm::StateMachineDefinition;
///
/// let s = |name: &str| name.to_string();
///
/// let definition = StateMachineDefinition::builder()
///     .event("checkout", [(s("pending"), s("confirmed"))])
///     .event("cancel", [(s("pending"), s("cancelled")), (s("confirmed"), s("cancelled"))])
///     .build()
///     .unwrap();
///
/// assert_eq!(definition.lookup("cancel", &s("confirmed")), Some(&s("cancelled")));
/// ```
pub struct DefinitionBuilder<S: State> {
    events: Vec<(String, Vec<(S, S)>)>,
}

impl<S: State> DefinitionBuilder<S> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Declare an event. Repeated names are merged in declaration order.
    pub fn event<N, I>(mut self, name: N, transitions: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (S, S)>,
    {
        self.events
            .push((name.into(), transitions.into_iter().collect()));
        self
    }

    /// Validate every declaration, then build the definition.
    pub fn build(self) -> Result<StateMachineDefinition<S>, DefinitionError> {
        match self.validate() {
            Validation::Success(_) => {
                let mut definition = StateMachineDefinition::new();
                for (name, transitions) in self.events {
                    definition.define_event(name, transitions);
                }
                Ok(definition)
            }
            Validation::Failure(violations) => Err(DefinitionError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }

    fn validate(&self) -> Check {
        if self.events.is_empty() {
            return Validation::fail(DefinitionViolation::NoEvents);
        }

        let checks: Vec<Check> = self
            .events
            .iter()
            .map(|(name, transitions)| check_event(name, transitions))
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }
}

impl<S: State> Default for DefinitionBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

fn check_event<S: State>(name: &str, transitions: &[(S, S)]) -> Check {
    let mut checks: Vec<Check> = Vec::new();

    if name.is_empty() {
        checks.push(Validation::fail(DefinitionViolation::EmptyEventName));
    }

    if name.ends_with(CONFIRMING_MARKER) {
        checks.push(Validation::fail(DefinitionViolation::ReservedMarker {
            event: name.to_string(),
        }));
    }

    let unnamed = transitions
        .iter()
        .any(|(from, to)| from.name().is_empty() || to.name().is_empty());
    if unnamed {
        checks.push(Validation::fail(DefinitionViolation::UnnamedState {
            event: name.to_string(),
        }));
    }

    if checks.is_empty() {
        return Validation::success(());
    }
    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(name: &str) -> String {
        name.to_string()
    }

    #[test]
    fn builder_requires_an_event() {
        let result = DefinitionBuilder::<String>::new().build();

        let err = result.unwrap_err();
        assert_eq!(err.violations(), &[DefinitionViolation::NoEvents]);
    }

    #[test]
    fn builder_builds_declared_events() {
        let definition = DefinitionBuilder::new()
            .event("publish", [(s("draft"), s("published"))])
            .event("archive", [(s("published"), s("archived"))])
            .build()
            .unwrap();

        assert_eq!(
            definition.lookup("publish", &s("draft")),
            Some(&s("published"))
        );
        assert_eq!(definition.len(), 2);
    }

    #[test]
    fn repeated_events_merge_with_last_wins() {
        let definition = DefinitionBuilder::new()
            .event("archive", [(s("draft"), s("archived"))])
            .event("archive", [(s("draft"), s("deleted")), (s("published"), s("archived"))])
            .build()
            .unwrap();

        assert_eq!(definition.lookup("archive", &s("draft")), Some(&s("deleted")));
        assert_eq!(
            definition.lookup("archive", &s("published")),
            Some(&s("archived"))
        );
    }

    #[test]
    fn builder_accumulates_all_violations() {
        let result = DefinitionBuilder::new()
            .event("", [(s("draft"), s("published"))])
            .event("publish!", [(s("draft"), s("published"))])
            .event("archive", [(s(""), s("archived"))])
            .build();

        let err = result.unwrap_err();
        let violations = err.violations();
        assert_eq!(violations.len(), 3);
        assert!(violations.contains(&DefinitionViolation::EmptyEventName));
        assert!(violations.contains(&DefinitionViolation::ReservedMarker {
            event: "publish!".to_string()
        }));
        assert!(violations.contains(&DefinitionViolation::UnnamedState {
            event: "archive".to_string()
        }));
    }

    #[test]
    fn invalid_error_message_lists_violations() {
        let err = DefinitionBuilder::new()
            .event("", [(s("draft"), s(""))])
            .build()
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("Event name must not be empty"));
        assert!(message.contains("unnamed state"));
    }
}
