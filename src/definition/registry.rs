//! Registry of declared events for one entity type.

use crate::core::State;
use crate::definition::builder::DefinitionBuilder;
use crate::definition::table::TransitionTable;
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// Event name to transition table registry.
///
/// A definition is built once per entity type and then only read. Reads
/// need `&self` and the type is `Sync`, so a `'static` definition can be
/// shared by every instance and thread.
///
/// # Example
///
/// ```rust
/// use entity_fsm::StateMachineDefinition;
///
/// let s = |name: &str| name.to_string();
///
/// let mut definition = StateMachineDefinition::new();
/// definition
///     .define_event("publish", [(s("draft"), s("published"))])
///     .define_event("archive", [(s("published"), s("archived")), (s("draft"), s("archived"))]);
///
/// assert_eq!(definition.lookup("archive", &s("draft")), Some(&s("archived")));
/// assert_eq!(definition.lookup("publish", &s("archived")), None);
/// assert_eq!(definition.lookup("delete", &s("draft")), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateMachineDefinition<S: State> {
    events: HashMap<String, TransitionTable<S>>,
}

impl<S: State> Default for StateMachineDefinition<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateMachineDefinition<S> {
    pub fn new() -> Self {
        Self {
            events: HashMap::new(),
        }
    }

    /// Start a validated fluent declaration.
    pub fn builder() -> DefinitionBuilder<S> {
        DefinitionBuilder::new()
    }

    /// Declare `transitions` for the event `name`.
    ///
    /// Pairs are applied in order. Declaring an event again extends its
    /// table, and a repeated source state takes the latest target.
    pub fn define_event<N, I>(&mut self, name: N, transitions: I) -> &mut Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (S, S)>,
    {
        let name = name.into();
        let table = self.events.entry(name.clone()).or_default();
        for (from, to) in transitions {
            trace!(event = %name, from = from.name(), to = to.name(), "declared transition");
            table.insert(from, to);
        }
        self
    }

    /// Target of `event` from `from`. `None` means the event is not permitted.
    pub fn lookup(&self, event: &str, from: &S) -> Option<&S> {
        self.events.get(event)?.target(from)
    }

    pub fn table(&self, event: &str) -> Option<&TransitionTable<S>> {
        self.events.get(event)
    }

    pub fn has_event(&self, event: &str) -> bool {
        self.events.contains_key(event)
    }

    /// Declared event names, sorted.
    pub fn event_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.events.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Events that may fire from `from`, sorted by name.
    pub fn permitted_events(&self, from: &S) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .events
            .iter()
            .filter(|(_, table)| table.permits(from))
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Every state that appears as a source or target, sorted by name.
    pub fn states(&self) -> Vec<&S> {
        let mut seen = HashSet::new();
        let mut states: Vec<&S> = self
            .events
            .values()
            .flat_map(|table| table.iter())
            .flat_map(|(from, to)| [from, to])
            .filter(|state| seen.insert(*state))
            .collect();
        states.sort_by(|a, b| a.name().cmp(b.name()));
        states
    }

    /// Number of declared events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub(crate) fn events(&self) -> impl Iterator<Item = (&str, &TransitionTable<S>)> {
        self.events.iter().map(|(name, table)| (name.as_str(), table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum DocState {
        Draft,
        Published,
        Archived,
    }

    impl State for DocState {
        fn name(&self) -> &str {
            match self {
                Self::Draft => "draft",
                Self::Published => "published",
                Self::Archived => "archived",
            }
        }
    }

    fn documents() -> StateMachineDefinition<DocState> {
        let mut definition = StateMachineDefinition::new();
        definition
            .define_event("publish", [(DocState::Draft, DocState::Published)])
            .define_event(
                "archive",
                [
                    (DocState::Published, DocState::Archived),
                    (DocState::Draft, DocState::Archived),
                ],
            );
        definition
    }

    #[test]
    fn lookup_returns_declared_target() {
        let definition = documents();
        assert_eq!(
            definition.lookup("publish", &DocState::Draft),
            Some(&DocState::Published)
        );
        assert_eq!(
            definition.lookup("archive", &DocState::Draft),
            Some(&DocState::Archived)
        );
    }

    #[test]
    fn lookup_absent_for_undeclared_source() {
        let definition = documents();
        assert_eq!(definition.lookup("publish", &DocState::Archived), None);
    }

    #[test]
    fn lookup_absent_for_unknown_event() {
        let definition = documents();
        assert_eq!(definition.lookup("delete", &DocState::Draft), None);
        assert!(!definition.has_event("delete"));
    }

    #[test]
    fn redeclaration_extends_and_overwrites() {
        let mut definition = documents();
        definition.define_event("publish", [(DocState::Archived, DocState::Published)]);
        definition.define_event("archive", [(DocState::Draft, DocState::Published)]);

        assert_eq!(
            definition.lookup("publish", &DocState::Draft),
            Some(&DocState::Published)
        );
        assert_eq!(
            definition.lookup("publish", &DocState::Archived),
            Some(&DocState::Published)
        );
        assert_eq!(
            definition.lookup("archive", &DocState::Draft),
            Some(&DocState::Published)
        );
    }

    #[test]
    fn declaring_same_pair_twice_is_idempotent() {
        let once = documents();
        let mut twice = documents();
        twice.define_event("publish", [(DocState::Draft, DocState::Published)]);

        assert_eq!(once, twice);
    }

    #[test]
    fn empty_declaration_registers_event() {
        let mut definition: StateMachineDefinition<DocState> = StateMachineDefinition::new();
        definition.define_event("noop", Vec::<(DocState, DocState)>::new());

        assert!(definition.has_event("noop"));
        assert_eq!(definition.lookup("noop", &DocState::Draft), None);
    }

    #[test]
    fn permitted_events_lists_sorted_names() {
        let definition = documents();
        assert_eq!(
            definition.permitted_events(&DocState::Draft),
            vec!["archive", "publish"]
        );
        assert_eq!(
            definition.permitted_events(&DocState::Published),
            vec!["archive"]
        );
        assert!(definition.permitted_events(&DocState::Archived).is_empty());
    }

    #[test]
    fn states_are_deduplicated() {
        let definition = documents();
        assert_eq!(
            definition.states(),
            vec![&DocState::Archived, &DocState::Draft, &DocState::Published]
        );
        assert_eq!(definition.event_names(), vec!["archive", "publish"]);
        assert_eq!(definition.len(), 2);
    }
}
