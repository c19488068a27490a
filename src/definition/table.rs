//! Per-event mapping from source state to target state.

use crate::core::State;
use std::collections::HashMap;

/// Transition table for a single event.
///
/// Each source state maps to exactly one target. Inserting a source that is
/// already present replaces its target, so the latest declaration wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionTable<S: State> {
    targets: HashMap<S, S>,
}

impl<S: State> Default for TransitionTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> TransitionTable<S> {
    pub fn new() -> Self {
        Self {
            targets: HashMap::new(),
        }
    }

    /// Map `from` to `to`, returning the target it replaced, if any.
    pub fn insert(&mut self, from: S, to: S) -> Option<S> {
        self.targets.insert(from, to)
    }

    /// Target state for `from`, or `None` when the event is not permitted.
    pub fn target(&self, from: &S) -> Option<&S> {
        self.targets.get(from)
    }

    pub fn permits(&self, from: &S) -> bool {
        self.targets.contains_key(from)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Iterate `(from, to)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &S)> {
        self.targets.iter()
    }
}

impl<S: State> FromIterator<(S, S)> for TransitionTable<S> {
    fn from_iter<I: IntoIterator<Item = (S, S)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (from, to) in iter {
            table.insert(from, to);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(name: &str) -> String {
        name.to_string()
    }

    #[test]
    fn empty_table_permits_nothing() {
        let table: TransitionTable<String> = TransitionTable::new();
        assert!(table.is_empty());
        assert!(!table.permits(&s("draft")));
        assert_eq!(table.target(&s("draft")), None);
    }

    #[test]
    fn insert_maps_source_to_target() {
        let mut table = TransitionTable::new();
        assert_eq!(table.insert(s("draft"), s("published")), None);

        assert!(table.permits(&s("draft")));
        assert_eq!(table.target(&s("draft")), Some(&s("published")));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn reinsert_replaces_target() {
        let mut table = TransitionTable::new();
        table.insert(s("draft"), s("published"));
        let previous = table.insert(s("draft"), s("archived"));

        assert_eq!(previous, Some(s("published")));
        assert_eq!(table.target(&s("draft")), Some(&s("archived")));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn collects_from_pairs() {
        let table: TransitionTable<String> = vec![
            (s("draft"), s("archived")),
            (s("published"), s("archived")),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.len(), 2);
        assert!(table.iter().all(|(_, to)| to == "archived"));
    }
}
