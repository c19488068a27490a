//! Core State trait for state machine states.
//!
//! States are opaque identifiers. Any value may appear as the source or
//! target of a transition; nothing requires the full set of states to be
//! enumerated up front.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: targets are copied out of the shared definition on commit
/// - `Eq` + `Hash`: states key the transition tables
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: definitions can be loaded from config
/// - `'static`: definitions live in per-type statics shared by every entity
///
/// `String` implements `State` directly, so string-typed states work
/// without any extra declarations. Enums usually come from [`state_enum!`].
///
/// # Example
///
/// ```rust
/// use entity_fsm::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum OrderState {
///     Pending,
///     Confirmed,
/// }
///
/// impl State for OrderState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Pending => "pending",
///             Self::Confirmed => "confirmed",
///         }
///     }
/// }
///
/// assert_eq!(OrderState::Pending.name(), "pending");
/// assert_eq!("draft".to_string().name(), "draft");
/// ```
///
/// [`state_enum!`]: crate::state_enum
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Draft,
        Published,
        Archived,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Draft => "draft",
                Self::Published => "published",
                Self::Archived => "archived",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Draft.name(), "draft");
        assert_eq!(TestState::Published.name(), "published");
        assert_eq!(TestState::Archived.name(), "archived");
    }

    #[test]
    fn string_states_name_themselves() {
        let state = String::from("pending");
        assert_eq!(state.name(), "pending");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Published;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_comparable() {
        assert_eq!(TestState::Draft, TestState::Draft);
        assert_ne!(TestState::Draft, TestState::Archived);
    }
}
