//! entity-fsm: declarative state machines for domain entities
//!
//! An entity type declares named events, each mapping the states it may
//! fire from to the state it leads to. Firing an event wraps the entity's
//! own behavior: the behavior runs, and the state advances, only when the
//! current state permits the event.
//!
//! # Core Concepts
//!
//! - **State**: opaque identifiers via the `State` trait (`String` works as is)
//! - **Definition**: per-type registry of events and their transition tables
//! - **Port**: the entity's state field, exposed through `TransitionPort`
//! - **Executors**: `Base` commits unconditionally; `Validating` commits only
//!   valid changes and persists them, with a best-effort (`"event"`) and a
//!   confirming (`"event!"`) form
//!
//! # Example
//!
//! ```rust
//! use entity_fsm::subject::ValidationErrors;
//! use entity_fsm::{state_enum, Machine, StateMachineDefinition, TransitionPort};
//! use entity_fsm::{ValidatedSubject, Validating};
//! use once_cell::sync::Lazy;
//!
//! state_enum! {
//!     pub enum OrderState {
//!         Pending = "pending",
//!         Confirmed = "confirmed",
//!     }
//! }
//!
//! static ORDER: Lazy<StateMachineDefinition<OrderState>> = Lazy::new(|| {
//!     StateMachineDefinition::builder()
//!         .event("checkout", [(OrderState::Pending, OrderState::Confirmed)])
//!         .build()
//!         .expect("order definition is valid")
//! });
//!
//! struct Order {
//!     state: Option<OrderState>,
//!     total: i64,
//!     errors: ValidationErrors,
//! }
//!
//! impl TransitionPort for Order {
//!     type State = OrderState;
//!
//!     fn state(&self) -> Option<&OrderState> {
//!         self.state.as_ref()
//!     }
//!
//!     fn set_state(&mut self, state: OrderState) {
//!         self.state = Some(state);
//!     }
//! }
//!
//! impl ValidatedSubject for Order {
//!     fn errors(&self) -> &ValidationErrors {
//!         &self.errors
//!     }
//!
//!     fn save(&mut self) -> bool {
//!         true
//!     }
//! }
//!
//! impl Machine for Order {
//!     type Executor = Validating;
//!
//!     fn definition() -> &'static StateMachineDefinition<OrderState> {
//!         &ORDER
//!     }
//! }
//!
//! let mut order = Order { state: Some(OrderState::Pending), total: 0, errors: ValidationErrors::new() };
//! let checkout = |order: &mut Order| {
//!     if order.total <= 0 {
//!         order.errors.add("total", "must be positive");
//!     }
//! };
//!
//! assert_eq!(order.fire("checkout", checkout).unwrap(), false);
//! assert!(order.fire("checkout!", checkout).is_err());
//! assert!(order.is_in(&OrderState::Pending));
//!
//! order.errors.clear();
//! order.total = 10;
//! assert_eq!(order.fire("checkout", checkout).unwrap(), true);
//! assert!(order.is_in(&OrderState::Confirmed));
//! ```

#[macro_use]
mod macros;

pub mod core;
pub mod definition;
pub mod executor;
pub mod subject;

// Re-export commonly used types
pub use crate::core::{Event, EventForm, State};
pub use definition::{DefinitionBuilder, DefinitionError, StateMachineDefinition, TransitionTable};
pub use executor::{Base, Fired, Machine, TransitionError, TransitionExecutor, Validating};
pub use subject::{PersistenceError, TransitionPort, ValidatedSubject, ValidationErrors};
