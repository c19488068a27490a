//! Declaring which events are legal from which states.
//!
//! A [`StateMachineDefinition`] maps each event name to a
//! [`TransitionTable`]. Definitions are declared directly with
//! `define_event`, fluently with [`DefinitionBuilder`], or loaded from a
//! [`DefinitionConfig`].

pub mod builder;
pub mod config;
pub mod error;
pub mod registry;
pub mod table;

pub use builder::DefinitionBuilder;
pub use config::{DefinitionConfig, EventConfig, TransitionConfig};
pub use error::{DefinitionError, DefinitionViolation};
pub use registry::StateMachineDefinition;
pub use table::TransitionTable;
