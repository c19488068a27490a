//! Core state machine vocabulary.
//!
//! - State identifiers via the `State` trait
//! - Event names and the form they are fired in
//!
//! Nothing in this module has side effects.

mod event;
mod state;

pub use event::{Event, EventForm, CONFIRMING_MARKER};
pub use state::State;
