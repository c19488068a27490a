//! Document Publishing Workflow
//!
//! This example demonstrates the unconditional executor.
//!
//! Key concepts:
//! - Events declared once per entity type (publish, archive)
//! - An event may fire from several states (archive from draft or published)
//! - Actions run only when the current state permits the event
//! - A custom illegal-event hook records a domain error instead of failing
//!
//! Run with: RUST_LOG=debug cargo run --example document_workflow

use entity_fsm::{state_enum, Base, Event, Machine, StateMachineDefinition};
use entity_fsm::{State, TransitionError, TransitionPort};
use once_cell::sync::Lazy;
use tracing_subscriber::EnvFilter;

state_enum! {
    enum DocState {
        Draft = "draft",
        Published = "published",
        Archived = "archived",
    }
}

static DOCUMENT: Lazy<StateMachineDefinition<DocState>> = Lazy::new(|| {
    StateMachineDefinition::builder()
        .event("publish", [(DocState::Draft, DocState::Published)])
        .event(
            "archive",
            [
                (DocState::Published, DocState::Archived),
                (DocState::Draft, DocState::Archived),
            ],
        )
        .build()
        .expect("document definition is valid")
});

// Document entity
struct Document {
    id: u64,
    title: String,
    state: Option<DocState>,
    notices: Vec<String>,
}

impl TransitionPort for Document {
    type State = DocState;

    fn state(&self) -> Option<&DocState> {
        self.state.as_ref()
    }

    fn set_state(&mut self, state: DocState) {
        self.state = Some(state);
    }

    // Record the rejection on the document rather than failing the call
    fn illegal_event(&mut self, event: Event<'_>) -> Result<(), TransitionError<DocState>> {
        let state = self.state.as_ref().map_or("unset", |state| state.name());
        let notice = format!("'{}' is not allowed while '{}'", event, state);
        self.notices.push(notice);
        Ok(())
    }
}

impl Machine for Document {
    type Executor = Base;

    fn definition() -> &'static StateMachineDefinition<DocState> {
        &DOCUMENT
    }
}

impl Document {
    fn publish(&mut self) -> Result<Option<String>, TransitionError<DocState>> {
        self.fire("publish", |doc| format!("/docs/{}", doc.id))
    }

    fn archive(&mut self) -> Result<Option<()>, TransitionError<DocState>> {
        self.fire("archive", |doc| {
            println!("  [Archive] Moving '{}' to cold storage", doc.title);
        })
    }
}

fn main() -> Result<(), TransitionError<DocState>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Document Publishing Workflow ===\n");
    println!("Events: {:?}\n", DOCUMENT.event_names());

    let mut doc = Document {
        id: 123,
        title: "Quarterly report".to_string(),
        state: Some(DocState::Draft),
        notices: Vec::new(),
    };

    println!("Step 1: Publish (permitted: {:?})", doc.permitted_events());
    if let Some(url) = doc.publish()? {
        println!("  ✓ Published at {}\n", url);
    }

    println!("Step 2: Archive");
    doc.archive()?;
    println!("  ✓ State is now {:?}\n", doc.state());

    println!("Step 3: Publish again");
    if doc.publish()?.is_none() {
        println!("  ✗ Rejected: {}", doc.notices.join("; "));
        println!("  State unchanged: {:?}\n", doc.state());
    }

    println!("=== Example Complete ===");
    Ok(())
}
