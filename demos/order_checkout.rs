//! E-commerce Order Checkout
//!
//! This example demonstrates the validating executor.
//!
//! Key concepts:
//! - Event table loaded from YAML configuration
//! - Actions reject a transition by adding validation errors
//! - Best-effort form (`checkout`) reports failure as `false`
//! - Confirming form (`checkout!`) reports failure as an error
//! - A failed save keeps the in-memory state advanced
//!
//! Run with: RUST_LOG=debug cargo run --example order_checkout

use entity_fsm::{state_enum, Machine, StateMachineDefinition, TransitionPort};
use entity_fsm::{TransitionError, ValidatedSubject, Validating, ValidationErrors};
use once_cell::sync::Lazy;
use tracing_subscriber::EnvFilter;

state_enum! {
    enum OrderState {
        Pending = "pending",
        Confirmed = "confirmed",
        Cancelled = "cancelled",
    }
}

const ORDER_EVENTS: &str = r#"
events:
  - name: checkout
    transitions:
      - { from: pending, to: confirmed }
  - name: cancel
    transitions:
      - { from: pending, to: cancelled }
      - { from: confirmed, to: cancelled }
"#;

static ORDER: Lazy<StateMachineDefinition<OrderState>> = Lazy::new(|| {
    StateMachineDefinition::from_yaml(ORDER_EVENTS).expect("order definition is valid")
});

// Storage stand-in: rejects every write while offline
struct MockStore {
    online: bool,
    writes: Vec<String>,
}

struct Order {
    id: u64,
    total: f64,
    items: Vec<String>,
    state: Option<OrderState>,
    errors: ValidationErrors,
    store: MockStore,
}

impl TransitionPort for Order {
    type State = OrderState;

    fn state(&self) -> Option<&OrderState> {
        self.state.as_ref()
    }

    fn set_state(&mut self, state: OrderState) {
        self.state = Some(state);
    }
}

impl ValidatedSubject for Order {
    fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    fn save(&mut self) -> bool {
        if !self.store.online {
            return false;
        }
        self.store
            .writes
            .push(format!("order {} -> {:?}", self.id, self.state));
        true
    }
}

impl Machine for Order {
    type Executor = Validating;

    fn definition() -> &'static StateMachineDefinition<OrderState> {
        &ORDER
    }
}

impl Order {
    fn new(id: u64, items: &[&str], total: f64) -> Self {
        Self {
            id,
            total,
            items: items.iter().map(|item| item.to_string()).collect(),
            state: Some(OrderState::Pending),
            errors: ValidationErrors::new(),
            store: MockStore {
                online: true,
                writes: Vec::new(),
            },
        }
    }

    // Business validation
    fn checkout(&mut self, event: &str) -> Result<bool, TransitionError<OrderState>> {
        self.fire(event, |order| {
            if order.items.is_empty() {
                order.errors.add("items", "can't be empty");
            }
            if order.total <= 0.0 {
                order.errors.add("total", "must be positive");
            }
        })
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== E-commerce Order Checkout ===\n");

    println!("Order 1: empty cart");
    let mut empty = Order::new(1, &[], 0.0);
    match empty.checkout("checkout") {
        Ok(done) => println!("  checkout -> {} (errors: {})", done, empty.errors),
        Err(err) => println!("  checkout -> error: {}", err),
    }
    match empty.checkout("checkout!") {
        Ok(done) => println!("  checkout! -> {}", done),
        Err(err) => println!("  checkout! -> error: {}", err),
    }
    println!("  State: {:?}\n", empty.state());

    println!("Order 2: valid cart");
    let mut valid = Order::new(2, &["keyboard", "mouse"], 89.90);
    match valid.checkout("checkout!") {
        Ok(done) => println!("  checkout! -> {}", done),
        Err(err) => println!("  checkout! -> error: {}", err),
    }
    println!("  State: {:?}", valid.state());
    println!("  Writes: {:?}\n", valid.store.writes);

    println!("Order 3: valid cart, storage offline");
    let mut offline = Order::new(3, &["monitor"], 249.00);
    offline.store.online = false;
    match offline.checkout("checkout") {
        Ok(saved) => println!("  checkout -> {}", saved),
        Err(err) => println!("  checkout -> error: {}", err),
    }
    println!("  State advanced anyway: {:?}", offline.state());
    println!("  Can still cancel: {}\n", offline.can_fire("cancel"));

    println!("=== Example Complete ===");
}
