//! Machine matchers: assertions about a subject's state machines
//!
//! The crate answers questions a test asks about a state machine without
//! executing it: can this event run now, does this machine declare these
//! states, does this event lead from here to there.
//!
//! # Core Concepts
//!
//! - **Subject**: the object under test, exposing one or more machines keyed
//!   by the attribute they store their value in
//! - **Introspector**: resolves one machine on a subject and classifies
//!   state and event names against it
//! - **Matchers**: one evaluation each, producing a boolean plus a failure
//!   message and a description
//!
//! Evaluating a matcher with a `when` option, or a transition matcher,
//! overwrites the machine attribute on the subject.
//!
//! # Example
//!
//! ```rust
//! use machine_matchers::builder::{from, MachineBuilder, MachineSetBuilder};
//! use machine_matchers::core::{MachineSet, StateValue, Subject};
//! use machine_matchers::{expect, handle_event, have_state, reject_event, transition_from};
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! #[derive(Default)]
//! struct Vehicle {
//!     attributes: HashMap<String, StateValue>,
//! }
//!
//! impl Subject for Vehicle {
//!     fn machines(&self) -> Arc<MachineSet<Self>> {
//!         let machine = MachineBuilder::new("state")
//!             .initial("parked")
//!             .transition("ignite", from(["parked"]).to("idling"))
//!             .unwrap()
//!             .transition("park", from(["idling"]).to("parked"))
//!             .unwrap();
//!         Arc::new(MachineSetBuilder::new().machine(machine).unwrap().build())
//!     }
//!
//!     fn read_attribute(&self, attribute: &str) -> Option<StateValue> {
//!         self.attributes.get(attribute).cloned()
//!     }
//!
//!     fn write_attribute(&mut self, attribute: &str, value: StateValue) {
//!         self.attributes.insert(attribute.to_string(), value);
//!     }
//! }
//!
//! let mut vehicle = Vehicle::default();
//!
//! expect(&mut vehicle)
//!     .to(have_state("idling"))
//!     .to(handle_event("ignite"))
//!     .to(reject_event("park"))
//!     .to(transition_from("idling").to_state("parked").on_event("park"));
//! ```

pub mod builder;
pub mod core;
pub mod expect;
pub mod introspector;
pub mod matchers;

// Re-export commonly used types
pub use crate::core::{capabilities, Capabilities, StateValue, Subject};
pub use expect::{expect, Expectation, ExpectationFailure};
pub use introspector::{IntrospectionError, Introspector};
pub use matchers::{
    handle_event, handle_events, have_state, have_states, reject_event, reject_events,
    reject_state, reject_states, respond_to_event, respond_to_events, transition_from,
    transitions_from, MatchOptions, MatchReport, Matcher, OptionsError, UsageError,
};
