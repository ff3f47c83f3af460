//! Matchers for asserting on a subject's state machines.
//!
//! Every matcher follows the same lifecycle: construct it from an ordered
//! list of names plus an options bag, evaluate it once with
//! [`Matcher::matches`], then read [`MatchReport::failure_message`] if it
//! failed. [`MatchReport::description`] is available regardless of outcome.
//!
//! Evaluation can mutate the subject. A `when` option (and every from-state
//! of `transition_from`) overwrites the machine attribute before the
//! predicate runs, and the forced value stays in place afterwards.
//!
//! # Example
//!
//! ```rust
//! use machine_matchers::builder::{from, MachineBuilder, MachineSetBuilder};
//! use machine_matchers::core::{MachineSet, StateValue, Subject};
//! use machine_matchers::{handle_event, MatchReport, Matcher};
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! struct Car {
//!     machines: Arc<MachineSet<Car>>,
//!     attributes: HashMap<String, StateValue>,
//! }
//!
//! impl Subject for Car {
//!     fn machines(&self) -> Arc<MachineSet<Self>> {
//!         Arc::clone(&self.machines)
//!     }
//!     fn read_attribute(&self, attribute: &str) -> Option<StateValue> {
//!         self.attributes.get(attribute).cloned()
//!     }
//!     fn write_attribute(&mut self, attribute: &str, value: StateValue) {
//!         self.attributes.insert(attribute.to_string(), value);
//!     }
//! }
//!
//! let machine = MachineBuilder::new("state")
//!     .initial("parked")
//!     .transition("ignite", from(["parked"]).to("idling"))
//!     .unwrap();
//! let mut car = Car {
//!     machines: Arc::new(MachineSetBuilder::new().machine(machine).unwrap().build()),
//!     attributes: HashMap::new(),
//! };
//!
//! let mut matcher = handle_event("ignite").when("idling");
//! assert!(!matcher.matches(&mut car).unwrap());
//! assert_eq!(
//!     matcher.failure_message(),
//!     Some("Expected to be able to handle events: ignite in state: idling")
//! );
//! ```

use crate::core::Subject;
use crate::introspector::Introspector;

pub mod error;
pub mod events;
pub mod options;
pub mod respond_to_event;
pub mod states;
pub mod transitions;

pub use error::{OptionsError, UsageError};
pub use events::{
    handle_event, handle_events, reject_event, reject_events, EventMatcher, EventPredicate,
    Handle, HandleEventMatcher, Reject, RejectEventMatcher,
};
pub use options::MatchOptions;
pub use respond_to_event::{respond_to_event, respond_to_events, RespondToEventMatcher};
pub use states::{
    have_state, have_states, reject_state, reject_states, Have, HaveStateMatcher, Lack,
    RejectStateMatcher, StateMatcher, StatePredicate,
};
pub use transitions::{transition_from, transitions_from, TransitionFromMatcher};

/// What a matcher reports, independent of the subject type it runs on.
pub trait MatchReport {
    /// Why the last evaluation failed; `None` if it passed.
    fn failure_message(&self) -> Option<&str>;

    /// Message for a negated expectation that unexpectedly passed.
    fn failure_message_when_negated(&self) -> String {
        format!("Did not expect subject to {}", self.description())
    }

    fn description(&self) -> String;
}

/// The protocol an expectation framework drives.
pub trait Matcher<S>: MatchReport {
    /// Evaluate against `subject`.
    ///
    /// `Ok(false)` is a failed assertion with a message available from
    /// `failure_message`. `Err` means the assertion itself is malformed.
    fn matches(&mut self, subject: &mut S) -> Result<bool, UsageError>;
}

/// Resolve the machine named in `on` and apply a `when` state, once.
pub(crate) fn introspect<'a, S: Subject>(
    subject: &'a mut S,
    options: &MatchOptions,
) -> Result<Introspector<'a, S>, UsageError> {
    let mut introspector = Introspector::new(subject, options.on.as_deref())?;
    if let Some(state) = &options.when {
        introspector.enter_state(state)?;
    }
    Ok(introspector)
}
