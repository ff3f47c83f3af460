//! Builder API for declaring machines.
//!
//! This module provides fluent builders for the reference engine the
//! matchers query: machines, events and guarded transition rules.

pub mod error;
pub mod event;
pub mod machine;
pub mod transition;

pub use error::BuildError;
pub use event::EventBuilder;
pub use machine::{MachineBuilder, MachineSetBuilder};
pub use transition::TransitionBuilder;

/// Start a rule from the named states.
///
/// # Example
///
/// ```
/// use machine_matchers::builder::{from, MachineBuilder};
///
/// let machine = MachineBuilder::<()>::new("state")
///     .initial("parked")
///     .transition("ignite", from(["parked"]).to("idling"))
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert!(machine.state("idling").is_some());
/// ```
pub fn from<S, I, T>(states: I) -> TransitionBuilder<S>
where
    S: 'static,
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    TransitionBuilder::new().from(states)
}

/// Start a rule from any state.
pub fn from_any<S: 'static>() -> TransitionBuilder<S> {
    TransitionBuilder::new().from_any()
}

/// Start a rule from every state except the named ones.
pub fn from_all_except<S, I, T>(states: I) -> TransitionBuilder<S>
where
    S: 'static,
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    TransitionBuilder::new().from_all_except(states)
}
