//! Name-based queries against one machine of a subject.
//!
//! The introspector is the only part of the crate that touches subject
//! internals. Matchers ask it which names are defined, which events are
//! performable right now, and ask it to force a state before evaluating.

use crate::core::{Machine, MachineSet, StateDef, StateValue, Subject, DEFAULT_ATTRIBUTE};
use std::sync::Arc;
use tracing::{debug, trace};

pub mod error;

pub use error::IntrospectionError;

/// Wraps a subject and the machine a matcher is scoped to.
pub struct Introspector<'a, S: Subject> {
    subject: &'a mut S,
    machines: Arc<MachineSet<S>>,
    index: usize,
}

impl<'a, S: Subject> Introspector<'a, S> {
    /// Resolve the machine named `on`, or the subject's default machine.
    ///
    /// Without a name the sole machine is used; a subject with several
    /// machines falls back to the one on `state` and is ambiguous otherwise.
    pub fn new(subject: &'a mut S, on: Option<&str>) -> Result<Self, IntrospectionError> {
        let machines = subject.machines();
        let attributes = machines.attributes();

        let index = match on {
            Some(attribute) => attributes
                .iter()
                .position(|a| *a == attribute)
                .ok_or_else(|| IntrospectionError::MachineNotFound {
                    type_name: subject.type_name(),
                    attribute: attribute.to_string(),
                })?,
            None => match attributes.len() {
                0 => {
                    return Err(IntrospectionError::NoMachine {
                        type_name: subject.type_name(),
                    })
                }
                1 => 0,
                _ => attributes
                    .iter()
                    .position(|a| *a == DEFAULT_ATTRIBUTE)
                    .ok_or_else(|| IntrospectionError::AmbiguousMachine {
                        type_name: subject.type_name(),
                        attributes: attributes.join(", "),
                    })?,
            },
        };

        debug!(
            subject = %subject.type_name(),
            attribute = attributes[index],
            "resolved state machine"
        );

        Ok(Self {
            subject,
            machines: Arc::clone(&machines),
            index,
        })
    }

    pub fn machine(&self) -> &Machine<S> {
        &self.machines.as_slice()[self.index]
    }

    pub fn type_name(&self) -> String {
        self.subject.type_name()
    }

    /// Name of the attribute the resolved machine stores its value in.
    pub fn attribute(&self) -> &str {
        self.machine().attribute()
    }

    /// The subject's current raw value for the attribute.
    pub fn current_value(&self) -> Option<StateValue> {
        self.machine().current_value(&*self.subject)
    }

    /// Current value as shown in failure messages.
    pub fn current_value_text(&self) -> String {
        self.current_value()
            .map(|v| v.to_string())
            .unwrap_or_else(|| "nil".to_string())
    }

    /// Lenient lookup: `None` when the state is not declared.
    pub fn state(&self, name: &str) -> Option<&StateDef> {
        self.machine().state(name)
    }

    /// Strict lookup: an undeclared state is a usage error.
    pub fn require_state(&self, name: &str) -> Result<&StateDef, IntrospectionError> {
        self.state(name)
            .ok_or_else(|| IntrospectionError::StateNotFound {
                type_name: self.type_name(),
                state: name.to_string(),
            })
    }

    /// Force the subject into `name` by overwriting its attribute.
    ///
    /// This mutates the subject: anything evaluated afterwards sees the
    /// forced state.
    pub fn enter_state(&mut self, name: &str) -> Result<(), IntrospectionError> {
        let value = self.require_state(name)?.value().clone();
        let attribute = self.attribute().to_string();

        debug!(
            subject = %self.type_name(),
            attribute = %attribute,
            state = name,
            value = %value,
            "forcing state"
        );
        self.subject.write_attribute(&attribute, value);
        Ok(())
    }

    /// Split names into `(defined, undefined)` states.
    pub fn classify_states<T: AsRef<str>>(&self, names: &[T]) -> (Vec<String>, Vec<String>) {
        let split = partition(names, |name| self.state(name).is_some());
        trace!(defined = ?split.0, undefined = ?split.1, "classified states");
        split
    }

    /// The machine that defines `name`: the resolved one first, then the
    /// subject's other machines in declaration order.
    fn event_owner(&self, name: &str) -> Option<&Machine<S>> {
        let machine = self.machine();
        if machine.event(name).is_some() {
            return Some(machine);
        }
        self.machines
            .as_slice()
            .iter()
            .find(|other| other.event(name).is_some())
    }

    /// Whether any machine of the subject defines the event.
    pub fn event_defined(&self, name: &str) -> bool {
        self.event_owner(name).is_some()
    }

    /// Strict lookup on the resolved machine: an event it does not
    /// declare is a usage error.
    pub fn require_event(&self, name: &str) -> Result<(), IntrospectionError> {
        if self.machine().event(name).is_some() {
            Ok(())
        } else {
            Err(IntrospectionError::EventNotFound {
                type_name: self.type_name(),
                event: name.to_string(),
            })
        }
    }

    /// Whether the event can run now, given current state and guards.
    pub fn event_valid(&self, name: &str) -> bool {
        self.event_owner(name)
            .is_some_and(|machine| machine.can_fire(&*self.subject, name))
    }

    /// Split names into `(defined, undefined)` events.
    pub fn classify_events<T: AsRef<str>>(&self, names: &[T]) -> (Vec<String>, Vec<String>) {
        let split = partition(names, |name| self.event_defined(name));
        trace!(defined = ?split.0, undefined = ?split.1, "classified events");
        split
    }

    /// Split names into `(valid, invalid)` events. Only meaningful for
    /// events already known to be defined.
    pub fn classify_event_validity<T: AsRef<str>>(
        &self,
        names: &[T],
    ) -> (Vec<String>, Vec<String>) {
        let split = partition(names, |name| self.event_valid(name));
        trace!(valid = ?split.0, invalid = ?split.1, "classified event validity");
        split
    }

    /// Whether firing `event` now would land in `to`.
    pub fn valid_transition(&self, event: &str, to: &StateDef) -> bool {
        self.machine()
            .transition_target(&*self.subject, event)
            .is_some_and(|target| target.name() == to.name())
    }
}

fn partition<T, F>(names: &[T], mut predicate: F) -> (Vec<String>, Vec<String>)
where
    T: AsRef<str>,
    F: FnMut(&str) -> bool,
{
    names
        .iter()
        .map(|n| n.as_ref().to_string())
        .partition(|n: &String| predicate(n.as_str()))
}
