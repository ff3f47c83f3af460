//! Builders for machines and machine sets.

use crate::builder::error::BuildError;
use crate::builder::event::EventBuilder;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Machine, MachineSet, StateDef, StateValue, Target};

/// Builder for a state machine on one subject attribute.
///
/// States named by the initial state or by any transition rule are declared
/// implicitly, so only states with explicit values or no transitions need
/// `.state()`.
pub struct MachineBuilder<S: 'static> {
    attribute: String,
    namespace: Option<String>,
    initial: Option<String>,
    states: Vec<StateDef>,
    events: Vec<EventBuilder<S>>,
}

impl<S: 'static> MachineBuilder<S> {
    /// Create a builder for the machine stored in `attribute`.
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            namespace: None,
            initial: None,
            states: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Qualify event names as `<event>_<namespace>`.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state whose value is its name.
    pub fn state(mut self, name: impl Into<String>) -> Self {
        self.states.push(StateDef::new(name));
        self
    }

    /// Declare a state with an explicit value.
    pub fn state_with_value(
        mut self,
        name: impl Into<String>,
        value: impl Into<StateValue>,
    ) -> Self {
        self.states.push(StateDef::with_value(name, value));
        self
    }

    /// Declare several states at once.
    pub fn states<I, T>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.states.extend(names.into_iter().map(StateDef::new));
        self
    }

    pub fn event(mut self, event: EventBuilder<S>) -> Self {
        self.events.push(event);
        self
    }

    /// Add a rule to the named event, declaring the event if needed.
    pub fn transition(
        mut self,
        event: &str,
        builder: TransitionBuilder<S>,
    ) -> Result<Self, BuildError> {
        let rule = builder.build()?;
        match self.events.iter().position(|e| e.name() == event) {
            Some(index) => {
                let existing = self.events.remove(index);
                self.events.insert(index, existing.add_rule(rule));
            }
            None => self.events.push(EventBuilder::new(event).add_rule(rule)),
        }
        Ok(self)
    }

    /// Build the machine.
    /// Returns an error on an empty attribute, duplicate events or states
    /// declared twice with different values.
    pub fn build(self) -> Result<Machine<S>, BuildError> {
        if self.attribute.is_empty() {
            return Err(BuildError::MissingAttribute);
        }

        let mut states: Vec<StateDef> = Vec::new();
        for state in self.states {
            let same_value = states
                .iter()
                .find(|s| s.name() == state.name())
                .map(|existing| existing.value() == state.value());
            match same_value {
                Some(false) => {
                    return Err(BuildError::ConflictingStateValue {
                        attribute: self.attribute,
                        state: state.name().to_string(),
                    });
                }
                Some(true) => {}
                None => states.push(state),
            }
        }

        let events: Vec<_> = self.events.into_iter().map(EventBuilder::build).collect();
        for (index, event) in events.iter().enumerate() {
            if events[..index].iter().any(|e| e.name() == event.name()) {
                return Err(BuildError::DuplicateEvent {
                    attribute: self.attribute,
                    event: event.name().to_string(),
                });
            }
        }

        let referenced = self.initial.iter().cloned().chain(events.iter().flat_map(|e| {
            e.rules().iter().flat_map(|rule| {
                let target = match &rule.to {
                    Target::State(name) => Some(name.clone()),
                    Target::Same => None,
                };
                rule.from.named().iter().cloned().chain(target)
            })
        }));
        for name in referenced.collect::<Vec<_>>() {
            if !states.iter().any(|s| s.name() == name) {
                states.push(StateDef::new(name));
            }
        }

        Ok(Machine::new(
            self.attribute,
            self.namespace,
            self.initial,
            states,
            events,
        ))
    }
}

/// Builder for the set of machines a subject type defines.
pub struct MachineSetBuilder<S: 'static> {
    machines: Vec<Machine<S>>,
}

impl<S: 'static> MachineSetBuilder<S> {
    pub fn new() -> Self {
        Self {
            machines: Vec::new(),
        }
    }

    /// Add a machine using a builder.
    /// Returns an error if the machine fails validation or its attribute is
    /// already taken.
    pub fn machine(mut self, builder: MachineBuilder<S>) -> Result<Self, BuildError> {
        let machine = builder.build()?;
        if self
            .machines
            .iter()
            .any(|m| m.attribute() == machine.attribute())
        {
            return Err(BuildError::DuplicateMachine {
                attribute: machine.attribute().to_string(),
            });
        }
        self.machines.push(machine);
        Ok(self)
    }

    pub fn build(self) -> MachineSet<S> {
        MachineSet::new(self.machines)
    }
}

impl<S: 'static> Default for MachineSetBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
