//! Declarative machine definitions: states, events and transition rules.
//!
//! These are the metadata the introspector queries. They are built through
//! `crate::builder` and shared behind an `Arc` by every subject of a type.

use super::guard::Guard;
use super::subject::Subject;
use super::value::StateValue;

/// A declared state: a name plus the raw value stored in the attribute.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StateDef {
    name: String,
    value: StateValue,
}

impl StateDef {
    /// Declare a state whose value is its own name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let value = StateValue::Str(name.clone());
        Self { name, value }
    }

    /// Declare a state with an explicit value distinct from its name.
    pub fn with_value(name: impl Into<String>, value: impl Into<StateValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &StateValue {
        &self.value
    }
}

/// Which states a transition rule may start from.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum FromStates {
    Any,
    Only(Vec<String>),
    AllExcept(Vec<String>),
}

impl FromStates {
    pub fn includes(&self, state: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Only(names) => names.iter().any(|n| n == state),
            Self::AllExcept(names) => !names.iter().any(|n| n == state),
        }
    }

    pub(crate) fn named(&self) -> &[String] {
        match self {
            Self::Any => &[],
            Self::Only(names) | Self::AllExcept(names) => names,
        }
    }
}

/// Where a transition rule leads.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Target {
    /// Loop back to whatever state the subject is in.
    Same,
    State(String),
}

/// One `from => to` rule of an event, optionally guarded.
#[derive(Debug)]
pub struct TransitionRule<S> {
    pub from: FromStates,
    pub to: Target,
    pub guard: Option<Guard<S>>,
}

impl<S> TransitionRule<S> {
    /// Whether this rule applies from `state` for this subject.
    pub fn applies(&self, state: &str, subject: &S) -> bool {
        self.from.includes(state) && self.guard.as_ref().is_none_or(|g| g.check(subject))
    }
}

impl<S> Clone for TransitionRule<S> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            to: self.to.clone(),
            guard: self.guard.clone(),
        }
    }
}

/// A declared event and its rules, tried in declaration order.
#[derive(Debug)]
pub struct EventDef<S> {
    name: String,
    rules: Vec<TransitionRule<S>>,
}

impl<S> EventDef<S> {
    pub(crate) fn new(name: String, rules: Vec<TransitionRule<S>>) -> Self {
        Self { name, rules }
    }

    /// Unqualified event name as declared.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[TransitionRule<S>] {
        &self.rules
    }
}

impl<S> Clone for EventDef<S> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            rules: self.rules.clone(),
        }
    }
}

/// A state machine governing one attribute of a subject type.
#[derive(Debug)]
pub struct Machine<S> {
    attribute: String,
    namespace: Option<String>,
    initial: Option<String>,
    states: Vec<StateDef>,
    events: Vec<EventDef<S>>,
}

impl<S> Machine<S> {
    pub(crate) fn new(
        attribute: String,
        namespace: Option<String>,
        initial: Option<String>,
        states: Vec<StateDef>,
        events: Vec<EventDef<S>>,
    ) -> Self {
        Self {
            attribute,
            namespace,
            initial,
            states,
            events,
        }
    }

    /// Name of the subject attribute this machine stores its value in.
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn initial(&self) -> Option<&StateDef> {
        self.initial.as_deref().and_then(|name| self.state(name))
    }

    /// Declared states in declaration order.
    pub fn states(&self) -> &[StateDef] {
        &self.states
    }

    pub fn events(&self) -> &[EventDef<S>] {
        &self.events
    }

    pub fn state(&self, name: &str) -> Option<&StateDef> {
        self.states.iter().find(|s| s.name == name)
    }

    pub fn state_for_value(&self, value: &StateValue) -> Option<&StateDef> {
        self.states.iter().find(|s| &s.value == value)
    }

    /// Event name as exposed on the subject: `<event>_<namespace>` when the
    /// machine is namespaced.
    pub fn qualified_event_name(&self, event: &EventDef<S>) -> String {
        match &self.namespace {
            Some(ns) => format!("{}_{}", event.name, ns),
            None => event.name.clone(),
        }
    }

    /// Look up an event by its qualified name.
    pub fn event(&self, qualified: &str) -> Option<&EventDef<S>> {
        self.events
            .iter()
            .find(|e| self.qualified_event_name(e) == qualified)
    }

    /// Qualified names of every declared event.
    pub fn event_names(&self) -> Vec<String> {
        self.events
            .iter()
            .map(|e| self.qualified_event_name(e))
            .collect()
    }
}

impl<S: Subject> Machine<S> {
    /// The subject's raw attribute value; an unset attribute reads as the
    /// initial state's value.
    pub fn current_value(&self, subject: &S) -> Option<StateValue> {
        subject
            .read_attribute(&self.attribute)
            .or_else(|| self.initial().map(|s| s.value.clone()))
    }

    pub fn current_state(&self, subject: &S) -> Option<&StateDef> {
        self.current_value(subject)
            .and_then(|value| self.state_for_value(&value))
    }

    /// State the subject would move to if `event` fired now, or `None` when
    /// no rule applies.
    pub fn transition_target(&self, subject: &S, event: &str) -> Option<&StateDef> {
        let current = self.current_state(subject)?;
        let event = self.event(event)?;
        let rule = event
            .rules
            .iter()
            .find(|r| r.applies(&current.name, subject))?;

        match &rule.to {
            Target::Same => Some(current),
            Target::State(name) => self.state(name),
        }
    }

    /// Whether `event` is currently performable on the subject.
    pub fn can_fire(&self, subject: &S, event: &str) -> bool {
        self.transition_target(subject, event).is_some()
    }
}

impl<S> Clone for Machine<S> {
    fn clone(&self) -> Self {
        Self {
            attribute: self.attribute.clone(),
            namespace: self.namespace.clone(),
            initial: self.initial.clone(),
            states: self.states.clone(),
            events: self.events.clone(),
        }
    }
}

/// All machines defined for one subject type, in declaration order.
#[derive(Debug)]
pub struct MachineSet<S> {
    machines: Vec<Machine<S>>,
}

impl<S> MachineSet<S> {
    pub(crate) fn new(machines: Vec<Machine<S>>) -> Self {
        Self { machines }
    }

    pub fn get(&self, attribute: &str) -> Option<&Machine<S>> {
        self.machines.iter().find(|m| m.attribute == attribute)
    }

    pub fn as_slice(&self) -> &[Machine<S>] {
        &self.machines
    }

    pub fn iter(&self) -> impl Iterator<Item = &Machine<S>> {
        self.machines.iter()
    }

    pub fn len(&self) -> usize {
        self.machines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }

    pub fn attributes(&self) -> Vec<&str> {
        self.machines.iter().map(|m| m.attribute()).collect()
    }
}
