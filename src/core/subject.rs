//! Traits a subject under test implements to expose its machines.

use super::machine::MachineSet;
use super::value::StateValue;
use std::sync::Arc;

/// An object owning one or more state machines.
///
/// Implementors store one raw value per machine attribute. The matchers read
/// it to report the current state and overwrite it when forcing a state.
///
/// # Example
///
/// ```rust
/// use machine_matchers::builder::{MachineBuilder, MachineSetBuilder};
/// use machine_matchers::core::{MachineSet, StateValue, Subject};
/// use std::collections::HashMap;
/// use std::sync::Arc;
///
/// struct Door {
///     machines: Arc<MachineSet<Door>>,
///     attributes: HashMap<String, StateValue>,
/// }
///
/// impl Subject for Door {
///     fn machines(&self) -> Arc<MachineSet<Self>> {
///         Arc::clone(&self.machines)
///     }
///
///     fn read_attribute(&self, attribute: &str) -> Option<StateValue> {
///         self.attributes.get(attribute).cloned()
///     }
///
///     fn write_attribute(&mut self, attribute: &str, value: StateValue) {
///         self.attributes.insert(attribute.to_string(), value);
///     }
/// }
///
/// let machines = MachineSetBuilder::new()
///     .machine(MachineBuilder::new("state").initial("closed").state("open"))
///     .unwrap()
///     .build();
/// let door = Door { machines: Arc::new(machines), attributes: HashMap::new() };
///
/// assert_eq!(door.machines().len(), 1);
/// ```
pub trait Subject: Sized {
    /// Type name used in usage-error diagnostics.
    fn type_name(&self) -> String {
        let full = std::any::type_name::<Self>();
        let path = full.split('<').next().unwrap_or(full);
        path.rsplit("::").next().unwrap_or(path).to_string()
    }

    /// The machines declared for this subject's type.
    fn machines(&self) -> Arc<MachineSet<Self>>;

    /// Current raw value of a machine attribute, `None` if never written.
    fn read_attribute(&self, attribute: &str) -> Option<StateValue>;

    /// Overwrite a machine attribute, bypassing transition rules.
    fn write_attribute(&mut self, attribute: &str, value: StateValue);
}

/// Per-event capability queries answered directly by a subject.
///
/// This is the duck-typed surface `respond_to_event` uses: no machine
/// metadata, just one boolean query per event name.
pub trait Capabilities {
    /// `Some(answer)` if the subject exposes a capability query for
    /// `event`, `None` if it does not.
    fn can(&self, event: &str) -> Option<bool>;

    /// Current state value to mention in failure messages, if known.
    fn state_hint(&self) -> Option<StateValue> {
        None
    }
}

/// Answers capability queries for a `Subject` from all of its machines.
pub struct SubjectCapabilities<'a, S: Subject> {
    subject: &'a S,
    machines: Arc<MachineSet<S>>,
}

impl<'a, S: Subject> SubjectCapabilities<'a, S> {
    pub fn new(subject: &'a S) -> Self {
        Self {
            machines: subject.machines(),
            subject,
        }
    }
}

impl<S: Subject> Capabilities for SubjectCapabilities<'_, S> {
    fn can(&self, event: &str) -> Option<bool> {
        self.machines
            .iter()
            .find(|m| m.event(event).is_some())
            .map(|m| m.can_fire(self.subject, event))
    }

    fn state_hint(&self) -> Option<StateValue> {
        let mut machines = self.machines.iter();
        match (machines.next(), machines.next()) {
            (Some(only), None) => only.current_value(self.subject),
            _ => self
                .machines
                .get(super::DEFAULT_ATTRIBUTE)
                .and_then(|m| m.current_value(self.subject)),
        }
    }
}

/// Adapt a subject so `respond_to_event` can query it.
pub fn capabilities<S: Subject>(subject: &S) -> SubjectCapabilities<'_, S> {
    SubjectCapabilities::new(subject)
}
