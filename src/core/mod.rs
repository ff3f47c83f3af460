//! Core state machine types consumed by the matchers.
//!
//! This module is the boundary with the state machine engine:
//! - Machine metadata via `Machine` and `MachineSet`
//! - Guard predicates evaluated against the subject
//! - The `Subject` and `Capabilities` traits a subject under test implements
//!
//! Nothing here executes transitions. Matchers only ask questions
//! ("is this event performable now?") and force attribute values.

mod guard;
mod machine;
mod subject;
mod value;

pub use guard::Guard;
pub use machine::{EventDef, FromStates, Machine, MachineSet, StateDef, Target, TransitionRule};
pub use subject::{capabilities, Capabilities, Subject, SubjectCapabilities};
pub use value::StateValue;

/// Attribute of the machine used when a subject defines several and none
/// is named.
pub const DEFAULT_ATTRIBUTE: &str = "state";
