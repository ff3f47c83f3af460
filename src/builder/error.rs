//! Build errors for machine, event and transition builders.

use thiserror::Error;

/// Errors that can occur when building machines and their rules.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Machine attribute not specified. Pass a non-empty attribute to MachineBuilder::new")]
    MissingAttribute,

    #[error("Transition source states not specified. Call .from(states), .from_any() or .from_all_except(states)")]
    MissingFromState,

    #[error("Transition target not specified. Call .to(state) or .to_same()")]
    MissingToState,

    #[error("Machine on '{attribute}' is already defined")]
    DuplicateMachine { attribute: String },

    #[error("Event '{event}' is already defined on '{attribute}'")]
    DuplicateEvent { attribute: String, event: String },

    #[error("State '{state}' is declared with conflicting values on '{attribute}'")]
    ConflictingStateValue { attribute: String, state: String },
}
