//! Introspection error types.

use thiserror::Error;

/// A test referenced a machine, state or event its subject does not define.
///
/// These are authoring mistakes in the test itself, never a failed match.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IntrospectionError {
    #[error("{type_name} does not have a state machine defined on {attribute}")]
    MachineNotFound { type_name: String, attribute: String },

    #[error("{type_name} does not define a state machine")]
    NoMachine { type_name: String },

    #[error("{type_name} defines several state machines ({attributes}); choose one with `on`")]
    AmbiguousMachine {
        type_name: String,
        attributes: String,
    },

    #[error("{type_name} does not define state: {state}")]
    StateNotFound { type_name: String, state: String },

    #[error("{type_name} does not define event :{event}")]
    EventNotFound { type_name: String, event: String },
}
