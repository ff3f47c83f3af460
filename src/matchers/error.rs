//! Usage errors raised by matchers.

use crate::introspector::IntrospectionError;
use thiserror::Error;

/// The assertion itself is malformed.
///
/// Usage errors are returned from `Matcher::matches` as `Err`, never encoded
/// as a failed match: they mean the test needs fixing, not the subject.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UsageError {
    #[error(transparent)]
    Introspection(#[from] IntrospectionError),

    #[error("at least one {0} must be given")]
    NoItems(&'static str),

    #[error("cannot make value assertions on multiple states at once")]
    MultipleStateValues,

    #[error("Option :{0} cannot be nil")]
    MissingOption(&'static str),

    #[error("Option :{option} is not supported by {matcher}")]
    UnsupportedOption {
        option: &'static str,
        matcher: &'static str,
    },
}

/// An options bag could not be read.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("Invalid matcher options: {0}")]
    Json(#[from] serde_json::Error),
}
