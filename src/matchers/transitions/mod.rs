//! Transition-validity matchers.
//!
//! A transition matcher forces the subject into each from-state in turn, so
//! unlike the other families it may write the machine attribute several
//! times in one evaluation. The last forced state stays in place.

mod transition_from;

pub use transition_from::{transition_from, transitions_from, TransitionFromMatcher};
