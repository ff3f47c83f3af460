//! Minimal `expect(subject).to(matcher)` harness.
//!
//! Test frameworks drive [`Matcher`] directly; this module is the small
//! in-crate version of that protocol. `to` and `not_to` panic on failure,
//! `check` and `check_not` return the failure instead.

use crate::matchers::{MatchReport, Matcher, UsageError};
use thiserror::Error;

/// Why an expectation did not hold.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExpectationFailure {
    /// The matcher could not be evaluated.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// The matcher evaluated and disagreed.
    #[error("{0}")]
    Mismatch(String),
}

/// An expectation on one subject. Matchers run against it in order.
pub struct Expectation<'a, S> {
    subject: &'a mut S,
}

/// Start an expectation on `subject`.
pub fn expect<S>(subject: &mut S) -> Expectation<'_, S> {
    Expectation { subject }
}

impl<S> Expectation<'_, S> {
    pub fn check<M: Matcher<S>>(&mut self, mut matcher: M) -> Result<(), ExpectationFailure> {
        if matcher.matches(&mut *self.subject)? {
            return Ok(());
        }
        let message = matcher
            .failure_message()
            .map(str::to_string)
            .unwrap_or_else(|| format!("Expected subject to {}", matcher.description()));
        Err(ExpectationFailure::Mismatch(message))
    }

    pub fn check_not<M: Matcher<S>>(&mut self, mut matcher: M) -> Result<(), ExpectationFailure> {
        if matcher.matches(&mut *self.subject)? {
            return Err(ExpectationFailure::Mismatch(
                matcher.failure_message_when_negated(),
            ));
        }
        Ok(())
    }

    /// Panics unless `matcher` matches.
    #[track_caller]
    pub fn to<M: Matcher<S>>(&mut self, matcher: M) -> &mut Self {
        if let Err(failure) = self.check(matcher) {
            panic!("{failure}");
        }
        self
    }

    /// Panics if `matcher` matches, or if it cannot be evaluated.
    #[track_caller]
    pub fn not_to<M: Matcher<S>>(&mut self, matcher: M) -> &mut Self {
        if let Err(failure) = self.check_not(matcher) {
            panic!("{failure}");
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{from, MachineBuilder};
    use crate::matchers::events::fixtures::Calculator;
    use crate::matchers::{handle_event, have_state, reject_event};

    fn parked() -> Calculator {
        Calculator::with_machine(
            MachineBuilder::new("state")
                .initial("parked")
                .transition("ignite", from(["parked"]).to("idling"))
                .unwrap(),
        )
    }

    #[test]
    fn passing_expectations_chain() {
        let mut subject = parked();

        expect(&mut subject)
            .to(handle_event("ignite"))
            .to(have_state("idling"))
            .not_to(handle_event("ignite").when("idling"));
    }

    #[test]
    fn mismatch_carries_failure_message() {
        let mut subject = parked();

        let failure = expect(&mut subject)
            .check(handle_event("ignite").when("idling"))
            .unwrap_err();

        assert_eq!(
            failure,
            ExpectationFailure::Mismatch(
                "Expected to be able to handle events: ignite in state: idling".to_string()
            )
        );
    }

    #[test]
    fn negated_mismatch_uses_description() {
        let mut subject = parked();

        let failure = expect(&mut subject)
            .check_not(handle_event("ignite"))
            .unwrap_err();

        assert_eq!(failure.to_string(), "Did not expect subject to handle :ignite");
    }

    #[test]
    fn usage_errors_surface_in_both_directions() {
        let mut subject = parked();

        let positive = expect(&mut subject).check(reject_event("ignite").when("flying"));
        let negative = expect(&mut subject).check_not(reject_event("ignite").when("flying"));

        assert!(matches!(positive, Err(ExpectationFailure::Usage(_))));
        assert!(matches!(negative, Err(ExpectationFailure::Usage(_))));
    }

    #[test]
    fn reports_are_read_without_naming_the_subject_type() {
        let mut subject = parked();
        let mut matcher = handle_event("ignite").when("idling");

        assert!(!matcher.matches(&mut subject).unwrap());

        let report: &dyn MatchReport = &matcher;
        assert_eq!(
            report.failure_message(),
            Some("Expected to be able to handle events: ignite in state: idling")
        );
        assert_eq!(report.description(), "handle :ignite when :idling");
        assert_eq!(
            matcher.failure_message_when_negated(),
            "Did not expect subject to handle :ignite when :idling"
        );
    }

    #[test]
    #[should_panic(expected = "Expected radical_state to allow state: rad")]
    fn to_panics_with_failure_message() {
        let mut subject = Calculator::with_machine(
            MachineBuilder::new("radical_state").initial("not_so_rad"),
        );

        expect(&mut subject).to(have_state("rad"));
    }
}
