//! State-membership matchers: does the machine declare these states?

use crate::core::{StateValue, Subject};
use crate::introspector::Introspector;
use crate::matchers::options::{collect_items, on_qualifier, symbols, when_qualifier};
use crate::matchers::{introspect, MatchOptions, MatchReport, Matcher, UsageError};
use std::marker::PhantomData;

mod have_state;
mod reject_state;

pub use have_state::{have_state, have_states, Have, HaveStateMatcher};
pub use reject_state::{reject_state, reject_states, Lack, RejectStateMatcher};

/// The family-specific half of a state matcher.
pub trait StatePredicate {
    /// Name used when reporting an unsupported option.
    const NAME: &'static str;

    /// Options this family understands.
    const ALLOWED: &'static [&'static str];

    /// Check the states against the resolved machine. Returns the failure
    /// message, or `None` when the predicate holds.
    fn check<S: Subject>(
        states: &[String],
        options: &MatchOptions,
        introspector: &Introspector<'_, S>,
    ) -> Option<String>;

    fn describe(states: &[String], options: &MatchOptions) -> String;
}

/// Shared evaluation for state matchers.
pub struct StateMatcher<P> {
    states: Vec<String>,
    options: MatchOptions,
    failure_message: Option<String>,
    predicate: PhantomData<P>,
}

impl<P: StatePredicate> StateMatcher<P> {
    pub fn new<I, T>(states: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            states: collect_items(states),
            options: MatchOptions::default(),
            failure_message: None,
            predicate: PhantomData,
        }
    }

    /// Query the machine on `attribute` instead of the default machine.
    pub fn on(mut self, attribute: impl Into<String>) -> Self {
        self.options.on = Some(attribute.into());
        self
    }

    /// Force the subject into `state` before checking.
    pub fn when(mut self, state: impl Into<String>) -> Self {
        self.options.when = Some(state.into());
        self
    }

    /// Expect the single asserted state to carry `value`.
    pub fn value(mut self, value: impl Into<StateValue>) -> Self {
        self.options.value = Some(value.into());
        self
    }

    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    fn validate(&self) -> Result<(), UsageError> {
        if self.states.is_empty() {
            return Err(UsageError::NoItems("state"));
        }
        self.options.ensure_only(P::ALLOWED, P::NAME)?;
        if self.options.value.is_some() && self.states.len() > 1 {
            return Err(UsageError::MultipleStateValues);
        }
        Ok(())
    }
}

impl<S: Subject, P: StatePredicate> Matcher<S> for StateMatcher<P> {
    fn matches(&mut self, subject: &mut S) -> Result<bool, UsageError> {
        self.failure_message = None;
        self.validate()?;

        let introspector = introspect(subject, &self.options)?;
        self.failure_message = P::check(&self.states, &self.options, &introspector);
        Ok(self.failure_message.is_none())
    }
}

impl<P: StatePredicate> MatchReport for StateMatcher<P> {
    fn failure_message(&self) -> Option<&str> {
        self.failure_message.as_deref()
    }

    fn description(&self) -> String {
        P::describe(&self.states, &self.options)
    }
}

/// `:a, :b when :w on :m`, shared by both descriptions.
fn describe_with_qualifiers(states: &[String], extra: &str, options: &MatchOptions) -> String {
    format!(
        "{}{}{}{}",
        symbols(states),
        extra,
        when_qualifier(options),
        on_qualifier(options)
    )
}
