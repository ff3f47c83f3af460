//! Event-capability matchers: can the subject perform these events now?

use crate::core::Subject;
use crate::introspector::Introspector;
use crate::matchers::options::{collect_items, on_qualifier, symbols, when_qualifier};
use crate::matchers::{introspect, MatchOptions, MatchReport, Matcher, UsageError};
use std::marker::PhantomData;

mod handle_event;
mod reject_event;

pub use handle_event::{handle_event, handle_events, Handle, HandleEventMatcher};
pub use reject_event::{reject_event, reject_events, Reject, RejectEventMatcher};

/// The family-specific half of an event matcher.
pub trait EventPredicate {
    /// Verb that opens the description, e.g. `handle`.
    const VERB: &'static str;

    /// Check events already known to be defined. Returns the failure
    /// message, or `None` when the predicate holds.
    fn check<S: Subject>(events: &[String], introspector: &Introspector<'_, S>) -> Option<String>;
}

/// Shared evaluation for event matchers.
///
/// Events the machine does not define fail the match with their own message
/// before the predicate runs, so an unknown name is never reported as
/// merely blocked.
pub struct EventMatcher<P> {
    events: Vec<String>,
    options: MatchOptions,
    failure_message: Option<String>,
    predicate: PhantomData<P>,
}

impl<P: EventPredicate> EventMatcher<P> {
    pub fn new<I, T>(events: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            events: collect_items(events),
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

    /// Force the subject into `state` before checking the events.
    pub fn when(mut self, state: impl Into<String>) -> Self {
        self.options.when = Some(state.into());
        self
    }

    /// Replace the options bag.
    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    fn validate(&self) -> Result<(), UsageError> {
        if self.events.is_empty() {
            return Err(UsageError::NoItems("event"));
        }
        self.options.ensure_only(&["on", "when"], P::VERB)
    }
}

impl<S: Subject, P: EventPredicate> Matcher<S> for EventMatcher<P> {
    fn matches(&mut self, subject: &mut S) -> Result<bool, UsageError> {
        self.failure_message = None;
        self.validate()?;

        let introspector = introspect(subject, &self.options)?;

        let (_, undefined) = introspector.classify_events(&self.events);
        if !undefined.is_empty() {
            self.failure_message = Some(format!(
                "state_machine: {} does not define events: {} (cannot {} them)",
                introspector.attribute(),
                undefined.join(", "),
                P::VERB
            ));
            return Ok(false);
        }

        self.failure_message = P::check(&self.events, &introspector);
        Ok(self.failure_message.is_none())
    }
}

impl<P: EventPredicate> MatchReport for EventMatcher<P> {
    fn failure_message(&self) -> Option<&str> {
        self.failure_message.as_deref()
    }

    fn description(&self) -> String {
        format!(
            "{} {}{}{}",
            P::VERB,
            symbols(&self.events),
            when_qualifier(&self.options),
            on_qualifier(&self.options)
        )
    }
}
