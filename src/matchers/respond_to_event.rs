//! Capability matcher that skips machine metadata entirely.
//!
//! Works on anything implementing [`Capabilities`]; wrap a [`Subject`] with
//! [`capabilities`] to query it this way.
//!
//! [`Subject`]: crate::core::Subject
//! [`capabilities`]: crate::core::capabilities

use crate::core::Capabilities;
use crate::matchers::options::{collect_items, symbols};
use crate::matchers::{MatchReport, Matcher, UsageError};
use tracing::trace;

/// Every named event's capability query answers true.
pub struct RespondToEventMatcher {
    events: Vec<String>,
    failure_message: Option<String>,
}

impl RespondToEventMatcher {
    pub fn new<I, T>(events: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            events: collect_items(events),
            failure_message: None,
        }
    }
}

impl<C: Capabilities> Matcher<C> for RespondToEventMatcher {
    fn matches(&mut self, subject: &mut C) -> Result<bool, UsageError> {
        self.failure_message = None;
        if self.events.is_empty() {
            return Err(UsageError::NoItems("event"));
        }

        let mut unexposed = Vec::new();
        let mut refused = Vec::new();
        for event in &self.events {
            match subject.can(event) {
                None => unexposed.push(event.as_str()),
                Some(false) => refused.push(event.as_str()),
                Some(true) => {}
            }
        }
        trace!(?unexposed, ?refused, "queried capabilities");

        if !unexposed.is_empty() {
            self.failure_message = Some(format!(
                "Subject does not expose capability queries for events: {}",
                unexposed.join(", ")
            ));
            return Ok(false);
        }
        if refused.is_empty() {
            return Ok(true);
        }

        let state = subject
            .state_hint()
            .map(|value| format!(" in state: {value}"))
            .unwrap_or_default();
        self.failure_message = Some(format!(
            "Expected to be able to respond to: {}{}",
            refused.join(", "),
            state
        ));
        Ok(false)
    }
}

impl MatchReport for RespondToEventMatcher {
    fn failure_message(&self) -> Option<&str> {
        self.failure_message.as_deref()
    }

    fn description(&self) -> String {
        format!("respond to {}", symbols(&self.events))
    }
}

pub fn respond_to_events<I, T>(events: I) -> RespondToEventMatcher
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    RespondToEventMatcher::new(events)
}

pub fn respond_to_event(event: impl Into<String>) -> RespondToEventMatcher {
    respond_to_events([event.into()])
}
