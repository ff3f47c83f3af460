use crate::core::Subject;
use crate::matchers::options::{collect_items, on_qualifier, symbols, when_qualifier};
use crate::matchers::{introspect, MatchOptions, MatchReport, Matcher, UsageError};
use tracing::trace;

const NAME: &str = "transition_from";

/// Firing `on_event` from every listed state lands in `to_state`.
///
/// From-states are tried in order and evaluation stops at the first one
/// that fails, whether by a usage error or a blocked transition. A `when`
/// state is entered once before the first from-state.
pub struct TransitionFromMatcher {
    from_states: Vec<String>,
    options: MatchOptions,
    failure_message: Option<String>,
}

impl TransitionFromMatcher {
    pub fn new<I, T>(from_states: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            from_states: collect_items(from_states),
            options: MatchOptions::default(),
            failure_message: None,
        }
    }

    pub fn on(mut self, attribute: impl Into<String>) -> Self {
        self.options.on = Some(attribute.into());
        self
    }

    pub fn when(mut self, state: impl Into<String>) -> Self {
        self.options.when = Some(state.into());
        self
    }

    pub fn to_state(mut self, state: impl Into<String>) -> Self {
        self.options.to_state = Some(state.into());
        self
    }

    pub fn on_event(mut self, event: impl Into<String>) -> Self {
        self.options.on_event = Some(event.into());
        self
    }

    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the required `(event, to_state)` pair.
    fn validate(&self) -> Result<(String, String), UsageError> {
        if self.from_states.is_empty() {
            return Err(UsageError::NoItems("from state"));
        }
        self.options.ensure_only(&["on", "when", "to_state", "on_event"], NAME)?;
        let event = self
            .options
            .on_event
            .clone()
            .ok_or(UsageError::MissingOption("on_event"))?;
        let to_state = self
            .options
            .to_state
            .clone()
            .ok_or(UsageError::MissingOption("to_state"))?;
        Ok((event, to_state))
    }
}

impl<S: Subject> Matcher<S> for TransitionFromMatcher {
    fn matches(&mut self, subject: &mut S) -> Result<bool, UsageError> {
        self.failure_message = None;
        let (event, to_state) = self.validate()?;

        let mut introspector = introspect(subject, &self.options)?;
        for from in &self.from_states {
            introspector.enter_state(from)?;
            introspector.require_event(&event)?;
            let to = introspector.require_state(&to_state)?;

            if !introspector.valid_transition(&event, to) {
                trace!(from = %from, event = %event, to = %to_state, "transition blocked");
                let message = format!(
                    "Expected to be able to transition state from: {} to: {}, on_event: {}",
                    from,
                    to.value(),
                    event
                );
                self.failure_message = Some(message);
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl MatchReport for TransitionFromMatcher {
    fn failure_message(&self) -> Option<&str> {
        self.failure_message.as_deref()
    }

    fn description(&self) -> String {
        let symbol = |name: &Option<String>| {
            name.as_ref()
                .map(|n| format!(":{n}"))
                .unwrap_or_else(|| "nil".to_string())
        };
        format!(
            "transition state to {} from {} on event {}{}{}",
            symbol(&self.options.to_state),
            symbols(&self.from_states),
            symbol(&self.options.on_event),
            when_qualifier(&self.options),
            on_qualifier(&self.options)
        )
    }
}

pub fn transitions_from<I, T>(from_states: I) -> TransitionFromMatcher
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    TransitionFromMatcher::new(from_states)
}

pub fn transition_from(from_state: impl Into<String>) -> TransitionFromMatcher {
    transitions_from([from_state.into()])
}
