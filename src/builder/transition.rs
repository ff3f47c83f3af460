//! Builder for constructing transition rules.

use crate::builder::error::BuildError;
use crate::core::{FromStates, Guard, Target, TransitionRule};

/// Builder for one `from => to` rule with a fluent API.
pub struct TransitionBuilder<S> {
    from: Option<FromStates>,
    to: Option<Target>,
    guard: Option<Guard<S>>,
}

impl<S: 'static> TransitionBuilder<S> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            to: None,
            guard: None,
        }
    }

    /// Start from any of the named states.
    pub fn from<I, T>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.from = Some(FromStates::Only(
            states.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Start from any state.
    pub fn from_any(mut self) -> Self {
        self.from = Some(FromStates::Any);
        self
    }

    /// Start from every state except the named ones.
    pub fn from_all_except<I, T>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.from = Some(FromStates::AllExcept(
            states.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Set the target state.
    pub fn to(mut self, state: impl Into<String>) -> Self {
        self.to = Some(Target::State(state.into()));
        self
    }

    /// Loop back to the current state.
    pub fn to_same(mut self) -> Self {
        self.to = Some(Target::Same);
        self
    }

    /// Add a guard (optional). Combined with any existing guard.
    pub fn guard(mut self, guard: Guard<S>) -> Self {
        self.guard = Some(match self.guard.take() {
            Some(existing) => Guard::new(move |s: &S| existing.check(s) && guard.check(s)),
            None => guard,
        });
        self
    }

    /// Only apply the rule when the predicate holds.
    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        self.guard(Guard::new(predicate))
    }

    /// Only apply the rule when the predicate does not hold.
    pub fn unless<F>(self, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        self.guard(Guard::new(predicate).negate())
    }

    /// Build the rule.
    pub fn build(self) -> Result<TransitionRule<S>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(TransitionRule {
            from,
            to,
            guard: self.guard,
        })
    }
}

impl<S: 'static> Default for TransitionBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
