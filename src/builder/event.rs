//! Builder for constructing events.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{EventDef, TransitionRule};

/// Builder for an event and its ordered transition rules.
pub struct EventBuilder<S> {
    name: String,
    rules: Vec<TransitionRule<S>>,
}

impl<S: 'static> EventBuilder<S> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Add a rule using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S>) -> Result<Self, BuildError> {
        let rule = builder.build()?;
        self.rules.push(rule);
        Ok(self)
    }

    /// Add a pre-built rule.
    pub fn add_rule(mut self, rule: TransitionRule<S>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn build(self) -> EventDef<S> {
        EventDef::new(self.name, self.rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_keep_declaration_order() {
        let event = EventBuilder::<()>::new("repair")
            .transition(TransitionBuilder::new().from(["stalled"]).to("parked"))
            .unwrap()
            .transition(TransitionBuilder::new().from(["stalled"]).to_same())
            .unwrap()
            .build();

        assert_eq!(event.name(), "repair");
        assert_eq!(event.rules().len(), 2);
        assert!(event.rules()[0].guard.is_none());
    }

    #[test]
    fn invalid_rule_is_rejected() {
        let result = EventBuilder::<()>::new("park").transition(TransitionBuilder::new().to("parked"));

        assert!(matches!(result, Err(BuildError::MissingFromState)));
    }
}
