use super::{describe_with_qualifiers, StateMatcher, StatePredicate};
use crate::core::Subject;
use crate::introspector::Introspector;
use crate::matchers::MatchOptions;

/// None of the named states is declared on the machine.
pub struct Lack;

pub type RejectStateMatcher = StateMatcher<Lack>;

impl StatePredicate for Lack {
    const NAME: &'static str = "reject_state";
    const ALLOWED: &'static [&'static str] = &["on", "when"];

    fn check<S: Subject>(
        states: &[String],
        _options: &MatchOptions,
        introspector: &Introspector<'_, S>,
    ) -> Option<String> {
        let (defined, _) = introspector.classify_states(states);
        if defined.is_empty() {
            return None;
        }
        Some(format!(
            "Did not expect {} to allow states: {}",
            introspector.attribute(),
            defined.join(", ")
        ))
    }

    fn describe(states: &[String], options: &MatchOptions) -> String {
        format!("not have {}", describe_with_qualifiers(states, "", options))
    }
}

pub fn reject_states<I, T>(states: I) -> RejectStateMatcher
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    StateMatcher::new(states)
}

pub fn reject_state(state: impl Into<String>) -> RejectStateMatcher {
    reject_states([state.into()])
}
