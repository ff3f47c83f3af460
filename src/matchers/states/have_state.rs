use super::{describe_with_qualifiers, StateMatcher, StatePredicate};
use crate::core::Subject;
use crate::introspector::Introspector;
use crate::matchers::MatchOptions;

/// Every named state is declared; with `value`, the single state's declared
/// value must also match.
pub struct Have;

pub type HaveStateMatcher = StateMatcher<Have>;

impl StatePredicate for Have {
    const NAME: &'static str = "have_state";
    const ALLOWED: &'static [&'static str] = &["on", "when", "value"];

    fn check<S: Subject>(
        states: &[String],
        options: &MatchOptions,
        introspector: &Introspector<'_, S>,
    ) -> Option<String> {
        let (_, undefined) = introspector.classify_states(states);
        if !undefined.is_empty() {
            return Some(format!(
                "Expected {} to allow state: {}",
                introspector.attribute(),
                undefined.join(", ")
            ));
        }

        let expected = options.value.as_ref()?;
        let name = states.first()?;
        let actual = introspector.state(name)?.value();
        (actual != expected)
            .then(|| format!("Expected {name} to have value {expected} but was {actual}"))
    }

    fn describe(states: &[String], options: &MatchOptions) -> String {
        let value = options
            .value
            .as_ref()
            .map(|v| format!(" == {}", v.inspect()))
            .unwrap_or_default();
        format!("have {}", describe_with_qualifiers(states, &value, options))
    }
}

pub fn have_states<I, T>(states: I) -> HaveStateMatcher
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    StateMatcher::new(states)
}

pub fn have_state(state: impl Into<String>) -> HaveStateMatcher {
    have_states([state.into()])
}
