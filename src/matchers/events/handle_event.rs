use super::{EventMatcher, EventPredicate};
use crate::core::Subject;
use crate::introspector::Introspector;

/// Every named event is defined and performable right now.
pub struct Handle;

pub type HandleEventMatcher = EventMatcher<Handle>;

impl EventPredicate for Handle {
    const VERB: &'static str = "handle";

    fn check<S: Subject>(events: &[String], introspector: &Introspector<'_, S>) -> Option<String> {
        let (_, invalid) = introspector.classify_event_validity(events);
        if invalid.is_empty() {
            return None;
        }
        Some(format!(
            "Expected to be able to handle events: {} in state: {}",
            invalid.join(", "),
            introspector.current_value_text()
        ))
    }
}

pub fn handle_events<I, T>(events: I) -> HandleEventMatcher
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    EventMatcher::new(events)
}

pub fn handle_event(event: impl Into<String>) -> HandleEventMatcher {
    handle_events([event.into()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{from_any, MachineBuilder};
    use crate::core::StateValue;
    use crate::introspector::IntrospectionError;
    use crate::matchers::events::fixtures::{mathy, Calculator};
    use crate::matchers::{MatchReport, Matcher, UsageError};

    #[test]
    fn when_state_must_exist() {
        let mut subject = Calculator::with_machine(MachineBuilder::new("state").initial("mathy"));
        let mut matcher = handle_events(["mathematize"]).when("artsy");

        let result = matcher.matches(&mut subject);

        assert!(matches!(
            result,
            Err(UsageError::Introspection(IntrospectionError::StateNotFound { .. }))
        ));
        assert_eq!(subject.writes, 0);
    }

    #[test]
    fn when_state_is_entered_before_checking() {
        let mut subject = Calculator::with_machine(
            MachineBuilder::new("state")
                .initial("mathy")
                .state("artsy")
                .transition("mathematize", from_any().to_same())
                .unwrap(),
        );
        let mut matcher = handle_event("mathematize").when("artsy");

        assert!(matcher.matches(&mut subject).unwrap());
        assert_eq!(subject.state(), Some(StateValue::from("artsy")));
    }

    #[test]
    fn performable_events_pass_on_named_machine() {
        let mut subject = Calculator::with_machine(
            MachineBuilder::new("mathiness")
                .initial("mathy")
                .transition("mathematize", from_any().to_same())
                .unwrap(),
        );
        let mut matcher = handle_event("mathematize").on("mathiness");

        assert!(matcher.matches(&mut subject).unwrap());
        assert!(matcher.failure_message().is_none());
    }

    #[test]
    fn blocked_events_are_listed_with_current_state() {
        let mut subject = mathy();
        let mut matcher = handle_events(["mathematize", "algebraify", "trigonomalize"]);

        assert!(!matcher.matches(&mut subject).unwrap());
        assert_eq!(
            matcher.failure_message(),
            Some("Expected to be able to handle events: algebraify, trigonomalize in state: mathy")
        );
    }

    #[test]
    fn undefined_events_are_reported_not_raised() {
        let mut subject = mathy();
        let mut matcher = handle_events(["polynomialize", "eulerasterize"]);

        assert!(!matcher.matches(&mut subject).unwrap());
        assert_eq!(
            matcher.failure_message(),
            Some("state_machine: state does not define events: polynomialize, eulerasterize (cannot handle them)")
        );
    }

    #[test]
    fn undefined_events_take_precedence_over_blocked_ones() {
        let mut subject = mathy();
        let mut matcher = handle_events(["algebraify", "polynomialize"]);

        assert!(!matcher.matches(&mut subject).unwrap());
        assert_eq!(
            matcher.failure_message(),
            Some("state_machine: state does not define events: polynomialize (cannot handle them)")
        );
    }

    #[test]
    fn empty_event_list_is_a_usage_error() {
        let mut subject = mathy();
        let mut matcher = handle_events(Vec::<String>::new());

        assert_eq!(
            matcher.matches(&mut subject),
            Err(UsageError::NoItems("event"))
        );
    }

    #[test]
    fn value_option_is_rejected() {
        let mut subject = mathy();
        let options = crate::matchers::MatchOptions {
            value: Some(StateValue::from(1)),
            ..Default::default()
        };
        let mut matcher = handle_event("mathematize").with_options(options);

        assert!(matches!(
            matcher.matches(&mut subject),
            Err(UsageError::UnsupportedOption { option: "value", .. })
        ));
    }

    #[test]
    fn description_lists_events_and_qualifiers() {
        assert_eq!(
            handle_events(["ignite", "park"]).description(),
            "handle :ignite, :park"
        );
        assert_eq!(
            handle_event("enable_alarm").when("off").on("alarm_state").description(),
            "handle :enable_alarm when :off on :alarm_state"
        );
    }
}
