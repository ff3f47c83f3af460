use super::{EventMatcher, EventPredicate};
use crate::core::Subject;
use crate::introspector::Introspector;

/// None of the named events is performable right now.
///
/// Undefined events still fail: rejecting a typo would pass vacuously.
pub struct Reject;

pub type RejectEventMatcher = EventMatcher<Reject>;

impl EventPredicate for Reject {
    const VERB: &'static str = "reject";

    fn check<S: Subject>(events: &[String], introspector: &Introspector<'_, S>) -> Option<String> {
        let (valid, _) = introspector.classify_event_validity(events);
        if valid.is_empty() {
            return None;
        }
        Some(format!(
            "Did not expect to be able to handle events: {} in state: {}",
            valid.join(", "),
            introspector.current_value_text()
        ))
    }
}

pub fn reject_events<I, T>(events: I) -> RejectEventMatcher
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    EventMatcher::new(events)
}

pub fn reject_event(event: impl Into<String>) -> RejectEventMatcher {
    reject_events([event.into()])
}
