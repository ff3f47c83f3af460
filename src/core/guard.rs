//! Guard predicates evaluated against a subject.
//!
//! Guards decide whether an event's transition rule applies, given the
//! subject's current data. They are opaque to the matchers: the introspector
//! only ever sees the combined answer through `Machine::can_fire`.

use std::fmt;
use std::sync::Arc;

/// Pure predicate over a subject that gates a transition rule.
///
/// # Example
///
/// ```rust
/// use machine_matchers::core::Guard;
///
/// struct Vehicle {
///     passed_inspection: bool,
/// }
///
/// let failed_inspection = Guard::new(|v: &Vehicle| !v.passed_inspection);
///
/// assert!(failed_inspection.check(&Vehicle { passed_inspection: false }));
/// assert!(!failed_inspection.check(&Vehicle { passed_inspection: true }));
/// ```
pub struct Guard<S> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
}

impl<S> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard allows the transition for this subject.
    pub fn check(&self, subject: &S) -> bool {
        (self.predicate)(subject)
    }

    /// Guard that passes exactly when this one fails.
    pub fn negate(&self) -> Self
    where
        S: 'static,
    {
        let inner = Arc::clone(&self.predicate);
        Guard {
            predicate: Arc::new(move |subject: &S| !inner(subject)),
        }
    }
}

impl<S> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<S> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
