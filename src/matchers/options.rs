//! The options bag every matcher accepts and the helpers that normalize
//! entry-point arguments.

use crate::core::StateValue;
use crate::matchers::error::{OptionsError, UsageError};
use serde::{Deserialize, Serialize};

/// Named options attached after the positional items of an assertion.
///
/// Options never carry over between matchers: each matcher owns its bag.
///
/// # Example
///
/// ```rust
/// use machine_matchers::MatchOptions;
///
/// let options = MatchOptions::from_json(r#"{"on": "alarm_state", "value": 1}"#).unwrap();
///
/// assert_eq!(options.on.as_deref(), Some("alarm_state"));
/// assert!(options.when.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchOptions {
    /// Attribute of the machine to query; the default machine if absent.
    #[serde(default)]
    pub on: Option<String>,

    /// State to force the subject into before evaluating.
    #[serde(default)]
    pub when: Option<String>,

    /// Expected raw value of a single asserted state.
    #[serde(default)]
    pub value: Option<StateValue>,

    /// Required target state of a transition assertion.
    #[serde(default)]
    pub to_state: Option<String>,

    /// Event a transition assertion fires.
    #[serde(default)]
    pub on_event: Option<String>,
}

impl MatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an options bag from JSON. Unknown keys are rejected.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Fail if any option outside `allowed` is set.
    pub(crate) fn ensure_only(
        &self,
        allowed: &[&'static str],
        matcher: &'static str,
    ) -> Result<(), UsageError> {
        let set = [
            ("on", self.on.is_some()),
            ("when", self.when.is_some()),
            ("value", self.value.is_some()),
            ("to_state", self.to_state.is_some()),
            ("on_event", self.on_event.is_some()),
        ];
        match set
            .iter()
            .find(|(name, present)| *present && !allowed.contains(name))
        {
            Some(&(option, _)) => Err(UsageError::UnsupportedOption { option, matcher }),
            None => Ok(()),
        }
    }
}

/// Collect entry-point items into an ordered list.
pub(crate) fn collect_items<I, T>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

/// Render names the way descriptions show them: `:a, :b`.
pub(crate) fn symbols<T: AsRef<str>>(names: &[T]) -> String {
    names
        .iter()
        .map(|n| format!(":{}", n.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn when_qualifier(options: &MatchOptions) -> String {
    options
        .when
        .as_ref()
        .map(|w| format!(" when :{w}"))
        .unwrap_or_default()
}

pub(crate) fn on_qualifier(options: &MatchOptions) -> String {
    options
        .on
        .as_ref()
        .map(|m| format!(" on :{m}"))
        .unwrap_or_default()
}
