use serde::{Deserialize, Serialize};
use ts_rs::TS;

use screening_core::models::instrument::Axis;

/// A labeled choice and the canonical value stored when it is picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub label: String,
    pub value: String,
}

impl AnswerOption {
    /// Build an ordered option list from `(label, value)` pairs.
    pub fn list(pairs: &[(&str, &str)]) -> Vec<AnswerOption> {
        pairs
            .iter()
            .map(|(label, value)| AnswerOption {
                label: label.to_string(),
                value: value.to_string(),
            })
            .collect()
    }
}

/// The options offered for a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum OptionSet {
    /// One closed list; the answer is a single value.
    Single { options: Vec<AnswerOption> },
    /// Two independent lists, both of which must be answered.
    Axes {
        frequency: Vec<AnswerOption>,
        severity: Vec<AnswerOption>,
    },
}

/// One question (or domain) of an instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionDescriptor {
    /// Answer key: `Q<n>` for scalar instruments, the domain name otherwise.
    pub key: String,
    pub prompt: String,
    pub options: OptionSet,
}

impl QuestionDescriptor {
    /// The options for `axis`, or the single list when `axis` is `None`.
    /// Returns `None` when the axis does not match the option set.
    pub fn options_for(&self, axis: Option<Axis>) -> Option<&[AnswerOption]> {
        match (&self.options, axis) {
            (OptionSet::Single { options }, None) => Some(options),
            (OptionSet::Axes { frequency, .. }, Some(Axis::Frequency)) => Some(frequency),
            (OptionSet::Axes { severity, .. }, Some(Axis::Severity)) => Some(severity),
            _ => None,
        }
    }

    /// Whether `value` is one of the canonical values offered for `axis`.
    pub fn accepts(&self, axis: Option<Axis>, value: &str) -> bool {
        self.options_for(axis)
            .is_some_and(|options| options.iter().any(|o| o.value == value))
    }

    /// Display label of a stored canonical value.
    pub fn label_for(&self, axis: Option<Axis>, value: &str) -> Option<&str> {
        self.options_for(axis)?
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }
}
