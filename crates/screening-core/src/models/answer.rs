use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::instrument::Axis;

/// A recorded answer to one question or domain.
///
/// Serializes as a bare string for scalar shapes and as
/// `{ "frequency": "..", "severity": ".." }` for dual-axis domains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum Answer {
    Scalar(String),
    Pair(AxisPair),
}

impl Answer {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Answer::Scalar(value) => Some(value),
            Answer::Pair(_) => None,
        }
    }

    pub fn as_pair(&self) -> Option<&AxisPair> {
        match self {
            Answer::Pair(pair) => Some(pair),
            Answer::Scalar(_) => None,
        }
    }
}

/// Frequency and severity sub-answers of a dual-axis domain. Either half may
/// still be missing while the user is answering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AxisPair {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

impl AxisPair {
    pub fn get(&self, axis: Axis) -> Option<&str> {
        match axis {
            Axis::Frequency => self.frequency.as_deref(),
            Axis::Severity => self.severity.as_deref(),
        }
    }

    pub fn set(&mut self, axis: Axis, value: impl Into<String>) {
        let slot = match axis {
            Axis::Frequency => &mut self.frequency,
            Axis::Severity => &mut self.severity,
        };
        *slot = Some(value.into());
    }

    /// Both halves present and non-empty.
    pub fn is_complete(&self) -> bool {
        Axis::ALL
            .iter()
            .all(|axis| self.get(*axis).is_some_and(|v| !v.is_empty()))
    }
}

/// Answers for a single instrument, keyed by `Q<n>` or by domain name.
/// A missing key means the question is unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct AnswerSet(BTreeMap<String, Answer>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Answer> {
        self.0.get(key)
    }

    /// Insert or overwrite a scalar answer.
    pub fn set_scalar(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), Answer::Scalar(value.into()));
    }

    /// Set one axis of a domain answer, leaving the other axis untouched.
    /// A scalar previously stored under the same key is replaced.
    pub fn set_axis(&mut self, key: impl Into<String>, axis: Axis, value: impl Into<String>) {
        let entry = self
            .0
            .entry(key.into())
            .or_insert_with(|| Answer::Pair(AxisPair::default()));
        if let Answer::Scalar(_) = entry {
            *entry = Answer::Pair(AxisPair::default());
        }
        if let Answer::Pair(pair) = entry {
            pair.set(axis, value);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, Answer)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (String, Answer)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
