use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the four screening instruments administered in a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum InstrumentId {
    /// Functional Activities Questionnaire.
    Faq,
    /// Neuropsychiatric Inventory.
    Npi,
    /// Geriatric Depression Scale.
    Gds,
    /// Clinical Dementia Rating.
    Cdr,
}

impl InstrumentId {
    /// Every instrument, in presentation order.
    pub const ALL: [InstrumentId; 4] = [
        InstrumentId::Faq,
        InstrumentId::Npi,
        InstrumentId::Gds,
        InstrumentId::Cdr,
    ];

    /// Wire identifier, also used as the top-level key of the scoring request.
    pub fn as_str(self) -> &'static str {
        match self {
            InstrumentId::Faq => "FAQ",
            InstrumentId::Npi => "NPI",
            InstrumentId::Gds => "GDS",
            InstrumentId::Cdr => "CDR",
        }
    }

    /// The structural pattern every question of this instrument is answered with.
    pub fn shape(self) -> AnswerShape {
        match self {
            InstrumentId::Faq | InstrumentId::Gds => AnswerShape::Scalar,
            InstrumentId::Npi => AnswerShape::DualAxis,
            InstrumentId::Cdr => AnswerShape::ScalarMapped,
        }
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstrumentId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InstrumentId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownInstrument(s.to_string()))
    }
}

/// How a question's answer is structured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerShape {
    /// One value from a closed list of string-encoded ordinals, keyed `Q<n>`.
    Scalar,
    /// Two independent values (frequency and severity) per domain.
    DualAxis,
    /// One labeled option per domain, mapped onto a non-uniform clinical scale.
    ScalarMapped,
}

impl AnswerShape {
    /// Whether questions of this shape are keyed by domain name rather than `Q<n>`.
    pub fn keyed_by_domain(self) -> bool {
        !matches!(self, AnswerShape::Scalar)
    }
}

/// One half of a dual-axis answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Axis {
    Frequency,
    Severity,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Frequency, Axis::Severity];

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Frequency => "frequency",
            Axis::Severity => "severity",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "frequency" | "freq" => Ok(Axis::Frequency),
            "severity" | "sev" => Ok(Axis::Severity),
            _ => Err(CoreError::UnknownAxis(s.to_string())),
        }
    }
}
