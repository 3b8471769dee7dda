use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::AnswerSet;
use super::instrument::InstrumentId;
use super::store::AnswerStore;

/// Body of the `POST /predict` call to the scoring service.
///
/// All four instrument keys are always present; an instrument without answers
/// is sent as an empty object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringRequest {
    #[serde(rename = "FAQ", default)]
    pub faq: AnswerSet,
    #[serde(rename = "NPI", default)]
    pub npi: AnswerSet,
    #[serde(rename = "GDS", default)]
    pub gds: AnswerSet,
    #[serde(rename = "CDR", default)]
    pub cdr: AnswerSet,
}

impl ScoringRequest {
    pub fn answers(&self, instrument: InstrumentId) -> &AnswerSet {
        match instrument {
            InstrumentId::Faq => &self.faq,
            InstrumentId::Npi => &self.npi,
            InstrumentId::Gds => &self.gds,
            InstrumentId::Cdr => &self.cdr,
        }
    }
}

impl From<&AnswerStore> for ScoringRequest {
    fn from(store: &AnswerStore) -> Self {
        Self {
            faq: store.answers(InstrumentId::Faq).clone(),
            npi: store.answers(InstrumentId::Npi).clone(),
            gds: store.answers(InstrumentId::Gds).clone(),
            cdr: store.answers(InstrumentId::Cdr).clone(),
        }
    }
}

/// Scoring service reply. `result` is free text shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringResponse {
    pub result: String,
}
