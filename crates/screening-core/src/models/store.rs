use serde::{Deserialize, Serialize};

use super::answer::{Answer, AnswerSet};
use super::instrument::{Axis, InstrumentId};

/// One [`AnswerSet`] per instrument.
///
/// Writes are unchecked here: canonical-value and shape checks live with the
/// instrument catalog, and the session only calls into the store after they
/// pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerStore {
    #[serde(rename = "FAQ")]
    faq: AnswerSet,
    #[serde(rename = "NPI")]
    npi: AnswerSet,
    #[serde(rename = "GDS")]
    gds: AnswerSet,
    #[serde(rename = "CDR")]
    cdr: AnswerSet,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answers(&self, instrument: InstrumentId) -> &AnswerSet {
        match instrument {
            InstrumentId::Faq => &self.faq,
            InstrumentId::Npi => &self.npi,
            InstrumentId::Gds => &self.gds,
            InstrumentId::Cdr => &self.cdr,
        }
    }

    fn answers_mut(&mut self, instrument: InstrumentId) -> &mut AnswerSet {
        match instrument {
            InstrumentId::Faq => &mut self.faq,
            InstrumentId::Npi => &mut self.npi,
            InstrumentId::Gds => &mut self.gds,
            InstrumentId::Cdr => &mut self.cdr,
        }
    }

    pub fn set_scalar(
        &mut self,
        instrument: InstrumentId,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.answers_mut(instrument).set_scalar(key, value);
    }

    pub fn set_dual_axis(
        &mut self,
        instrument: InstrumentId,
        key: impl Into<String>,
        axis: Axis,
        value: impl Into<String>,
    ) {
        self.answers_mut(instrument).set_axis(key, axis, value);
    }

    pub fn get(&self, instrument: InstrumentId, key: &str) -> Option<&Answer> {
        self.answers(instrument).get(key)
    }

    pub fn clear_instrument(&mut self, instrument: InstrumentId) {
        self.answers_mut(instrument).clear();
    }

    pub fn clear_all(&mut self) {
        for instrument in InstrumentId::ALL {
            self.clear_instrument(instrument);
        }
    }

    pub fn is_empty(&self) -> bool {
        InstrumentId::ALL
            .iter()
            .all(|id| self.answers(*id).is_empty())
    }
}
