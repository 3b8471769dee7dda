//! screening-instruments
//!
//! The read-only instrument catalog. Pure data: the question lists, answer
//! options and canonical values of the four screening instruments, plus the
//! completeness rules applied to them.

pub mod error;
pub mod instruments;
pub mod questions;
pub mod validator;

use screening_core::models::answer::AnswerSet;
use screening_core::models::instrument::{AnswerShape, Axis, InstrumentId};

use error::InstrumentError;
use questions::QuestionDescriptor;

/// Introductory text shown before any instrument is started.
pub const INTRO_TEXT: &str = "This test will help assess cognitive function and behavior \
patterns related to Alzheimer's disease. Please answer all questions as accurately as \
possible based on observations and experiences.";

/// Trait implemented by each screening instrument.
pub trait Instrument: Send + Sync {
    fn id(&self) -> InstrumentId;

    /// Human-readable name (e.g., "Geriatric Depression Scale").
    fn name(&self) -> &str;

    /// Ordered questions, or domains for domain-keyed instruments.
    fn questions(&self) -> &[QuestionDescriptor];

    fn intro(&self) -> &str {
        INTRO_TEXT
    }

    fn shape(&self) -> AnswerShape {
        self.id().shape()
    }

    fn question_count(&self) -> usize {
        self.questions().len()
    }

    fn question(&self, key: &str) -> Option<&QuestionDescriptor> {
        self.questions().iter().find(|q| q.key == key)
    }

    fn answered_count(&self, answers: &AnswerSet) -> usize {
        validator::answered_count(self, answers)
    }

    fn is_complete(&self, answers: &AnswerSet) -> bool {
        validator::is_complete(self, answers)
    }

    /// Check that `value` may be written for `key`.
    ///
    /// `axis` must be `Some` for dual-axis instruments and `None` otherwise.
    fn validate_answer(
        &self,
        key: &str,
        axis: Option<Axis>,
        value: &str,
    ) -> Result<&QuestionDescriptor, InstrumentError> {
        let question = self
            .question(key)
            .ok_or_else(|| InstrumentError::UnknownQuestion {
                instrument: self.id(),
                key: key.to_string(),
            })?;

        let expects_axis = self.shape() == AnswerShape::DualAxis;
        if expects_axis != axis.is_some() {
            return Err(InstrumentError::ShapeMismatch {
                instrument: self.id(),
                expected: self.shape(),
            });
        }

        if !question.accepts(axis, value) {
            return Err(InstrumentError::InvalidOption {
                instrument: self.id(),
                key: key.to_string(),
                axis,
                value: value.to_string(),
            });
        }
        Ok(question)
    }
}

/// Look up an instrument. Every identifier has exactly one definition.
pub fn instrument(id: InstrumentId) -> &'static dyn Instrument {
    match id {
        InstrumentId::Faq => &instruments::faq::Faq,
        InstrumentId::Npi => &instruments::npi::Npi,
        InstrumentId::Gds => &instruments::gds::Gds,
        InstrumentId::Cdr => &instruments::cdr::Cdr,
    }
}

/// Return all instruments in presentation order.
pub fn all_instruments() -> Vec<&'static dyn Instrument> {
    InstrumentId::ALL.into_iter().map(instrument).collect()
}

pub fn questions_for(id: InstrumentId) -> &'static [QuestionDescriptor] {
    instrument(id).questions()
}

pub fn answer_shape(id: InstrumentId) -> AnswerShape {
    instrument(id).shape()
}
