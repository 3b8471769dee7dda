//! Completeness predicates.
//!
//! The single source of truth for "is this question answered": it gates the
//! Next and Submit controls and drives the progress figure. Incompleteness is
//! never reported as an error.

use screening_core::models::answer::{Answer, AnswerSet, AxisPair};
use screening_core::models::instrument::AnswerShape;

use crate::Instrument;

/// Whether `answer` counts as answered for a question of `shape`.
pub fn is_answered(shape: AnswerShape, answer: Option<&Answer>) -> bool {
    match shape {
        AnswerShape::Scalar | AnswerShape::ScalarMapped => answer
            .and_then(Answer::as_scalar)
            .is_some_and(|value| !value.is_empty()),
        AnswerShape::DualAxis => answer
            .and_then(Answer::as_pair)
            .is_some_and(AxisPair::is_complete),
    }
}

/// Whether the question at `index` of `instrument` is answered in `answers`.
/// Out-of-range indices are never answered.
pub fn is_question_answered<I: Instrument + ?Sized>(
    instrument: &I,
    answers: &AnswerSet,
    index: usize,
) -> bool {
    instrument
        .questions()
        .get(index)
        .is_some_and(|q| is_answered(instrument.shape(), answers.get(&q.key)))
}

pub fn answered_count<I: Instrument + ?Sized>(instrument: &I, answers: &AnswerSet) -> usize {
    instrument
        .questions()
        .iter()
        .filter(|q| is_answered(instrument.shape(), answers.get(&q.key)))
        .count()
}

/// Logical AND of the per-question predicate over the whole instrument.
pub fn is_complete<I: Instrument + ?Sized>(instrument: &I, answers: &AnswerSet) -> bool {
    instrument
        .questions()
        .iter()
        .all(|q| is_answered(instrument.shape(), answers.get(&q.key)))
}
