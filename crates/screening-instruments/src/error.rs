use thiserror::Error;

use screening_core::models::instrument::{AnswerShape, Axis, InstrumentId};

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown question '{key}' for instrument '{instrument}'")]
    UnknownQuestion { instrument: InstrumentId, key: String },

    #[error("'{value}' is not an option for {instrument} {key}")]
    InvalidOption {
        instrument: InstrumentId,
        key: String,
        axis: Option<Axis>,
        value: String,
    },

    #[error("{instrument} expects {expected:?} answers")]
    ShapeMismatch {
        instrument: InstrumentId,
        expected: AnswerShape,
    },
}
