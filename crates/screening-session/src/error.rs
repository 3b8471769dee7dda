use thiserror::Error;

use screening_instruments::error::InstrumentError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no question is active: select and start an instrument first")]
    NoActiveQuestion,

    #[error("invalid answer: {0}")]
    InvalidAnswer(#[from] InstrumentError),
}

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("scoring request failed: {0}")]
    Transport(String),

    #[error("scoring service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed scoring response: {0}")]
    MalformedResponse(String),

    #[error("scoring client config error: {0}")]
    Config(String),
}
