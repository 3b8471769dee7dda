use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("unknown axis: {0}")]
    UnknownAxis(String),
}
