use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use screening_core::models::scoring::ScoringResponse;

use crate::error::ScoringError;

/// The assessment text returned by the scoring service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub text: String,
    pub received_at: jiff::Timestamp,
}

/// Pending / result / last-failure state of the scoring request.
///
/// `pending` is the single-flight guard: while it is set, further requests
/// are refused rather than queued.
#[derive(Debug, Clone, Default)]
pub struct ResultRequester {
    pending: bool,
    result: Option<Prediction>,
    last_error: Option<String>,
}

impl ResultRequester {
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn result(&self) -> Option<&Prediction> {
        self.result.as_ref()
    }

    /// Message of the most recent failed request, cleared when the next one begins.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Claim the guard. Returns `false` if a request is already in flight or
    /// a result has already been received.
    pub fn try_begin(&mut self) -> bool {
        if self.pending || self.result.is_some() {
            return false;
        }
        self.pending = true;
        self.last_error = None;
        true
    }

    /// Record the outcome and release the guard.
    pub fn finish(&mut self, outcome: Result<ScoringResponse, ScoringError>) {
        if !self.pending {
            warn!("ignoring scoring outcome with no request in flight");
            return;
        }
        self.pending = false;

        match outcome {
            Ok(response) => {
                info!(len = response.result.len(), "prediction received");
                self.result = Some(Prediction {
                    text: response.result,
                    received_at: jiff::Timestamp::now(),
                });
            }
            Err(e) => {
                warn!(error = %e, "prediction request failed");
                self.last_error = Some(e.to_string());
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
