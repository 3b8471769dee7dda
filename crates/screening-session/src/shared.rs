use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::assessment::Assessment;
use crate::client::ScoringClient;

/// What a call to [`SharedAssessment::predict`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictOutcome {
    /// The service answered; the text is now the session result.
    Ready(String),
    /// The request failed. The session is unchanged apart from the recorded
    /// error and predict is available again.
    Failed(String),
    /// Nothing was sent: prediction not allowed yet, already in flight, or
    /// already done.
    Skipped,
}

/// An [`Assessment`] shared between the UI and the task running the
/// scoring request.
#[derive(Clone, Default)]
pub struct SharedAssessment {
    inner: Arc<Mutex<Assessment>>,
}

impl SharedAssessment {
    pub fn new(assessment: Assessment) -> Self {
        Self {
            inner: Arc::new(Mutex::new(assessment)),
        }
    }

    pub async fn lock(&self) -> MutexGuard<'_, Assessment> {
        self.inner.lock().await
    }

    /// Request a prediction, at most one at a time.
    ///
    /// The lock is held only to claim and release the pending guard, never
    /// across the network call, so the UI stays responsive while waiting.
    pub async fn predict(&self, client: &dyn ScoringClient) -> PredictOutcome {
        let request = {
            let mut assessment = self.inner.lock().await;
            match assessment.begin_prediction() {
                Some(request) => request,
                None => return PredictOutcome::Skipped,
            }
        };

        let outcome = client.predict(&request).await;

        let reported = match &outcome {
            Ok(response) => PredictOutcome::Ready(response.result.clone()),
            Err(e) => PredictOutcome::Failed(e.to_string()),
        };
        self.inner.lock().await.finish_prediction(outcome);
        reported
    }
}
