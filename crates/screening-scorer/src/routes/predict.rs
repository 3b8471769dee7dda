use axum::Json;
use axum::extract::rejection::JsonRejection;

use screening_core::models::scoring::{ScoringRequest, ScoringResponse};

use crate::error::ApiError;
use crate::scoring::Scores;

pub async fn predict(
    payload: Result<Json<ScoringRequest>, JsonRejection>,
) -> Result<Json<ScoringResponse>, ApiError> {
    let Json(request) = payload?;
    let scores = Scores::from_request(&request);
    tracing::info!(
        faq = scores.faq,
        npi = scores.npi,
        gds = scores.gds,
        cdr = scores.cdr,
        likely = scores.is_likely(),
        "scored assessment"
    );

    Ok(Json(ScoringResponse {
        result: scores.summary(),
    }))
}
