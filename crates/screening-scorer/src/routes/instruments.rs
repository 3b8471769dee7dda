use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use screening_core::models::instrument::{AnswerShape, InstrumentId};
use screening_instruments::questions::QuestionDescriptor;
use screening_instruments::{all_instruments, instrument};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: InstrumentId,
    name: String,
    shape: AnswerShape,
    question_count: usize,
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    id: InstrumentId,
    name: String,
    intro: String,
    shape: AnswerShape,
    questions: Vec<QuestionDescriptor>,
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id(),
            name: i.name().to_string(),
            shape: i.shape(),
            question_count: i.question_count(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let id: InstrumentId = id
        .parse()
        .map_err(|_| ApiError::NotFound(format!("instrument not found: {id}")))?;
    let definition = instrument(id);

    Ok(Json(InstrumentDetail {
        id,
        name: definition.name().to_string(),
        intro: definition.intro().to_string(),
        shape: definition.shape(),
        questions: definition.questions().to_vec(),
    }))
}
