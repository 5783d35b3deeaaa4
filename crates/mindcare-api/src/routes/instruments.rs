use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use mindcare_instruments::scoring::{AnswerOption, ScoreBand, ANSWER_SCALE, QUESTION_PROMPT};
use mindcare_instruments::{CategoryGroup, InstrumentSummary};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct InstrumentDetail {
    id: String,
    title: String,
    category: String,
    max_score: u32,
    prompt: &'static str,
    questions: Vec<String>,
    answer_scale: &'static [AnswerOption],
    bands: Vec<ScoreBand>,
}

pub async fn list_instruments(State(state): State<AppState>) -> Json<Vec<InstrumentSummary>> {
    Json(state.catalog.list())
}

pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<CategoryGroup>> {
    Json(state.catalog.by_category())
}

pub async fn get_instrument_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = state.catalog.get(&id)?;

    Ok(Json(InstrumentDetail {
        id: instrument.id().to_string(),
        title: instrument.title().to_string(),
        category: instrument.category().to_string(),
        max_score: instrument.max_score(),
        prompt: QUESTION_PROMPT,
        questions: instrument.questions().to_vec(),
        answer_scale: &ANSWER_SCALE,
        bands: instrument.bands().to_vec(),
    }))
}
