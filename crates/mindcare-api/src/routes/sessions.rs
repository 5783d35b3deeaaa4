use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mindcare_instruments::{score, AssessmentOutcome, Session};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct StartSession {
    instrument_id: String,
}

#[derive(Deserialize)]
pub struct SubmitAnswer {
    value: u8,
}

/// What the presentation layer renders for an in-flight session.
#[derive(Debug, Serialize)]
pub struct SessionView {
    session_id: Uuid,
    instrument_id: String,
    current_index: usize,
    question_count: usize,
    current_question: Option<String>,
    progress_percent: u32,
    completed: bool,
}

impl SessionView {
    fn new(session_id: Uuid, session: &Session) -> Self {
        SessionView {
            session_id,
            instrument_id: session.instrument().id().to_string(),
            current_index: session.current_index(),
            question_count: session.instrument().question_count(),
            current_question: session.current_question().map(str::to_string),
            progress_percent: session.progress_percent(),
            completed: session.is_complete(),
        }
    }
}

fn session_not_found(id: Uuid) -> ApiError {
    ApiError::NotFound(format!("session not found: {id}"))
}

pub async fn start_session(
    State(state): State<AppState>,
    Json(req): Json<StartSession>,
) -> Result<Json<SessionView>, ApiError> {
    let session = state.catalog.start_session(&req.instrument_id)?;

    let mut sessions = state.sessions.lock().await;
    if sessions.len() >= state.max_sessions {
        tracing::warn!(max_sessions = state.max_sessions, "session limit reached");
        return Err(ApiError::Conflict("too many active sessions".to_string()));
    }

    let id = Uuid::new_v4();
    let view = SessionView::new(id, &session);
    sessions.insert(id, session);

    tracing::info!(session_id = %id, instrument_id = %req.instrument_id, "session started");
    Ok(Json(view))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    let sessions = state.sessions.lock().await;
    let session = sessions.get(&id).ok_or_else(|| session_not_found(id))?;
    Ok(Json(SessionView::new(id, session)))
}

pub async fn submit_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SubmitAnswer>,
) -> Result<Json<SessionView>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let session = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;

    let next = session.answer(req.value).inspect_err(|e| {
        tracing::debug!(session_id = %id, error = %e, "answer rejected");
    })?;
    *session = next;

    if session.is_complete() {
        tracing::info!(session_id = %id, "session completed");
    }
    Ok(Json(SessionView::new(id, session)))
}

pub async fn reset_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let session = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
    *session = session.reset();
    Ok(Json(SessionView::new(id, session)))
}

pub async fn get_result(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentOutcome>, ApiError> {
    let sessions = state.sessions.lock().await;
    let session = sessions.get(&id).ok_or_else(|| session_not_found(id))?;
    Ok(Json(score(session)?))
}

pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    sessions.remove(&id).ok_or_else(|| session_not_found(id))?;
    Ok(Json(()))
}
