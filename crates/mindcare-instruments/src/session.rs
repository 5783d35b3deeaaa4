//! One respondent's linear pass through one instrument.
//!
//! `Session` is a value: every transition returns a new session and leaves
//! the receiver untouched, so a rejected answer never partially applies.

use std::sync::Arc;

use serde::Serialize;

use crate::error::InstrumentError;
use crate::scoring::AnswerValue;
use crate::Instrument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    InProgress { current_index: usize },
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    instrument: Arc<Instrument>,
    answers: Vec<AnswerValue>,
}

impl Session {
    pub(crate) fn start(instrument: Arc<Instrument>) -> Self {
        Session {
            instrument,
            answers: Vec::new(),
        }
    }

    pub fn instrument(&self) -> &Instrument {
        &self.instrument
    }

    pub fn answers(&self) -> &[AnswerValue] {
        &self.answers
    }

    /// Index of the next unanswered question. Always equals `answers().len()`.
    pub fn current_index(&self) -> usize {
        self.answers.len()
    }

    pub fn is_complete(&self) -> bool {
        self.current_index() == self.instrument.question_count()
    }

    pub fn state(&self) -> SessionState {
        if self.is_complete() {
            SessionState::Completed
        } else {
            SessionState::InProgress {
                current_index: self.current_index(),
            }
        }
    }

    /// The only question that may be answered next.
    pub fn current_question(&self) -> Option<&str> {
        self.instrument
            .questions()
            .get(self.current_index())
            .map(String::as_str)
    }

    pub fn progress_percent(&self) -> u32 {
        crate::scoring::percentage(
            self.current_index() as u32,
            self.instrument.question_count() as u32,
        )
    }

    /// Answer the current question.
    pub fn answer(&self, value: u8) -> Result<Session, InstrumentError> {
        let value = AnswerValue::new(value)?;
        if self.is_complete() {
            return Err(InstrumentError::Completed);
        }

        let mut next = self.clone();
        next.answers.push(value);
        Ok(next)
    }

    /// Discard all answers and return to the first question.
    pub fn reset(&self) -> Session {
        Session::start(Arc::clone(&self.instrument))
    }
}
