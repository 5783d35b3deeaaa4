use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstrumentError {
    #[error("instrument not found: {0}")]
    NotFound(String),

    #[error("invalid answer {0}: expected a value from 0 to 3")]
    InvalidAnswer(u8),

    #[error("session not complete: {answered} of {required} questions answered")]
    NotComplete { answered: usize, required: usize },

    #[error("session already complete")]
    Completed,

    #[error("score {score} is outside the band table of '{instrument_id}'")]
    ScoreOutOfRange { instrument_id: String, score: u32 },

    #[error("invalid definition for instrument '{instrument_id}': {reason}")]
    InvalidDefinition {
        instrument_id: String,
        reason: String,
    },
}
