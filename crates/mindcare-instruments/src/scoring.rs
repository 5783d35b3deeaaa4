use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use mindcare_core::models::assessment::AssessmentRecord;

use crate::error::InstrumentError;
use crate::session::Session;

/// Highest value on the shared frequency scale.
pub const MAX_ANSWER: u8 = 3;

/// Lead-in shown above every question.
pub const QUESTION_PROMPT: &str = "Dalam 2 minggu terakhir, seberapa sering Anda mengalami:";

/// One option on the 0–3 frequency scale.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnswerOption {
    pub value: u8,
    pub label: &'static str,
    pub description: &'static str,
}

pub const ANSWER_SCALE: [AnswerOption; 4] = [
    AnswerOption {
        value: 0,
        label: "Tidak Pernah",
        description: "Tidak pernah mengalami",
    },
    AnswerOption {
        value: 1,
        label: "Kadang-kadang",
        description: "Beberapa hari",
    },
    AnswerOption {
        value: 2,
        label: "Sering",
        description: "Lebih dari setengah hari",
    },
    AnswerOption {
        value: 3,
        label: "Sangat Sering",
        description: "Hampir setiap hari",
    },
];

/// A single answer: 0 = never … 3 = almost always.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(try_from = "u8", into = "u8")]
#[ts(export)]
pub struct AnswerValue(u8);

impl AnswerValue {
    pub fn new(value: u8) -> Result<Self, InstrumentError> {
        if value > MAX_ANSWER {
            return Err(InstrumentError::InvalidAnswer(value));
        }
        Ok(AnswerValue(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for AnswerValue {
    type Error = InstrumentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        AnswerValue::new(value)
    }
}

impl From<AnswerValue> for u8 {
    fn from(value: AnswerValue) -> Self {
        value.0
    }
}

/// Qualitative severity tier, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Minimal,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
    ExtremelySevere,
}

/// A contiguous range of total scores mapped to one label.
///
/// `upper` is the inclusive upper bound; the lower bound is one above the
/// previous band's `upper` (or 0 for the first band). `None` marks the open
/// top tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreBand {
    pub upper: Option<u32>,
    pub label: String,
    pub severity: Severity,
}

impl ScoreBand {
    pub fn upto(upper: u32, label: &str, severity: Severity) -> Self {
        ScoreBand {
            upper: Some(upper),
            label: label.to_string(),
            severity,
        }
    }

    pub fn above(label: &str, severity: Severity) -> Self {
        ScoreBand {
            upper: None,
            label: label.to_string(),
            severity,
        }
    }

    pub fn contains(&self, score: u32) -> bool {
        self.upper.is_none_or(|upper| score <= upper)
    }
}

/// The derived result of a completed session. Never stored by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentOutcome {
    pub instrument_id: String,
    pub total_score: u32,
    pub max_score: u32,
    pub label: String,
    pub severity: Severity,
    /// Display only. Banding always uses `total_score`.
    pub percentage: u32,
}

impl AssessmentOutcome {
    /// Package the outcome for an external store, stamped now.
    pub fn to_record(&self, respondent_id: Uuid) -> AssessmentRecord {
        AssessmentRecord {
            id: Uuid::new_v4(),
            respondent_id,
            instrument_id: self.instrument_id.clone(),
            total_score: self.total_score,
            max_score: self.max_score,
            label: self.label.clone(),
            percentage: self.percentage,
            completed_at: jiff::Timestamp::now(),
        }
    }
}

/// Reduce a completed session to its total, label, and percentage.
pub fn score(session: &Session) -> Result<AssessmentOutcome, InstrumentError> {
    if !session.is_complete() {
        return Err(InstrumentError::NotComplete {
            answered: session.current_index(),
            required: session.instrument().question_count(),
        });
    }

    let instrument = session.instrument();
    let total_score: u32 = session.answers().iter().map(|a| u32::from(a.get())).sum();
    let max_score = instrument.max_score();
    let band = instrument
        .interpret(total_score)
        .ok_or_else(|| InstrumentError::ScoreOutOfRange {
            instrument_id: instrument.id().to_string(),
            score: total_score,
        })?;

    Ok(AssessmentOutcome {
        instrument_id: instrument.id().to_string(),
        total_score,
        max_score,
        label: band.label.clone(),
        severity: band.severity,
        percentage: percentage(total_score, max_score),
    })
}

/// `round(score / max × 100)` in integer arithmetic, halves rounding up.
pub fn percentage(score: u32, max_score: u32) -> u32 {
    if max_score == 0 {
        return 0;
    }
    (score * 200 + max_score) / (max_score * 2)
}
