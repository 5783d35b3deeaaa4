//! mindcare-instruments
//!
//! Psychological self-assessment instruments. Pure data and pure functions —
//! no backend dependency. Defines each questionnaire, the session that walks
//! a respondent through it, and the scorer that bands the total.

pub mod catalog;
pub mod error;
pub mod instruments;
pub mod scoring;
pub mod session;

use serde::Serialize;
use ts_rs::TS;

use error::InstrumentError;
use scoring::{ScoreBand, MAX_ANSWER};

pub use catalog::{Catalog, CategoryGroup, InstrumentSummary};
pub use scoring::{score, AssessmentOutcome};
pub use session::{Session, SessionState};

/// An immutable questionnaire definition.
///
/// Question order is significant and never changes. Bands are evaluated in
/// order; see [`ScoreBand`] for the boundary policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Instrument {
    id: String,
    title: String,
    category: String,
    questions: Vec<String>,
    bands: Vec<ScoreBand>,
}

impl Instrument {
    /// Build a definition. Nothing is checked until it enters a [`Catalog`].
    pub fn new(
        id: &str,
        title: &str,
        category: &str,
        questions: &[&str],
        bands: Vec<ScoreBand>,
    ) -> Self {
        Instrument {
            id: id.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            questions: questions.iter().map(|q| q.to_string()).collect(),
            bands,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn bands(&self) -> &[ScoreBand] {
        &self.bands
    }

    /// Every question is answered on the same 0–3 scale.
    pub fn max_score(&self) -> u32 {
        u32::from(MAX_ANSWER) * self.questions.len() as u32
    }

    /// Map a raw total to its band by ordered range lookup.
    pub fn interpret(&self, score: u32) -> Option<&ScoreBand> {
        self.bands.iter().find(|band| band.contains(score))
    }

    pub(crate) fn summary(&self) -> InstrumentSummary {
        InstrumentSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            category: self.category.clone(),
            question_count: self.question_count(),
            max_score: self.max_score(),
        }
    }

    /// Trim stray whitespace around the category. Returns true if it changed.
    pub(crate) fn normalize_category(&mut self) -> bool {
        let trimmed = self.category.trim();
        if trimmed.len() == self.category.len() {
            return false;
        }
        self.category = trimmed.to_string();
        true
    }

    /// Check the structural rules every catalog entry must satisfy.
    pub(crate) fn validate(&self) -> Result<(), InstrumentError> {
        let invalid = |reason: String| InstrumentError::InvalidDefinition {
            instrument_id: self.id.clone(),
            reason,
        };

        if self.id.trim().is_empty() {
            return Err(invalid("empty id".to_string()));
        }
        if self.questions.is_empty() {
            return Err(invalid("no questions".to_string()));
        }
        if self.bands.is_empty() {
            return Err(invalid("no score bands".to_string()));
        }

        let mut previous: Option<u32> = None;
        for (i, band) in self.bands.iter().enumerate() {
            match band.upper {
                None if i + 1 != self.bands.len() => {
                    return Err(invalid(format!(
                        "open band '{}' must be the last band",
                        band.label
                    )));
                }
                Some(upper) if previous.is_some_and(|p| upper <= p) => {
                    return Err(invalid(format!(
                        "band '{}' upper bound {upper} is not ascending",
                        band.label
                    )));
                }
                _ => {}
            }
            previous = band.upper;
        }

        if let Some(last) = self.bands.last().and_then(|b| b.upper)
            && last < self.max_score()
        {
            return Err(invalid(format!(
                "bands end at {last} but the maximum score is {}",
                self.max_score()
            )));
        }

        Ok(())
    }
}
