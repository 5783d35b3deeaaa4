use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use ts_rs::TS;

use crate::error::InstrumentError;
use crate::instruments;
use crate::session::Session;
use crate::Instrument;

/// What a selection screen needs to list an instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct InstrumentSummary {
    pub id: String,
    pub title: String,
    pub category: String,
    pub question_count: usize,
    pub max_score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct CategoryGroup {
    pub category: String,
    pub instruments: Vec<InstrumentSummary>,
}

/// Read-only registry of instruments, built once and shared.
///
/// Construct it explicitly and pass it where needed; there is no global.
#[derive(Debug, Clone)]
pub struct Catalog {
    instruments: Vec<Arc<Instrument>>,
}

impl Catalog {
    /// Validate and register `instruments`, keeping their order.
    pub fn new(instruments: Vec<Instrument>) -> Result<Self, InstrumentError> {
        let mut seen = HashSet::new();
        let mut registered = Vec::with_capacity(instruments.len());

        for mut instrument in instruments {
            if instrument.normalize_category() {
                tracing::warn!(
                    instrument_id = %instrument.id(),
                    category = %instrument.category(),
                    "instrument category had surrounding whitespace; trimmed"
                );
            }
            instrument.validate()?;
            if !seen.insert(instrument.id().to_string()) {
                return Err(InstrumentError::InvalidDefinition {
                    instrument_id: instrument.id().to_string(),
                    reason: "duplicate id".to_string(),
                });
            }
            registered.push(Arc::new(instrument));
        }

        tracing::debug!(count = registered.len(), "instrument catalog loaded");
        Ok(Catalog {
            instruments: registered,
        })
    }

    /// The eleven instruments offered by MindCare.
    pub fn standard() -> Result<Self, InstrumentError> {
        Catalog::new(instruments::standard())
    }

    pub fn get(&self, id: &str) -> Result<&Instrument, InstrumentError> {
        self.find(id).map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instrument> {
        self.instruments.iter().map(Arc::as_ref)
    }

    pub fn list(&self) -> Vec<InstrumentSummary> {
        self.iter().map(Instrument::summary).collect()
    }

    /// Summaries grouped by category, categories in first-appearance order.
    pub fn by_category(&self) -> Vec<CategoryGroup> {
        let mut groups: Vec<CategoryGroup> = Vec::new();
        for instrument in self.iter() {
            match groups
                .iter_mut()
                .find(|g| g.category == instrument.category())
            {
                Some(group) => group.instruments.push(instrument.summary()),
                None => groups.push(CategoryGroup {
                    category: instrument.category().to_string(),
                    instruments: vec![instrument.summary()],
                }),
            }
        }
        groups
    }

    /// Begin a fresh session at the first question.
    pub fn start_session(&self, id: &str) -> Result<Session, InstrumentError> {
        let instrument = self.find(id)?;
        Ok(Session::start(Arc::clone(instrument)))
    }

    fn find(&self, id: &str) -> Result<&Arc<Instrument>, InstrumentError> {
        self.instruments
            .iter()
            .find(|i| i.id() == id)
            .ok_or_else(|| InstrumentError::NotFound(id.to_string()))
    }
}
