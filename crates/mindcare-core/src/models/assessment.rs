use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A completed self-assessment, as handed to the document store.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub respondent_id: Uuid,
    pub instrument_id: String,
    pub total_score: u32,
    pub max_score: u32,
    pub label: String,
    pub percentage: u32,
    pub completed_at: jiff::Timestamp,
}
