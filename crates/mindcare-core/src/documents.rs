//! Document path conventions.
//!
//! Pure string functions — no datastore SDK dependency. These define the
//! canonical layout of documents in the MindCare document store.

use uuid::Uuid;

pub const USERS: &str = "users";
pub const CONSULTATIONS: &str = "consultations";
pub const MOOD_ENTRIES: &str = "moodEntries";
pub const ARTICLES: &str = "articles";
pub const ASSESSMENTS: &str = "assessments";

pub fn user(id: Uuid) -> String {
    format!("{USERS}/{id}")
}

pub fn consultation(id: Uuid) -> String {
    format!("{CONSULTATIONS}/{id}")
}

/// Messages are a sub-collection of their consultation.
pub fn consultation_messages(consultation_id: Uuid) -> String {
    format!("{CONSULTATIONS}/{consultation_id}/messages")
}

pub fn chat_message(consultation_id: Uuid, message_id: Uuid) -> String {
    format!("{}/{message_id}", consultation_messages(consultation_id))
}

pub fn mood_entry(id: Uuid) -> String {
    format!("{MOOD_ENTRIES}/{id}")
}

pub fn article(id: Uuid) -> String {
    format!("{ARTICLES}/{id}")
}

pub fn assessment(id: Uuid) -> String {
    format!("{ASSESSMENTS}/{id}")
}
