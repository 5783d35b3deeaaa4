use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

use super::consultation::Consultation;

/// A single doctor–patient message within a consultation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatMessage {
    pub id: Uuid,
    pub consultation_id: Uuid,
    pub sender_id: Uuid,
    pub sender_name: String,
    pub message: String,
    pub timestamp: jiff::Timestamp,
}

impl ChatMessage {
    /// Chat opens once the doctor confirms the consultation.
    pub fn new(
        consultation: &Consultation,
        sender_id: Uuid,
        sender_name: &str,
        message: &str,
    ) -> Result<Self, CoreError> {
        if !consultation.is_chat_open() {
            return Err(CoreError::ChatClosed(consultation.id));
        }
        let message = message.trim();
        if message.is_empty() {
            return Err(CoreError::MissingField("message".to_string()));
        }
        Ok(ChatMessage {
            id: Uuid::new_v4(),
            consultation_id: consultation.id,
            sender_id,
            sender_name: sender_name.to_string(),
            message: message.to_string(),
            timestamp: jiff::Timestamp::now(),
        })
    }
}

/// Order messages oldest-first, matching the live subscription's ordering.
pub fn sort_chronological(messages: &mut [ChatMessage]) {
    messages.sort_by_key(|m| m.timestamp);
}
