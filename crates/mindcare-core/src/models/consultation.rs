use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

use super::user::{Role, User};

/// A patient's booking request with a doctor. Chat messages hang off it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Consultation {
    pub id: Uuid,
    pub doctor_id: Uuid,
    pub doctor_name: String,
    pub patient_id: Uuid,
    pub patient_name: String,
    pub complaint: String,
    pub status: ConsultationStatus,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConsultationStatus {
    Pending,
    Confirmed,
    Rejected,
}

impl std::fmt::Display for ConsultationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ConsultationStatus::Pending => "pending",
            ConsultationStatus::Confirmed => "confirmed",
            ConsultationStatus::Rejected => "rejected",
        };
        f.write_str(s)
    }
}

impl Consultation {
    /// Only patients may book, and only doctors an admin has activated.
    pub fn book(patient: &User, doctor: &User, complaint: &str) -> Result<Self, CoreError> {
        if patient.role != Role::Patient {
            return Err(CoreError::NotPermitted {
                user: patient.display_name().to_string(),
                action: "book a consultation",
            });
        }
        if !doctor.is_bookable_doctor() {
            return Err(CoreError::NotPermitted {
                user: doctor.display_name().to_string(),
                action: "accept consultations",
            });
        }
        if complaint.trim().is_empty() {
            return Err(CoreError::MissingField("complaint".to_string()));
        }
        Ok(Consultation {
            id: Uuid::new_v4(),
            doctor_id: doctor.id,
            doctor_name: doctor.name.clone(),
            patient_id: patient.id,
            patient_name: patient.display_name().to_string(),
            complaint: complaint.to_string(),
            status: ConsultationStatus::Pending,
            created_at: jiff::Timestamp::now(),
        })
    }

    pub fn confirm(&mut self) -> Result<(), CoreError> {
        self.decide(ConsultationStatus::Confirmed)
    }

    pub fn reject(&mut self) -> Result<(), CoreError> {
        self.decide(ConsultationStatus::Rejected)
    }

    pub fn is_chat_open(&self) -> bool {
        self.status == ConsultationStatus::Confirmed
    }

    fn decide(&mut self, to: ConsultationStatus) -> Result<(), CoreError> {
        if self.status != ConsultationStatus::Pending {
            return Err(CoreError::InvalidTransition {
                entity: "consultation",
                from: self.status.to_string(),
                to: to.to_string(),
            });
        }
        self.status = to;
        Ok(())
    }
}
