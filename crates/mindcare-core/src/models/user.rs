use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub username: Option<String>,
    pub role: Role,
    pub status: AccountStatus,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Role {
    Patient,
    Doctor,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AccountStatus {
    Pending,
    Active,
    Inactive,
}

impl AccountStatus {
    /// Doctors wait for admin approval; everyone else is active on sign-up.
    pub fn initial_for(role: Role) -> Self {
        match role {
            Role::Doctor => AccountStatus::Pending,
            Role::Patient | Role::Admin => AccountStatus::Active,
        }
    }
}

impl User {
    pub fn register(name: &str, email: &str, username: Option<String>, role: Role) -> Self {
        User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            username,
            role,
            status: AccountStatus::initial_for(role),
            created_at: jiff::Timestamp::now(),
        }
    }

    /// Admin moderation: approve, deactivate, or reactivate an account.
    pub fn set_status(&mut self, status: AccountStatus) -> Result<(), CoreError> {
        if self.role == Role::Admin {
            return Err(CoreError::AdminProtected);
        }
        self.status = status;
        Ok(())
    }

    /// Doctors are only bookable once an admin has activated them.
    pub fn is_bookable_doctor(&self) -> bool {
        self.role == Role::Doctor && self.status == AccountStatus::Active
    }

    pub fn display_name(&self) -> &str {
        [self.username.as_deref(), Some(self.name.as_str()), Some(self.email.as_str())]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
            .unwrap_or("Unknown User")
    }
}
