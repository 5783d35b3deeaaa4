use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid mood level: {0} (expected 1-5)")]
    InvalidMood(u8),

    #[error("cannot move {entity} from {from} to {to}")]
    InvalidTransition {
        entity: &'static str,
        from: String,
        to: String,
    },

    #[error("{user} cannot {action}")]
    NotPermitted { user: String, action: &'static str },

    #[error("consultation {0} is not confirmed; chat is closed")]
    ChatClosed(uuid::Uuid),

    #[error("admin accounts cannot change status")]
    AdminProtected,
}
