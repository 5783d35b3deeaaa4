pub mod health;
pub mod instruments;
pub mod sessions;
