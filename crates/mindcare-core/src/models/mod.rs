pub mod article;
pub mod assessment;
pub mod chat;
pub mod consultation;
pub mod mood;
pub mod user;
