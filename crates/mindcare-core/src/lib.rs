//! mindcare-core
//!
//! Pure domain types and document-path conventions.
//! No backend dependency — this is the shared vocabulary of the MindCare platform.

pub mod documents;
pub mod error;
pub mod models;
