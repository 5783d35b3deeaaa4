use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use mindcare_instruments::{Catalog, Session};

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub max_sessions: usize,
}

impl AppState {
    pub fn new(catalog: Catalog, max_sessions: usize) -> Self {
        AppState {
            catalog: Arc::new(catalog),
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions,
        }
    }
}
