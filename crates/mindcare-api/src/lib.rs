//! mindcare-api
//!
//! JSON surface over the self-assessment engine: instrument listing,
//! session progression, and scoring.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Instruments (public schema data)
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/categories",
            get(routes::instruments::list_categories),
        )
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        // Sessions
        .route("/sessions", post(routes::sessions::start_session))
        .route(
            "/sessions/{id}",
            get(routes::sessions::get_session).delete(routes::sessions::delete_session),
        )
        .route(
            "/sessions/{id}/answers",
            post(routes::sessions::submit_answer),
        )
        .route("/sessions/{id}/reset", post(routes::sessions::reset_session))
        .route("/sessions/{id}/result", get(routes::sessions::get_result))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
