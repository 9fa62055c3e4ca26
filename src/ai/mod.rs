use axum::middleware::from_fn_with_state;
use axum::routing::post;
use axum::Router;

use crate::auth::middleware::authenticate;
use crate::state::AppState;

mod dto;
mod handlers;

// Placeholder endpoints, kept behind authentication so usage is attributable
// in the audit log once real model integrations land.
pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/ai/summarize", post(handlers::summarize))
        .route("/ai/quiz", post(handlers::generate_quiz))
        .route("/ai/transcribe", post(handlers::transcribe))
        .route_layer(from_fn_with_state(state, authenticate))
}
