use axum::extract::Request;
use axum::middleware::{from_fn, from_fn_with_state, Next};
use axum::routing::get;
use axum::Router;

use crate::auth::claims::Role;
use crate::auth::middleware::{authenticate, authorize};
use crate::state::AppState;

mod dto;
mod handlers;
pub mod recorder;
pub mod repo;

// Log access reuses the teacher role as the admin stand-in.
pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/logs", get(handlers::list_logs))
        .route_layer(from_fn(|req: Request, next: Next| {
            authorize(&[Role::Teacher], req, next)
        }))
        .route_layer(from_fn_with_state(state, authenticate))
}
