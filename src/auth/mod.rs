use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub mod claims;
mod dto;
mod handlers;
pub mod jwt;
pub mod middleware;
mod password;
pub mod repo;

pub fn router(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/auth/register", post(handlers::register))
        .route("/auth/login", post(handlers::login));

    let protected = Router::new()
        .route("/auth/profile", get(handlers::profile))
        .route_layer(axum::middleware::from_fn_with_state(
            state,
            middleware::authenticate,
        ));

    public.merge(protected)
}
