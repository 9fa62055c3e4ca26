use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;

use crate::auth::middleware::authenticate;
use crate::state::AppState;

mod handlers;

pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/recommendations/:user_id",
            get(handlers::get_recommendations),
        )
        .route_layer(from_fn_with_state(state, authenticate))
}
