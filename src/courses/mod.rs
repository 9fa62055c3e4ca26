use axum::extract::Request;
use axum::middleware::{from_fn, from_fn_with_state, Next};
use axum::routing::{get, post, put};
use axum::Router;

use crate::auth::claims::Role;
use crate::auth::middleware::{authenticate, authorize};
use crate::state::AppState;

pub mod dto;
mod handlers;
pub mod repo;

pub fn router(state: AppState) -> Router<AppState> {
    let read = Router::new()
        .route("/courses", get(handlers::list_courses))
        .route("/courses/:id", get(handlers::get_course));

    // Mutations require an authenticated teacher; ownership is checked in
    // the handlers against the record's creator.
    let write = Router::new()
        .route("/courses", post(handlers::create_course))
        .route(
            "/courses/:id",
            put(handlers::update_course).delete(handlers::delete_course),
        )
        .route_layer(from_fn(|req: Request, next: Next| {
            authorize(&[Role::Teacher], req, next)
        }))
        .route_layer(from_fn_with_state(state, authenticate));

    read.merge(write)
}
