use axum::async_trait;
use axum::extract::{FromRef, FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use crate::auth::claims::Role;
use crate::auth::jwt::JwtKeys;
use crate::auth::repo::User;
use crate::error::ApiError;
use crate::state::AppState;

/// The identity resolved by [`authenticate`], carried in request extensions.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Resolve the bearer credential to a live user row and stash it for
/// downstream steps. Every auth failure here answers 401; only a store
/// fault during the re-fetch surfaces as an internal error.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            ApiError::Unauthenticated("No token provided. Authorization required.".into())
        })?;

    let token = header.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError::Unauthenticated("No token provided. Authorization required.".into())
    })?;

    let keys = JwtKeys::from_ref(&state);
    let claims = keys.verify(token).ok_or_else(|| {
        warn!("invalid or expired token");
        ApiError::Unauthenticated("Invalid or expired token.".into())
    })?;

    // Claims are trusted as issued; the principal must still exist now.
    let user = User::find_by_id(&state.db, claims.sub)
        .await?
        .ok_or_else(|| ApiError::Unauthenticated("User not found.".into()))?;

    req.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(req).await)
}

/// Gate a route by role. Must run after [`authenticate`]; a missing identity
/// here means the route is wired wrong, and there is no safe default.
pub async fn authorize(allowed: &[Role], req: Request, next: Next) -> Result<Response, ApiError> {
    let Some(CurrentUser(user)) = req.extensions().get::<CurrentUser>() else {
        warn!("authorize ran without an authenticated identity");
        return Err(ApiError::Unauthenticated("Authentication required.".into()));
    };

    if !role_permitted(user.role, allowed) {
        return Err(ApiError::Forbidden(
            "Access denied. Insufficient permissions.".into(),
        ));
    }

    Ok(next.run(req).await)
}

// Plain set membership, no role hierarchy.
fn role_permitted(role: Role, allowed: &[Role]) -> bool {
    allowed.contains(&role)
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| ApiError::Unauthenticated("Authentication required.".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_admits_listed_roles_only() {
        assert!(role_permitted(Role::Teacher, &[Role::Teacher]));
        assert!(!role_permitted(Role::Student, &[Role::Teacher]));
        assert!(role_permitted(Role::Student, &[Role::Student, Role::Teacher]));
    }

    #[test]
    fn empty_allowed_set_admits_no_one() {
        assert!(!role_permitted(Role::Teacher, &[]));
        assert!(!role_permitted(Role::Student, &[]));
    }
}
