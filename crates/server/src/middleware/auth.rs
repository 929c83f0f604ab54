//! Authentication extractors.
//!
//! The session holds a [`CurrentActor`] snapshot written at login. The
//! extractors only establish *who* is calling; *what* they may do is
//! decided by the authorization gate inside the store.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use reliefmap_core::Role;

use crate::models::{CurrentActor, session_keys};

/// Extractor that requires an authenticated actor.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(RequireActor(actor): RequireActor) -> impl IntoResponse {
///     format!("Hello, {}!", actor.name)
/// }
/// ```
pub struct RequireActor(pub CurrentActor);

/// Error returned when authentication is required but missing.
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            axum::Json(serde_json::json!({ "error": "authentication required" })),
        )
            .into_response()
    }
}

impl<S> FromRequestParts<S> for RequireActor
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // SessionManagerLayer parks the session in request extensions
        let session = parts.extensions.get::<Session>().ok_or(AuthRejection)?;

        let actor: CurrentActor = session
            .get(session_keys::CURRENT_ACTOR)
            .await
            .ok()
            .flatten()
            .ok_or(AuthRejection)?;

        Ok(Self(actor))
    }
}

/// Extractor that optionally gets the current actor.
///
/// Unlike `RequireActor`, this does not reject the request when nobody is
/// logged in.
pub struct OptionalActor(pub Option<CurrentActor>);

impl<S> FromRequestParts<S> for OptionalActor
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let actor = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<CurrentActor>(session_keys::CURRENT_ACTOR)
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(actor))
    }
}

/// Extractor that requires the admin.
pub struct RequireAdmin(pub CurrentActor);

/// Error returned for missing or non-admin sessions.
pub enum AdminRejection {
    Unauthenticated,
    Forbidden,
}

impl IntoResponse for AdminRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Unauthenticated => (StatusCode::UNAUTHORIZED, "authentication required"),
            Self::Forbidden => (StatusCode::FORBIDDEN, "admin access required"),
        };
        (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AdminRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let RequireActor(actor) = RequireActor::from_request_parts(parts, state)
            .await
            .map_err(|AuthRejection| AdminRejection::Unauthenticated)?;
        if actor.role == Role::Admin {
            Ok(Self(actor))
        } else {
            Err(AdminRejection::Forbidden)
        }
    }
}

/// Helper to set the current actor in the session (login).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_actor(
    session: &Session,
    actor: &CurrentActor,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_ACTOR, actor).await
}

/// Helper to clear the current actor from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_actor(
    session: &Session,
) -> Result<(), tower_sessions::session::Error> {
    session.remove::<CurrentActor>(session_keys::CURRENT_ACTOR).await?;
    Ok(())
}
