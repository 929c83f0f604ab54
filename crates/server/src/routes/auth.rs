//! Authentication route handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::AppError;
use crate::middleware::auth::{clear_current_actor, set_current_actor};
use crate::models::CurrentActor;
use crate::state::AppState;
use crate::store::accounts::RegisterAccount;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub username: String,
    pub password: String,
}

/// `POST /api/auth/register`
///
/// Creates an account and logs it in.
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<RegisterAccount>,
) -> Result<(StatusCode, Json<CurrentActor>), AppError> {
    let actor = state.store().register_account(body)?;
    set_current_actor(&session, &actor)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    tracing::info!(actor_id = %actor.id, role = %actor.role, "account registered");
    Ok((StatusCode::CREATED, Json(actor)))
}

/// `POST /api/auth/login`
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<LoginBody>,
) -> Result<Json<CurrentActor>, AppError> {
    let Some(actor) = state.store().authenticate(&body.username, &body.password) else {
        return Err(AppError::Unauthorized(
            "invalid username or password".to_owned(),
        ));
    };

    // Rotate the session id on privilege change
    session
        .cycle_id()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    set_current_actor(&session, &actor)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    tracing::info!(actor_id = %actor.id, role = %actor.role, "login");
    Ok(Json(actor))
}

/// `POST /api/auth/logout`
pub async fn logout(session: Session) -> Result<StatusCode, AppError> {
    clear_current_actor(&session)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/auth/me`
pub async fn me(
    crate::middleware::RequireActor(actor): crate::middleware::RequireActor,
) -> Json<CurrentActor> {
    Json(actor)
}
