//! Pin route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use reliefmap_core::PinId;

use crate::error::AppError;
use crate::middleware::RequireActor;
use crate::models::Pin;
use crate::state::AppState;
use crate::store::pins::ReportPin;

/// `GET /api/pins`
///
/// The registry as visible to the caller's role.
pub async fn index(
    State(state): State<AppState>,
    RequireActor(actor): RequireActor,
) -> Json<Vec<Pin>> {
    Json(state.store().list_pins(&actor))
}

/// `POST /api/pins`
pub async fn create(
    State(state): State<AppState>,
    RequireActor(actor): RequireActor,
    Json(body): Json<ReportPin>,
) -> Result<(StatusCode, Json<Pin>), AppError> {
    let pin = state.store().report_pin(&actor, body)?;
    tracing::info!(pin_id = %pin.id, kind = %pin.kind, status = %pin.status, "pin reported");
    Ok((StatusCode::CREATED, Json(pin)))
}

/// `POST /api/pins/{id}/confirm`
pub async fn confirm(
    State(state): State<AppState>,
    RequireActor(actor): RequireActor,
    Path(id): Path<PinId>,
) -> Result<Json<Pin>, AppError> {
    let pin = state.store().confirm_pin(&actor, id)?;
    tracing::info!(pin_id = %pin.id, "pin confirmed");
    Ok(Json(pin))
}

/// `POST /api/pins/{id}/deny`
pub async fn deny(
    State(state): State<AppState>,
    RequireActor(actor): RequireActor,
    Path(id): Path<PinId>,
) -> Result<StatusCode, AppError> {
    state.store().deny_pin(&actor, id)?;
    tracing::info!(pin_id = %id, "pin denied");
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/pins/{id}/complete`
pub async fn complete(
    State(state): State<AppState>,
    RequireActor(actor): RequireActor,
    Path(id): Path<PinId>,
) -> Result<Json<Pin>, AppError> {
    let pin = state.store().complete_pin(&actor, id)?;
    tracing::info!(pin_id = %pin.id, "pin completed");
    Ok(Json(pin))
}
