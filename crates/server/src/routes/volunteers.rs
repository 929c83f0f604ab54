//! Volunteer roster route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use reliefmap_core::VolunteerId;

use crate::error::AppError;
use crate::middleware::RequireActor;
use crate::models::Volunteer;
use crate::state::AppState;
use crate::store::volunteers::RegisterVolunteer;

/// `GET /api/volunteers`
///
/// Organization operators see their own roster; everyone else the full
/// list.
pub async fn index(
    State(state): State<AppState>,
    RequireActor(actor): RequireActor,
) -> Json<Vec<Volunteer>> {
    Json(state.store().list_volunteers(&actor))
}

/// `POST /api/volunteers`
pub async fn create(
    State(state): State<AppState>,
    RequireActor(actor): RequireActor,
    Json(body): Json<RegisterVolunteer>,
) -> Result<(StatusCode, Json<Volunteer>), AppError> {
    let volunteer = state.store().register_volunteer(&actor, body)?;
    tracing::info!(
        volunteer_id = %volunteer.id,
        role = %volunteer.role,
        "volunteer registered"
    );
    Ok((StatusCode::CREATED, Json(volunteer)))
}

/// `POST /api/volunteers/{id}/approve`
pub async fn approve(
    State(state): State<AppState>,
    RequireActor(actor): RequireActor,
    Path(id): Path<VolunteerId>,
) -> Result<Json<Volunteer>, AppError> {
    let volunteer = state.store().approve_volunteer(&actor, id)?;
    tracing::info!(volunteer_id = %volunteer.id, "volunteer approved");
    Ok(Json(volunteer))
}

/// `POST /api/volunteers/{id}/reject`
pub async fn reject(
    State(state): State<AppState>,
    RequireActor(actor): RequireActor,
    Path(id): Path<VolunteerId>,
) -> Result<Json<Volunteer>, AppError> {
    let volunteer = state.store().reject_volunteer(&actor, id)?;
    tracing::info!(volunteer_id = %volunteer.id, "volunteer rejected");
    Ok(Json(volunteer))
}

/// `DELETE /api/volunteers/{id}`
pub async fn remove(
    State(state): State<AppState>,
    RequireActor(actor): RequireActor,
    Path(id): Path<VolunteerId>,
) -> Result<StatusCode, AppError> {
    state.store().remove_volunteer(&actor, id)?;
    tracing::info!(volunteer_id = %id, "volunteer removed");
    Ok(StatusCode::NO_CONTENT)
}
