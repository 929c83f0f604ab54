//! Help request route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use reliefmap_core::{HelpRequestId, VolunteerId};

use crate::error::AppError;
use crate::middleware::RequireActor;
use crate::models::{HelpRequest, Volunteer};
use crate::state::AppState;
use crate::store::requests::SubmitRequest;

/// Assignment request body.
#[derive(Debug, Deserialize)]
pub struct AssignBody {
    pub volunteer_id: VolunteerId,
}

/// `GET /api/requests`
pub async fn index(
    State(state): State<AppState>,
    RequireActor(_actor): RequireActor,
) -> Json<Vec<HelpRequest>> {
    Json(state.store().list_requests())
}

/// `POST /api/requests`
pub async fn create(
    State(state): State<AppState>,
    RequireActor(actor): RequireActor,
    Json(body): Json<SubmitRequest>,
) -> Result<(StatusCode, Json<HelpRequest>), AppError> {
    let request = state.store().submit_request(&actor, body)?;
    tracing::info!(request_id = %request.id, urgency = %request.urgency, "help request submitted");
    Ok((StatusCode::CREATED, Json(request)))
}

/// `GET /api/requests/candidates`
///
/// Active supply volunteers the caller may assign.
pub async fn candidates(
    State(state): State<AppState>,
    RequireActor(actor): RequireActor,
) -> Result<Json<Vec<Volunteer>>, AppError> {
    Ok(Json(state.store().eligible_candidates(&actor)?))
}

/// `POST /api/requests/{id}/assign`
pub async fn assign(
    State(state): State<AppState>,
    RequireActor(actor): RequireActor,
    Path(id): Path<HelpRequestId>,
    Json(body): Json<AssignBody>,
) -> Result<Json<HelpRequest>, AppError> {
    let request = state.store().assign_volunteer(&actor, id, body.volunteer_id)?;
    tracing::info!(
        request_id = %request.id,
        volunteer_id = %body.volunteer_id,
        "help request assigned"
    );
    Ok(Json(request))
}

/// `POST /api/requests/{id}/complete`
pub async fn complete(
    State(state): State<AppState>,
    RequireActor(actor): RequireActor,
    Path(id): Path<HelpRequestId>,
) -> Result<Json<HelpRequest>, AppError> {
    let request = state.store().complete_request(&actor, id)?;
    tracing::info!(request_id = %request.id, "help request completed");
    Ok(Json(request))
}
