//! Organization directory route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use reliefmap_core::OrganizationId;

use crate::error::AppError;
use crate::middleware::RequireActor;
use crate::models::{OrgFinancials, OrganizationView};
use crate::state::AppState;
use crate::store::organizations::{RegisterOrganization, UpdateOrganization};

/// `GET /api/organizations`
///
/// Public directory; no credentials or financials in the payload.
pub async fn index(State(state): State<AppState>) -> Json<Vec<OrganizationView>> {
    Json(state.store().list_organizations())
}

/// `POST /api/organizations`
pub async fn create(
    State(state): State<AppState>,
    RequireActor(actor): RequireActor,
    Json(body): Json<RegisterOrganization>,
) -> Result<(StatusCode, Json<OrganizationView>), AppError> {
    let org = state.store().register_organization(&actor, body)?;
    tracing::info!(org_id = %org.id, region = %org.region, "organization registered");
    Ok((StatusCode::CREATED, Json(org)))
}

/// `POST /api/organizations/{id}/approve`
pub async fn approve(
    State(state): State<AppState>,
    RequireActor(actor): RequireActor,
    Path(id): Path<OrganizationId>,
) -> Result<Json<OrganizationView>, AppError> {
    let org = state.store().approve_organization(&actor, id)?;
    tracing::info!(org_id = %org.id, "organization approved");
    Ok(Json(org))
}

/// `POST /api/organizations/{id}/reject`
pub async fn reject(
    State(state): State<AppState>,
    RequireActor(actor): RequireActor,
    Path(id): Path<OrganizationId>,
) -> Result<Json<OrganizationView>, AppError> {
    let org = state.store().reject_organization(&actor, id)?;
    tracing::info!(org_id = %org.id, "organization rejected");
    Ok(Json(org))
}

/// `PATCH /api/organizations/{id}`
pub async fn update(
    State(state): State<AppState>,
    RequireActor(actor): RequireActor,
    Path(id): Path<OrganizationId>,
    Json(body): Json<UpdateOrganization>,
) -> Result<Json<OrganizationView>, AppError> {
    let org = state.store().update_organization(&actor, id, body)?;
    tracing::info!(org_id = %org.id, "organization updated");
    Ok(Json(org))
}

/// `DELETE /api/organizations/{id}`
pub async fn remove(
    State(state): State<AppState>,
    RequireActor(actor): RequireActor,
    Path(id): Path<OrganizationId>,
) -> Result<StatusCode, AppError> {
    state.store().delete_organization(&actor, id)?;
    tracing::info!(org_id = %id, "organization deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/organizations/{id}/financials`
pub async fn financials(
    State(state): State<AppState>,
    RequireActor(actor): RequireActor,
    Path(id): Path<OrganizationId>,
) -> Result<Json<OrgFinancials>, AppError> {
    Ok(Json(state.store().org_financials(&actor, id)?))
}
