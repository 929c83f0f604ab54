//! Alert feed route handlers.

use axum::{Json, extract::State, http::StatusCode};

use crate::error::AppError;
use crate::middleware::RequireActor;
use crate::models::Alert;
use crate::state::AppState;
use crate::store::alerts::PublishAlert;

/// `GET /api/alerts`
pub async fn index(State(state): State<AppState>) -> Json<Vec<Alert>> {
    Json(state.store().list_alerts())
}

/// `POST /api/alerts`
pub async fn create(
    State(state): State<AppState>,
    RequireActor(actor): RequireActor,
    Json(body): Json<PublishAlert>,
) -> Result<(StatusCode, Json<Alert>), AppError> {
    let alert = state.store().publish_alert(&actor, body)?;
    tracing::info!(alert_id = %alert.id, kind = %alert.kind, severity = %alert.severity, "alert published");
    Ok((StatusCode::CREATED, Json(alert)))
}
