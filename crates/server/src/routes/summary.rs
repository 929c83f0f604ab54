//! Summary and map route handlers.

use axum::{Json, extract::State};

use crate::config::MapCenter;
use crate::services::{PinSummary, PlatformSummary};
use crate::state::AppState;

/// `GET /api/summary`
pub async fn platform(State(state): State<AppState>) -> Json<PlatformSummary> {
    Json(state.store().platform_summary())
}

/// `GET /api/summary/pins`
pub async fn pins(State(state): State<AppState>) -> Json<PinSummary> {
    Json(state.store().pin_registry_summary())
}

/// `GET /api/map-center`
///
/// Default map center for clients that have no location context.
pub async fn map_center(State(state): State<AppState>) -> Json<MapCenter> {
    Json(state.config().map_center)
}
