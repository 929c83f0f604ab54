//! Pin image route handlers.
//!
//! Uploads take a base64 payload and return an opaque reference that can
//! be attached to a pin report.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::middleware::RequireActor;
use crate::services::ImageStore as _;
use crate::state::AppState;

/// Upload request body.
#[derive(Debug, Deserialize)]
pub struct UploadBody {
    pub content_type: String,
    /// Base64-encoded payload.
    pub data: String,
}

/// Upload response body.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub reference: String,
}

/// `POST /api/images`
pub async fn upload(
    State(state): State<AppState>,
    RequireActor(_actor): RequireActor,
    Json(body): Json<UploadBody>,
) -> Result<(StatusCode, Json<UploadResponse>), AppError> {
    let reference = state.images().put_base64(&body.content_type, &body.data)?;
    tracing::info!(%reference, content_type = %body.content_type, "image uploaded");
    Ok((StatusCode::CREATED, Json(UploadResponse { reference })))
}

/// `GET /api/images/{reference}`
pub async fn fetch(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Result<Response, AppError> {
    let image = state
        .images()
        .get(&reference)
        .ok_or_else(|| AppError::NotFound(reference))?;
    Ok(([(header::CONTENT_TYPE, image.content_type)], image.data).into_response())
}
