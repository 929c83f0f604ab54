//! Incident pin domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use reliefmap_core::{PinId, PinKind, PinStatus};

/// A field-reported incident location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pin {
    /// Unique pin ID, immutable after creation.
    pub id: PinId,
    /// Damaged location or safe zone.
    pub kind: PinKind,
    /// Lifecycle status; only ever advances.
    pub status: PinStatus,
    /// Short headline, e.g. "Building Collapse".
    pub title: String,
    /// Free-form description of the situation.
    pub description: String,
    /// Latitude of the report.
    pub lat: f64,
    /// Longitude of the report.
    pub lng: f64,
    /// Display name of the reporter (non-owning back-reference).
    pub created_by: String,
    /// When the pin was reported.
    pub created_at: DateTime<Utc>,
    /// Team assigned to the location, if any (non-owning back-reference).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    /// Opaque image-store reference for an attached photo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
