//! Help request domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use reliefmap_core::{HelpRequestId, RequestStatus, Urgency, VolunteerId};

/// A resource request awaiting volunteer assignment.
///
/// Invariant: `assigned_to` is set if and only if `status` is `assigned`
/// or `completed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpRequest {
    /// Unique request ID.
    pub id: HelpRequestId,
    /// Short headline, e.g. "Medical Supplies Needed".
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Where the resources are needed.
    pub location: String,
    /// Triage level set by the requester.
    pub urgency: Urgency,
    /// Assignment status.
    pub status: RequestStatus,
    /// Display name of the requester.
    pub requested_by: String,
    /// When the request was submitted.
    pub requested_at: DateTime<Utc>,
    /// Name of the assigned volunteer (non-owning back-reference).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    /// Roster identity of the assigned volunteer. Kept alongside the
    /// display name so completion can credit the right counter; cleared
    /// together with `assigned_to`.
    #[serde(skip)]
    pub assigned_volunteer: Option<VolunteerId>,
}
