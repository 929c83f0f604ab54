//! Volunteer roster domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use reliefmap_core::{Contact, OrganizationId, VolunteerId, VolunteerRole, VolunteerStatus};

/// A volunteer on an organization's roster.
///
/// Invariants: only `active` volunteers are eligible for assignment;
/// `assignments_completed` is monotonically non-decreasing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Volunteer {
    /// Unique volunteer ID.
    pub id: VolunteerId,
    /// Display name.
    pub name: String,
    /// Contact details (email + phone).
    pub contact: Contact,
    /// Specialization: tracking or supply.
    pub role: VolunteerRole,
    /// Roster status.
    pub status: VolunteerStatus,
    /// Home location, e.g. "Yangon".
    pub location: String,
    /// Organization whose roster this volunteer belongs to. Cleared when
    /// the organization is deleted (cascade-orphan).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<OrganizationId>,
    /// When the volunteer joined.
    pub joined_at: DateTime<Utc>,
    /// Number of completed assignments.
    pub assignments_completed: u32,
}
