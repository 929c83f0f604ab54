//! Actor roles and authorization levels.

use serde::{Deserialize, Serialize};

/// Error returned when parsing a role from a string fails.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid role: {0}")]
pub struct RoleParseError(String);

/// The role an authenticated actor holds on the platform.
///
/// Exactly one role per actor; roles are immutable after registration
/// (there is no promotion flow).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular field reporter. Can create pins and submit help requests.
    User,
    /// Verifies field reports: confirms or denies pending pins.
    TrackingVolunteer,
    /// Delivers supplies: sees confirmed damage pins and marks them completed.
    SupplyVolunteer,
    /// Relief organization operator: manages its volunteer roster and
    /// assigns help requests.
    Organization,
    /// Platform administrator: manages the organization directory.
    Admin,
}

impl Role {
    /// Whether this role is one of the two volunteer specializations.
    #[must_use]
    pub const fn is_volunteer(self) -> bool {
        matches!(self, Self::TrackingVolunteer | Self::SupplyVolunteer)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::TrackingVolunteer => write!(f, "tracking_volunteer"),
            Self::SupplyVolunteer => write!(f, "supply_volunteer"),
            Self::Organization => write!(f, "organization"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "tracking_volunteer" => Ok(Self::TrackingVolunteer),
            "supply_volunteer" => Ok(Self::SupplyVolunteer),
            "organization" => Ok(Self::Organization),
            "admin" => Ok(Self::Admin),
            _ => Err(RoleParseError(s.to_owned())),
        }
    }
}

/// Volunteer role specialization.
///
/// A strict subset of [`Role`]: roster entries are always one of the two
/// volunteer kinds, never `user`, `organization`, or `admin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolunteerRole {
    TrackingVolunteer,
    SupplyVolunteer,
}

impl From<VolunteerRole> for Role {
    fn from(role: VolunteerRole) -> Self {
        match role {
            VolunteerRole::TrackingVolunteer => Self::TrackingVolunteer,
            VolunteerRole::SupplyVolunteer => Self::SupplyVolunteer,
        }
    }
}

impl TryFrom<Role> for VolunteerRole {
    type Error = RoleParseError;

    fn try_from(role: Role) -> Result<Self, Self::Error> {
        match role {
            Role::TrackingVolunteer => Ok(Self::TrackingVolunteer),
            Role::SupplyVolunteer => Ok(Self::SupplyVolunteer),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

impl std::fmt::Display for VolunteerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Role::from(*self).fmt(f)
    }
}
