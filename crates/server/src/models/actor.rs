//! Actor (authenticated identity) domain types.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use reliefmap_core::{ActorId, OrganizationId, Role};

/// A registered account (domain type).
///
/// The secret is held only for login comparison; it never leaves the store
/// and is redacted from `Debug` output by `SecretString`. Hashing is out of
/// scope for this core.
#[derive(Debug, Clone)]
pub struct Actor {
    /// Unique actor ID.
    pub id: ActorId,
    /// Display name.
    pub name: String,
    /// Login username.
    pub username: String,
    /// Login secret.
    pub secret: SecretString,
    /// The actor's single, immutable role.
    pub role: Role,
    /// Owning organization, for organization operators and scoped volunteers.
    pub organization_id: Option<OrganizationId>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// Session-stored actor identity.
///
/// Minimal data stored in the session to identify the logged-in actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentActor {
    /// Actor's ID.
    pub id: ActorId,
    /// Actor's display name.
    pub name: String,
    /// Actor's role.
    pub role: Role,
    /// Owning organization, if any.
    pub organization_id: Option<OrganizationId>,
}

impl From<&Actor> for CurrentActor {
    fn from(actor: &Actor) -> Self {
        Self {
            id: actor.id,
            name: actor.name.clone(),
            role: actor.role,
            organization_id: actor.organization_id,
        }
    }
}

/// Session keys for authentication data.
pub mod session_keys {
    /// Key for storing the current logged-in actor.
    pub const CURRENT_ACTOR: &str = "current_actor";
}
