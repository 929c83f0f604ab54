//! Organization directory domain types.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use reliefmap_core::{Contact, Funding, OrganizationId, OrgStatus};

/// A relief organization (domain type).
///
/// The login secret is held for credential comparison only and is never
/// serialized; `SecretString` redacts it from `Debug` output.
#[derive(Debug, Clone)]
pub struct Organization {
    /// Unique organization ID, immutable after creation.
    pub id: OrganizationId,
    /// Organization name.
    pub name: String,
    /// Login username for the organization's operator account.
    pub username: String,
    /// Login secret.
    pub secret: SecretString,
    /// Operating region, e.g. "Yangon".
    pub region: String,
    /// Reported funding as a display string (`"$50,000"`).
    pub funding: Funding,
    /// Reported volunteer headcount.
    pub volunteer_count: u32,
    /// Approval status; transitions are admin-only.
    pub status: OrgStatus,
    /// Contact details.
    pub contact: Contact,
    /// Supply inventory, if reported.
    pub supplies: Option<Supplies>,
    /// When the organization was registered, immutable.
    pub created_at: DateTime<Utc>,
}

/// Supply inventory counters reported by an organization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplies {
    pub medical: u32,
    pub food: u32,
    pub water: u32,
    pub shelter: u32,
    pub equipment: u32,
}

impl Supplies {
    /// Element-wise sum, used by the directory aggregates.
    ///
    /// Saturates at `u32::MAX`; inventory figures are operator input and
    /// must not be able to panic an aggregate.
    #[must_use]
    pub const fn add(self, other: Self) -> Self {
        Self {
            medical: self.medical.saturating_add(other.medical),
            food: self.food.saturating_add(other.food),
            water: self.water.saturating_add(other.water),
            shelter: self.shelter.saturating_add(other.shelter),
            equipment: self.equipment.saturating_add(other.equipment),
        }
    }
}

/// Public directory view of an organization.
///
/// Excludes credentials, funding, and supplies; financial fields are
/// served separately to admins and the organization itself.
#[derive(Debug, Clone, Serialize)]
pub struct OrganizationView {
    pub id: OrganizationId,
    pub name: String,
    pub region: String,
    pub volunteer_count: u32,
    pub status: OrgStatus,
    pub contact: Contact,
    pub created_at: DateTime<Utc>,
}

impl From<&Organization> for OrganizationView {
    fn from(org: &Organization) -> Self {
        Self {
            id: org.id,
            name: org.name.clone(),
            region: org.region.clone(),
            volunteer_count: org.volunteer_count,
            status: org.status,
            contact: org.contact.clone(),
            created_at: org.created_at,
        }
    }
}

/// Financial view of an organization (admin or the organization itself).
#[derive(Debug, Clone, Serialize)]
pub struct OrgFinancials {
    pub id: OrganizationId,
    pub name: String,
    pub funding: Funding,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplies: Option<Supplies>,
}

impl From<&Organization> for OrgFinancials {
    fn from(org: &Organization) -> Self {
        Self {
            id: org.id,
            name: org.name.clone(),
            funding: org.funding.clone(),
            supplies: org.supplies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplies_add_sums_element_wise() {
        let a = Supplies {
            medical: 1,
            food: 2,
            water: 3,
            shelter: 4,
            equipment: 5,
        };
        let b = Supplies {
            medical: 10,
            food: 20,
            water: 30,
            shelter: 40,
            equipment: 50,
        };
        let sum = a.add(b);
        assert_eq!(sum.medical, 11);
        assert_eq!(sum.equipment, 55);
    }

    #[test]
    fn test_supplies_add_saturates_instead_of_overflowing() {
        let huge = Supplies {
            medical: u32::MAX,
            food: u32::MAX - 1,
            water: 0,
            shelter: 0,
            equipment: 0,
        };
        let more = Supplies {
            medical: 1,
            food: 5,
            water: 1,
            shelter: 0,
            equipment: 0,
        };
        let sum = huge.add(more);
        assert_eq!(sum.medical, u32::MAX);
        assert_eq!(sum.food, u32::MAX);
        assert_eq!(sum.water, 1);
    }
}
