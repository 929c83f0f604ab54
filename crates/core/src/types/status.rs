//! Status and classification enums for the coordination entities.

use serde::{Deserialize, Serialize};

/// Kind of a field-reported incident pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinKind {
    /// A damaged location needing attention.
    Damaged,
    /// A safe zone (shelter, assembly point).
    Safe,
}

/// Lifecycle status of a pin.
///
/// Only advances: `pending -> confirmed -> completed`. A denied pin is
/// deleted rather than moved to a terminal status. `safe` pins terminate
/// at `confirmed`; only `damaged` pins can be completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PinStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
}

/// Urgency level of a help request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

/// Assignment status of a help request.
///
/// `assigned_to` is set if and only if the status is `assigned` or
/// `completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Pending,
    Assigned,
    Completed,
}

/// Roster status of a volunteer.
///
/// Only `active` volunteers are eligible for assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VolunteerStatus {
    #[default]
    Pending,
    Active,
    Inactive,
}

/// Approval status of an organization.
///
/// Organizations are always created `pending`; transitions are admin-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrgStatus {
    #[default]
    Pending,
    Active,
    Inactive,
}

/// Category of a platform alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Earthquake,
    Safety,
    Family,
    Emergency,
}

/// Severity of a platform alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

macro_rules! display_as_wire {
    ($($ty:ty { $($variant:ident => $text:literal),+ $(,)? })+) => {
        $(impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(match self {
                    $(Self::$variant => $text,)+
                })
            }
        })+
    };
}

display_as_wire! {
    PinKind { Damaged => "damaged", Safe => "safe" }
    PinStatus { Pending => "pending", Confirmed => "confirmed", Completed => "completed" }
    Urgency { Low => "low", Medium => "medium", High => "high" }
    RequestStatus { Pending => "pending", Assigned => "assigned", Completed => "completed" }
    VolunteerStatus { Pending => "pending", Active => "active", Inactive => "inactive" }
    OrgStatus { Pending => "pending", Active => "active", Inactive => "inactive" }
    AlertKind {
        Earthquake => "earthquake",
        Safety => "safety",
        Family => "family",
        Emergency => "emergency",
    }
    Severity { Low => "low", Medium => "medium", High => "high" }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_forms_are_snake_case() {
        assert_eq!(serde_json::to_string(&PinKind::Damaged).unwrap(), "\"damaged\"");
        assert_eq!(serde_json::to_string(&PinStatus::Confirmed).unwrap(), "\"confirmed\"");
        assert_eq!(serde_json::to_string(&Urgency::High).unwrap(), "\"high\"");
        assert_eq!(serde_json::to_string(&RequestStatus::Assigned).unwrap(), "\"assigned\"");
        assert_eq!(serde_json::to_string(&VolunteerStatus::Active).unwrap(), "\"active\"");
        assert_eq!(serde_json::to_string(&OrgStatus::Pending).unwrap(), "\"pending\"");
    }

    #[test]
    fn test_display_matches_wire_form() {
        assert_eq!(PinStatus::Confirmed.to_string(), "confirmed");
        assert_eq!(VolunteerStatus::Inactive.to_string(), "inactive");
        assert_eq!(AlertKind::Earthquake.to_string(), "earthquake");
    }

    #[test]
    fn test_urgency_ordering() {
        assert!(Urgency::High > Urgency::Medium);
        assert!(Urgency::Medium > Urgency::Low);
    }

    #[test]
    fn test_defaults_are_pending() {
        assert_eq!(PinStatus::default(), PinStatus::Pending);
        assert_eq!(RequestStatus::default(), RequestStatus::Pending);
        assert_eq!(VolunteerStatus::default(), VolunteerStatus::Pending);
        assert_eq!(OrgStatus::default(), OrgStatus::Pending);
    }
}
