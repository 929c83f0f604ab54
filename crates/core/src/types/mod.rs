//! Core types for ReliefMap.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod contact;
pub mod funding;
pub mod id;
pub mod role;
pub mod status;

pub use contact::{Contact, Email, EmailError, Phone, PhoneError};
pub use funding::{Funding, FundingError};
pub use id::{ActorId, AlertId, HelpRequestId, OrganizationId, PinId, VolunteerId};
pub use role::{Role, RoleParseError, VolunteerRole};
pub use status::{
    AlertKind, OrgStatus, PinKind, PinStatus, RequestStatus, Severity, Urgency, VolunteerStatus,
};
