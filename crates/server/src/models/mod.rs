//! Domain models for the coordination core.
//!
//! Each registry in [`crate::store`] exclusively owns its entity collection;
//! cross-references between entities (`assigned_to`, `organization_id`) are
//! non-owning id/name lookups, never object ownership.

pub mod actor;
pub mod alert;
pub mod organization;
pub mod pin;
pub mod request;
pub mod volunteer;

pub use actor::{Actor, CurrentActor, session_keys};
pub use alert::Alert;
pub use organization::{Organization, OrganizationView, OrgFinancials, Supplies};
pub use pin::Pin;
pub use request::HelpRequest;
pub use volunteer::Volunteer;
