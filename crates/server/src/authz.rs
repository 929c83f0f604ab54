//! Authorization gate: the capability table consulted before every mutation.
//!
//! [`permits`] is a pure function of role and action - no hidden state, no
//! side effects. State preconditions (a pin must be `pending` to be
//! confirmed, a volunteer must be `active` to be assigned) are enforced by
//! the registries themselves; the gate decides only whether the *role* may
//! attempt the action. A deny is advisory: callers surface
//! [`StoreError::AuthorizationDenied`] and apply nothing.
//!
//! Keeping the full rule set in one match arm per action keeps it auditable;
//! role checks must never be scattered through handlers.

use reliefmap_core::{OrganizationId, Role};

use crate::models::CurrentActor;
use crate::store::StoreError;

/// Every mutating (or access-restricted) operation the core exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Report a new pin.
    CreatePin,
    /// Confirm a pending pin.
    ConfirmPin,
    /// Deny (delete) a pending pin.
    DenyPin,
    /// Mark a confirmed damage pin completed after supply delivery.
    CompletePin,
    /// Submit a help request.
    SubmitHelpRequest,
    /// Bind a help request to a volunteer.
    AssignVolunteer,
    /// Mark an assigned help request completed.
    CompleteHelpRequest,
    /// Join an organization's roster.
    RegisterVolunteer,
    /// Approve a pending roster entry.
    ApproveVolunteer,
    /// Reject a roster entry.
    RejectVolunteer,
    /// Remove a volunteer from the roster.
    RemoveVolunteer,
    /// Register a new organization in the directory.
    RegisterOrganization,
    /// Approve a pending organization.
    ApproveOrganization,
    /// Reject an organization.
    RejectOrganization,
    /// Merge updated fields into an organization record.
    UpdateOrganization,
    /// Delete an organization from the directory.
    DeleteOrganization,
    /// Read an organization's funding and supplies.
    ViewOrgFinancials,
    /// Publish a platform alert.
    PublishAlert,
}

impl Action {
    /// Short name used in denial messages and logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CreatePin => "create pin",
            Self::ConfirmPin => "confirm pin",
            Self::DenyPin => "deny pin",
            Self::CompletePin => "complete pin",
            Self::SubmitHelpRequest => "submit help request",
            Self::AssignVolunteer => "assign volunteer",
            Self::CompleteHelpRequest => "complete help request",
            Self::RegisterVolunteer => "register volunteer",
            Self::ApproveVolunteer => "approve volunteer",
            Self::RejectVolunteer => "reject volunteer",
            Self::RemoveVolunteer => "remove volunteer",
            Self::RegisterOrganization => "register organization",
            Self::ApproveOrganization => "approve organization",
            Self::RejectOrganization => "reject organization",
            Self::UpdateOrganization => "update organization",
            Self::DeleteOrganization => "delete organization",
            Self::ViewOrgFinancials => "view organization financials",
            Self::PublishAlert => "publish alert",
        }
    }
}

/// The capability table: may `role` perform `action`?
#[must_use]
pub const fn permits(role: Role, action: Action) -> bool {
    match action {
        // Any authenticated actor can report incidents, ask for help, or
        // put themselves forward as a volunteer.
        Action::CreatePin | Action::SubmitHelpRequest | Action::RegisterVolunteer => true,

        // Pin verification belongs to tracking volunteers.
        Action::ConfirmPin | Action::DenyPin => matches!(role, Role::TrackingVolunteer),

        // Delivery completion belongs to supply volunteers.
        Action::CompletePin => matches!(role, Role::SupplyVolunteer),

        // Roster and assignment management belongs to organization operators.
        Action::AssignVolunteer
        | Action::CompleteHelpRequest
        | Action::ApproveVolunteer
        | Action::RejectVolunteer
        | Action::RemoveVolunteer => matches!(role, Role::Organization),

        // Directory lifecycle and alerts are admin-only.
        Action::RegisterOrganization
        | Action::ApproveOrganization
        | Action::RejectOrganization
        | Action::UpdateOrganization
        | Action::DeleteOrganization
        | Action::PublishAlert => matches!(role, Role::Admin),

        // Financials: admin, or the organization itself (scoped check in
        // `can_view_financials`).
        Action::ViewOrgFinancials => matches!(role, Role::Admin | Role::Organization),
    }
}

/// Gate helper: deny with a uniform error when the table says no.
///
/// # Errors
///
/// Returns [`StoreError::AuthorizationDenied`] naming the action.
pub const fn require(role: Role, action: Action) -> Result<(), StoreError> {
    if permits(role, action) {
        Ok(())
    } else {
        Err(StoreError::AuthorizationDenied(action.name()))
    }
}

/// Scoped check: organization-role actions apply only to the actor's own
/// organization.
///
/// # Errors
///
/// Returns [`StoreError::AuthorizationDenied`] when the actor's role fails
/// the table or the target organization is not the actor's own.
pub fn require_scoped(
    actor: &CurrentActor,
    action: Action,
    target_org: Option<OrganizationId>,
) -> Result<(), StoreError> {
    require(actor.role, action)?;
    if actor.role == Role::Admin {
        return Ok(());
    }
    if actor.organization_id.is_some() && actor.organization_id == target_org {
        Ok(())
    } else {
        Err(StoreError::AuthorizationDenied(action.name()))
    }
}

/// May this actor read the funding/supplies of `org`?
#[must_use]
pub fn can_view_financials(actor: &CurrentActor, org: OrganizationId) -> bool {
    match actor.role {
        Role::Admin => true,
        Role::Organization => actor.organization_id == Some(org),
        _ => false,
    }
}
