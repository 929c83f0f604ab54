//! Organization directory: registration, approval, updates, deletion.
//!
//! Organizations are registered by the admin, enter as `pending`, and get
//! an operator account alongside the directory record. Deleting an
//! organization orphans its volunteers (records kept, affiliation cleared)
//! and drops its operator accounts.

use chrono::Utc;
use reliefmap_core::{Contact, Email, Funding, OrgStatus, OrganizationId, Phone};
use secrecy::SecretString;

use crate::authz::{self, Action};
use crate::models::{CurrentActor, OrgFinancials, Organization, OrganizationView, Supplies};

use super::{Store, StoreError};

/// Directory registration input.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RegisterOrganization {
    pub name: String,
    pub username: String,
    pub password: String,
    pub region: String,
    pub funding: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub volunteer_count: u32,
    #[serde(default)]
    pub supplies: Option<Supplies>,
}

/// Partial update, merged field by field. The id and creation time never
/// change.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct UpdateOrganization {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub funding: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub volunteer_count: Option<u32>,
    #[serde(default)]
    pub supplies: Option<Supplies>,
}

impl Store {
    /// Registers an organization and its operator account. The directory
    /// entry enters as `pending` until approved.
    ///
    /// # Errors
    ///
    /// [`StoreError::AuthorizationDenied`] unless the actor is the admin,
    /// [`StoreError::Validation`] for blank or malformed fields, and
    /// [`StoreError::Conflict`] when the username is taken.
    pub fn register_organization(
        &self,
        actor: &CurrentActor,
        input: RegisterOrganization,
    ) -> Result<OrganizationView, StoreError> {
        authz::require(actor.role, Action::RegisterOrganization)?;

        let name = input.name.trim();
        let username = input.username.trim();
        let region = input.region.trim();
        if name.is_empty() || username.is_empty() || region.is_empty() {
            return Err(StoreError::Validation(
                "name, username and region must not be empty".to_owned(),
            ));
        }
        if input.password.is_empty() {
            return Err(StoreError::Validation("password must not be empty".to_owned()));
        }
        let funding =
            Funding::parse(&input.funding).map_err(|e| StoreError::Validation(e.to_string()))?;
        let email =
            Email::parse(&input.email).map_err(|e| StoreError::Validation(e.to_string()))?;
        let phone =
            Phone::parse(&input.phone).map_err(|e| StoreError::Validation(e.to_string()))?;

        self.write(|inner| {
            if inner.accounts.values().any(|a| a.username == username)
                || inner.organizations.values().any(|o| o.username == username)
            {
                return Err(StoreError::Conflict(format!(
                    "username '{username}' is already taken"
                )));
            }
            let org = Organization {
                id: OrganizationId::new(),
                name: name.to_owned(),
                username: username.to_owned(),
                secret: SecretString::from(input.password.clone()),
                region: region.to_owned(),
                funding,
                volunteer_count: input.volunteer_count,
                status: OrgStatus::Pending,
                contact: Contact { email, phone },
                supplies: input.supplies,
                created_at: Utc::now(),
            };
            Self::insert_operator(
                inner,
                name,
                username,
                SecretString::from(input.password.clone()),
                org.id,
            );
            let view = OrganizationView::from(&org);
            inner.organizations.insert(org.id, org);
            Ok(view)
        })
    }

    /// Public directory listing, newest first. Credentials never leave the
    /// store.
    #[must_use]
    pub fn list_organizations(&self) -> Vec<OrganizationView> {
        self.read(|inner| {
            let mut orgs: Vec<&Organization> = inner.organizations.values().collect();
            orgs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            orgs.into_iter().map(OrganizationView::from).collect()
        })
    }

    /// Approves a pending organization.
    ///
    /// # Errors
    ///
    /// [`StoreError::AuthorizationDenied`] unless the actor is the admin
    /// and [`StoreError::NotFound`] for an unknown id.
    pub fn approve_organization(
        &self,
        actor: &CurrentActor,
        id: OrganizationId,
    ) -> Result<OrganizationView, StoreError> {
        self.set_org_status(actor, id, Action::ApproveOrganization, OrgStatus::Active)
    }

    /// Rejects an organization, marking it inactive.
    ///
    /// # Errors
    ///
    /// As [`Self::approve_organization`].
    pub fn reject_organization(
        &self,
        actor: &CurrentActor,
        id: OrganizationId,
    ) -> Result<OrganizationView, StoreError> {
        self.set_org_status(actor, id, Action::RejectOrganization, OrgStatus::Inactive)
    }

    fn set_org_status(
        &self,
        actor: &CurrentActor,
        id: OrganizationId,
        action: Action,
        status: OrgStatus,
    ) -> Result<OrganizationView, StoreError> {
        authz::require(actor.role, action)?;
        self.write(|inner| {
            let org = inner
                .organizations
                .get_mut(&id)
                .ok_or(StoreError::NotFound("organization"))?;
            org.status = status;
            Ok(OrganizationView::from(&*org))
        })
    }

    /// Merges the provided fields into an organization record.
    ///
    /// # Errors
    ///
    /// [`StoreError::AuthorizationDenied`] unless the actor is the admin,
    /// [`StoreError::NotFound`] for an unknown id, and
    /// [`StoreError::Validation`] for malformed replacement values.
    pub fn update_organization(
        &self,
        actor: &CurrentActor,
        id: OrganizationId,
        input: UpdateOrganization,
    ) -> Result<OrganizationView, StoreError> {
        authz::require(actor.role, Action::UpdateOrganization)?;

        // Parse replacements up front so a bad field leaves the record
        // untouched.
        let funding = input
            .funding
            .as_deref()
            .map(Funding::parse)
            .transpose()
            .map_err(|e| StoreError::Validation(e.to_string()))?;
        let email = input
            .email
            .as_deref()
            .map(Email::parse)
            .transpose()
            .map_err(|e| StoreError::Validation(e.to_string()))?;
        let phone = input
            .phone
            .as_deref()
            .map(Phone::parse)
            .transpose()
            .map_err(|e| StoreError::Validation(e.to_string()))?;
        if let Some(name) = &input.name {
            if name.trim().is_empty() {
                return Err(StoreError::Validation("name must not be empty".to_owned()));
            }
        }

        self.write(|inner| {
            let org = inner
                .organizations
                .get_mut(&id)
                .ok_or(StoreError::NotFound("organization"))?;
            if let Some(name) = input.name {
                org.name = name.trim().to_owned();
            }
            if let Some(region) = input.region {
                org.region = region.trim().to_owned();
            }
            if let Some(funding) = funding {
                org.funding = funding;
            }
            if let Some(email) = email {
                org.contact.email = email;
            }
            if let Some(phone) = phone {
                org.contact.phone = phone;
            }
            if let Some(count) = input.volunteer_count {
                org.volunteer_count = count;
            }
            if let Some(supplies) = input.supplies {
                org.supplies = Some(supplies);
            }
            Ok(OrganizationView::from(&*org))
        })
    }

    /// Deletes an organization. Its volunteers keep their roster records
    /// with the affiliation cleared; its operator accounts are dropped.
    ///
    /// # Errors
    ///
    /// [`StoreError::AuthorizationDenied`] unless the actor is the admin
    /// and [`StoreError::NotFound`] for an unknown id.
    pub fn delete_organization(
        &self,
        actor: &CurrentActor,
        id: OrganizationId,
    ) -> Result<(), StoreError> {
        authz::require(actor.role, Action::DeleteOrganization)?;
        self.write(|inner| {
            if inner.organizations.remove(&id).is_none() {
                return Err(StoreError::NotFound("organization"));
            }
            for volunteer in inner.volunteers.values_mut() {
                if volunteer.organization_id == Some(id) {
                    volunteer.organization_id = None;
                }
            }
            inner.accounts.retain(|_, a| a.organization_id != Some(id));
            Ok(())
        })
    }

    /// Funding and supplies for one organization. Visible to the admin and
    /// to the organization itself.
    ///
    /// # Errors
    ///
    /// [`StoreError::AuthorizationDenied`] for anyone else and
    /// [`StoreError::NotFound`] for an unknown id.
    pub fn org_financials(
        &self,
        actor: &CurrentActor,
        id: OrganizationId,
    ) -> Result<OrgFinancials, StoreError> {
        if !authz::can_view_financials(actor, id) {
            return Err(StoreError::AuthorizationDenied(
                Action::ViewOrgFinancials.name(),
            ));
        }
        self.read(|inner| {
            inner
                .organizations
                .get(&id)
                .map(OrgFinancials::from)
                .ok_or(StoreError::NotFound("organization"))
        })
    }
}
