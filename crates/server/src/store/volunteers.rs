//! Volunteer roster: registration, approval, removal.
//!
//! Roster entries belong to an organization; approval and removal are
//! scoped so an operator can only manage their own roster. Removing a
//! volunteer reopens any help request still assigned to them.

use chrono::Utc;
use reliefmap_core::{
    Contact, Email, OrganizationId, Phone, RequestStatus, VolunteerId, VolunteerRole,
    VolunteerStatus,
};

use crate::authz::{self, Action};
use crate::models::{CurrentActor, Volunteer};

use super::{Store, StoreError};

/// Roster registration input.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RegisterVolunteer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: VolunteerRole,
    pub location: String,
    pub organization_id: OrganizationId,
}

impl Store {
    /// Registers a volunteer with an organization. New entries start
    /// `pending` with no completed assignments.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] for blank or malformed fields and
    /// [`StoreError::NotFound`] when the organization does not exist.
    pub fn register_volunteer(
        &self,
        actor: &CurrentActor,
        input: RegisterVolunteer,
    ) -> Result<Volunteer, StoreError> {
        authz::require(actor.role, Action::RegisterVolunteer)?;

        let name = input.name.trim();
        let location = input.location.trim();
        if name.is_empty() || location.is_empty() {
            return Err(StoreError::Validation(
                "name and location must not be empty".to_owned(),
            ));
        }
        let email =
            Email::parse(&input.email).map_err(|e| StoreError::Validation(e.to_string()))?;
        let phone =
            Phone::parse(&input.phone).map_err(|e| StoreError::Validation(e.to_string()))?;

        self.write(|inner| {
            if !inner.organizations.contains_key(&input.organization_id) {
                return Err(StoreError::NotFound("organization"));
            }
            let volunteer = Volunteer {
                id: VolunteerId::new(),
                name: name.to_owned(),
                contact: Contact { email, phone },
                role: input.role,
                status: VolunteerStatus::Pending,
                location: location.to_owned(),
                organization_id: Some(input.organization_id),
                joined_at: Utc::now(),
                assignments_completed: 0,
            };
            inner.volunteers.insert(volunteer.id, volunteer.clone());
            Ok(volunteer)
        })
    }

    /// The full roster, newest first. Organization operators get only
    /// their own roster.
    #[must_use]
    pub fn list_volunteers(&self, actor: &CurrentActor) -> Vec<Volunteer> {
        self.read(|inner| {
            let mut roster: Vec<Volunteer> = inner
                .volunteers
                .values()
                .filter(|v| match actor.organization_id {
                    Some(org) if actor.role == reliefmap_core::Role::Organization => {
                        v.organization_id == Some(org)
                    }
                    _ => true,
                })
                .cloned()
                .collect();
            roster.sort_by(|a, b| b.joined_at.cmp(&a.joined_at));
            roster
        })
    }

    /// Approves a roster entry, making the volunteer eligible for
    /// assignment. Approving an already-active volunteer changes nothing.
    ///
    /// # Errors
    ///
    /// [`StoreError::AuthorizationDenied`] for a non-operator or another
    /// organization's roster, and [`StoreError::NotFound`] for an unknown
    /// id.
    pub fn approve_volunteer(
        &self,
        actor: &CurrentActor,
        id: VolunteerId,
    ) -> Result<Volunteer, StoreError> {
        self.set_volunteer_status(actor, id, Action::ApproveVolunteer, VolunteerStatus::Active)
    }

    /// Rejects a roster entry, marking the volunteer inactive.
    ///
    /// # Errors
    ///
    /// As [`Self::approve_volunteer`].
    pub fn reject_volunteer(
        &self,
        actor: &CurrentActor,
        id: VolunteerId,
    ) -> Result<Volunteer, StoreError> {
        self.set_volunteer_status(actor, id, Action::RejectVolunteer, VolunteerStatus::Inactive)
    }

    fn set_volunteer_status(
        &self,
        actor: &CurrentActor,
        id: VolunteerId,
        action: Action,
        status: VolunteerStatus,
    ) -> Result<Volunteer, StoreError> {
        self.write(|inner| {
            let volunteer = inner
                .volunteers
                .get_mut(&id)
                .ok_or(StoreError::NotFound("volunteer"))?;
            authz::require_scoped(actor, action, volunteer.organization_id)?;
            volunteer.status = status;
            Ok(volunteer.clone())
        })
    }

    /// Removes a volunteer from the roster. Any help request still assigned
    /// to them reopens as `pending` with its assignment cleared.
    ///
    /// # Errors
    ///
    /// [`StoreError::AuthorizationDenied`] for a non-operator or another
    /// organization's roster, and [`StoreError::NotFound`] for an unknown
    /// id.
    pub fn remove_volunteer(&self, actor: &CurrentActor, id: VolunteerId) -> Result<(), StoreError> {
        self.write(|inner| {
            let volunteer = inner
                .volunteers
                .get(&id)
                .ok_or(StoreError::NotFound("volunteer"))?;
            authz::require_scoped(actor, Action::RemoveVolunteer, volunteer.organization_id)?;

            for request in inner.requests.values_mut() {
                if request.status == RequestStatus::Assigned
                    && request.assigned_volunteer == Some(id)
                {
                    request.status = RequestStatus::Pending;
                    request.assigned_to = None;
                    request.assigned_volunteer = None;
                }
            }
            inner.volunteers.remove(&id);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reliefmap_core::{ActorId, Role, Urgency};

    use crate::store::requests::SubmitRequest;

    fn seeded_org(store: &Store) -> OrganizationId {
        let id = OrganizationId::new();
        store.write(|inner| {
            inner
                .organizations
                .insert(id, crate::store::organizations::tests::bare_org(id));
        });
        id
    }

    fn operator(org: OrganizationId) -> CurrentActor {
        CurrentActor {
            id: ActorId::new(),
            name: "Operator".to_owned(),
            role: Role::Organization,
            organization_id: Some(org),
        }
    }

    fn member(role: Role) -> CurrentActor {
        CurrentActor {
            id: ActorId::new(),
            name: "Member".to_owned(),
            role,
            organization_id: None,
        }
    }

    fn registration(org: OrganizationId) -> RegisterVolunteer {
        RegisterVolunteer {
            name: "Thiri".to_owned(),
            email: "thiri@example.com".to_owned(),
            phone: "+95 9 1234 5678".to_owned(),
            role: VolunteerRole::SupplyVolunteer,
            location: "Yangon".to_owned(),
            organization_id: org,
        }
    }

    #[test]
    fn test_registration_starts_pending() {
        let store = Store::new();
        let org = seeded_org(&store);
        let volunteer = store
            .register_volunteer(&member(Role::User), registration(org))
            .unwrap();
        assert_eq!(volunteer.status, VolunteerStatus::Pending);
        assert_eq!(volunteer.assignments_completed, 0);
    }

    #[test]
    fn test_registration_requires_existing_org() {
        let store = Store::new();
        assert!(matches!(
            store
                .register_volunteer(&member(Role::User), registration(OrganizationId::new()))
                .unwrap_err(),
            StoreError::NotFound("organization")
        ));
    }

    #[test]
    fn test_bad_email_rejected() {
        let store = Store::new();
        let org = seeded_org(&store);
        let mut bad = registration(org);
        bad.email = "not-an-email".to_owned();
        assert!(matches!(
            store.register_volunteer(&member(Role::User), bad).unwrap_err(),
            StoreError::Validation(_)
        ));
    }

    #[test]
    fn test_approve_and_reject_are_org_scoped() {
        let store = Store::new();
        let org = seeded_org(&store);
        let other = seeded_org(&store);
        let volunteer = store
            .register_volunteer(&member(Role::User), registration(org))
            .unwrap();

        assert!(matches!(
            store
                .approve_volunteer(&operator(other), volunteer.id)
                .unwrap_err(),
            StoreError::AuthorizationDenied(_)
        ));

        let approved = store.approve_volunteer(&operator(org), volunteer.id).unwrap();
        assert_eq!(approved.status, VolunteerStatus::Active);

        // Approving again is a no-op, not an error.
        let again = store.approve_volunteer(&operator(org), volunteer.id).unwrap();
        assert_eq!(again.status, VolunteerStatus::Active);

        let rejected = store.reject_volunteer(&operator(org), volunteer.id).unwrap();
        assert_eq!(rejected.status, VolunteerStatus::Inactive);
    }

    #[test]
    fn test_operator_roster_is_scoped() {
        let store = Store::new();
        let org = seeded_org(&store);
        let other = seeded_org(&store);
        store
            .register_volunteer(&member(Role::User), registration(org))
            .unwrap();
        store
            .register_volunteer(&member(Role::User), registration(other))
            .unwrap();

        assert_eq!(store.list_volunteers(&operator(org)).len(), 1);
        assert_eq!(store.list_volunteers(&member(Role::Admin)).len(), 2);
    }

    #[test]
    fn test_removal_reopens_assigned_requests() {
        let store = Store::new();
        let org = seeded_org(&store);
        let op = operator(org);
        let volunteer = store
            .register_volunteer(&member(Role::User), registration(org))
            .unwrap();
        store.approve_volunteer(&op, volunteer.id).unwrap();

        let request = store
            .submit_request(
                &member(Role::User),
                SubmitRequest {
                    title: "Water".to_owned(),
                    description: "Water for 40 people".to_owned(),
                    location: "Hlaing".to_owned(),
                    urgency: Urgency::High,
                },
            )
            .unwrap();
        store.assign_volunteer(&op, request.id, volunteer.id).unwrap();

        store.remove_volunteer(&op, volunteer.id).unwrap();

        let reopened = store.find_request(request.id).unwrap();
        assert_eq!(reopened.status, RequestStatus::Pending);
        assert!(reopened.assigned_to.is_none());
        assert!(store.list_volunteers(&op).is_empty());
    }
}
