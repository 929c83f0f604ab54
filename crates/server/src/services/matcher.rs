//! Assignment matcher: binds help requests to supply volunteers.
//!
//! Both `assign` and `complete` touch two records (the request and the
//! volunteer). All preconditions are checked before either record is
//! mutated, and the whole operation runs under the store's write lock, so
//! a failure never leaves a half-applied assignment.

use reliefmap_core::{
    HelpRequestId, RequestStatus, Role, VolunteerId, VolunteerRole, VolunteerStatus,
};

use crate::authz::{self, Action};
use crate::models::{CurrentActor, HelpRequest, Volunteer};
use crate::store::{Store, StoreError};

impl Store {
    /// Volunteers eligible to take an assignment: active supply volunteers,
    /// restricted to the operator's own roster.
    ///
    /// # Errors
    ///
    /// [`StoreError::AuthorizationDenied`] unless the actor is an
    /// organization operator.
    pub fn eligible_candidates(
        &self,
        actor: &CurrentActor,
    ) -> Result<Vec<Volunteer>, StoreError> {
        authz::require(actor.role, Action::AssignVolunteer)?;
        Ok(self.read(|inner| {
            let mut candidates: Vec<Volunteer> = inner
                .volunteers
                .values()
                .filter(|v| {
                    v.status == VolunteerStatus::Active
                        && v.role == VolunteerRole::SupplyVolunteer
                        && (actor.role != Role::Organization
                            || v.organization_id == actor.organization_id)
                })
                .cloned()
                .collect();
            candidates.sort_by(|a, b| a.name.cmp(&b.name));
            candidates
        }))
    }

    /// Binds a pending help request to an active supply volunteer.
    ///
    /// # Errors
    ///
    /// [`StoreError::AuthorizationDenied`] unless an operator assigning
    /// from their own roster, [`StoreError::NotFound`] for an unknown
    /// request or volunteer, [`StoreError::Conflict`] when the request is
    /// not pending, and [`StoreError::VolunteerUnavailable`] when the
    /// volunteer is not an active supply volunteer. On any error neither
    /// record changes.
    pub fn assign_volunteer(
        &self,
        actor: &CurrentActor,
        request_id: HelpRequestId,
        volunteer_id: VolunteerId,
    ) -> Result<HelpRequest, StoreError> {
        self.write(|inner| {
            let volunteer = inner
                .volunteers
                .get(&volunteer_id)
                .ok_or(StoreError::NotFound("volunteer"))?;
            authz::require_scoped(actor, Action::AssignVolunteer, volunteer.organization_id)?;
            if volunteer.status != VolunteerStatus::Active {
                return Err(StoreError::VolunteerUnavailable(format!(
                    "{} is {}",
                    volunteer.name, volunteer.status
                )));
            }
            if volunteer.role != VolunteerRole::SupplyVolunteer {
                return Err(StoreError::VolunteerUnavailable(format!(
                    "{} is not a supply volunteer",
                    volunteer.name
                )));
            }
            let volunteer_name = volunteer.name.clone();

            let request = inner
                .requests
                .get_mut(&request_id)
                .ok_or(StoreError::NotFound("help request"))?;
            match request.status {
                RequestStatus::Pending => {}
                RequestStatus::Assigned => {
                    return Err(StoreError::Conflict(
                        "help request is already assigned".to_owned(),
                    ));
                }
                RequestStatus::Completed => {
                    return Err(StoreError::InvalidTransition {
                        action: "assign",
                        entity: "help request",
                        status: request.status.to_string(),
                    });
                }
            }

            request.status = RequestStatus::Assigned;
            request.assigned_to = Some(volunteer_name);
            request.assigned_volunteer = Some(volunteer_id);
            Ok(request.clone())
        })
    }

    /// Marks an assigned help request completed and credits the volunteer
    /// with one completed assignment. The two updates happen together or
    /// not at all.
    ///
    /// # Errors
    ///
    /// [`StoreError::AuthorizationDenied`] unless an operator completing
    /// within their own roster, [`StoreError::NotFound`] for an unknown
    /// request or a missing assigned volunteer, and
    /// [`StoreError::InvalidTransition`] when the request is not assigned.
    pub fn complete_request(
        &self,
        actor: &CurrentActor,
        request_id: HelpRequestId,
    ) -> Result<HelpRequest, StoreError> {
        self.write(|inner| {
            let request = inner
                .requests
                .get(&request_id)
                .ok_or(StoreError::NotFound("help request"))?;
            if request.status != RequestStatus::Assigned {
                return Err(StoreError::InvalidTransition {
                    action: "complete",
                    entity: "help request",
                    status: request.status.to_string(),
                });
            }
            let volunteer_id = request
                .assigned_volunteer
                .ok_or(StoreError::NotFound("assigned volunteer"))?;

            // Validate the volunteer side fully before mutating anything.
            let volunteer_org = inner
                .volunteers
                .get(&volunteer_id)
                .ok_or(StoreError::NotFound("assigned volunteer"))?
                .organization_id;
            authz::require_scoped(actor, Action::CompleteHelpRequest, volunteer_org)?;

            if let Some(volunteer) = inner.volunteers.get_mut(&volunteer_id) {
                volunteer.assignments_completed += 1;
            }
            if let Some(request) = inner.requests.get_mut(&request_id) {
                request.status = RequestStatus::Completed;
                return Ok(request.clone());
            }
            Err(StoreError::NotFound("help request"))
        })
    }
}
