//! Help request ledger: submission and listing.
//!
//! Assignment and completion cross into the volunteer roster and live in
//! `services::matcher`.

use chrono::Utc;
use reliefmap_core::{HelpRequestId, RequestStatus, Urgency};

use crate::authz::{self, Action};
use crate::models::{CurrentActor, HelpRequest};

use super::{Store, StoreError};

/// Help request submission input.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct SubmitRequest {
    pub title: String,
    pub description: String,
    pub location: String,
    pub urgency: Urgency,
}

impl Store {
    /// Submits a new help request. Requests always enter as `pending`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] for blank title, description, or
    /// location.
    pub fn submit_request(
        &self,
        actor: &CurrentActor,
        input: SubmitRequest,
    ) -> Result<HelpRequest, StoreError> {
        authz::require(actor.role, Action::SubmitHelpRequest)?;

        let title = input.title.trim();
        let description = input.description.trim();
        let location = input.location.trim();
        if title.is_empty() || description.is_empty() || location.is_empty() {
            return Err(StoreError::Validation(
                "title, description and location must not be empty".to_owned(),
            ));
        }

        let request = HelpRequest {
            id: HelpRequestId::new(),
            title: title.to_owned(),
            description: description.to_owned(),
            location: location.to_owned(),
            urgency: input.urgency,
            status: RequestStatus::Pending,
            requested_by: actor.name.clone(),
            requested_at: Utc::now(),
            assigned_to: None,
            assigned_volunteer: None,
        };
        self.write(|inner| {
            inner.requests.insert(request.id, request.clone());
        });
        Ok(request)
    }

    /// All help requests, most urgent first, then newest first within the
    /// same urgency.
    #[must_use]
    pub fn list_requests(&self) -> Vec<HelpRequest> {
        self.read(|inner| {
            let mut requests: Vec<HelpRequest> = inner.requests.values().cloned().collect();
            requests.sort_by(|a, b| {
                b.urgency
                    .cmp(&a.urgency)
                    .then_with(|| b.requested_at.cmp(&a.requested_at))
            });
            requests
        })
    }

    /// Looks up a single request.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown id.
    pub fn find_request(&self, id: HelpRequestId) -> Result<HelpRequest, StoreError> {
        self.read(|inner| {
            inner
                .requests
                .get(&id)
                .cloned()
                .ok_or(StoreError::NotFound("help request"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reliefmap_core::{ActorId, Role};

    fn requester() -> CurrentActor {
        CurrentActor {
            id: ActorId::new(),
            name: "Ko Min".to_owned(),
            role: Role::User,
            organization_id: None,
        }
    }

    fn submission(title: &str, urgency: Urgency) -> SubmitRequest {
        SubmitRequest {
            title: title.to_owned(),
            description: "Water for 40 people".to_owned(),
            location: "Hlaing Township".to_owned(),
            urgency,
        }
    }

    #[test]
    fn test_submission_enters_pending() {
        let store = Store::new();
        let request = store
            .submit_request(&requester(), submission("Water", Urgency::High))
            .unwrap();
        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(request.requested_by, "Ko Min");
        assert!(request.assigned_to.is_none());
    }

    #[test]
    fn test_blank_location_rejected() {
        let store = Store::new();
        let mut bad = submission("Water", Urgency::Low);
        bad.location = " ".to_owned();
        assert!(matches!(
            store.submit_request(&requester(), bad).unwrap_err(),
            StoreError::Validation(_)
        ));
    }

    #[test]
    fn test_listing_orders_by_urgency_then_recency() {
        let store = Store::new();
        let who = requester();
        store
            .submit_request(&who, submission("low", Urgency::Low))
            .unwrap();
        store
            .submit_request(&who, submission("high", Urgency::High))
            .unwrap();
        store
            .submit_request(&who, submission("medium", Urgency::Medium))
            .unwrap();

        let listed = store.list_requests();
        let titles: Vec<&str> = listed.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["high", "medium", "low"]);
    }

    #[test]
    fn test_find_unknown_request() {
        let store = Store::new();
        assert!(matches!(
            store.find_request(HelpRequestId::new()).unwrap_err(),
            StoreError::NotFound("help request")
        ));
    }
}
