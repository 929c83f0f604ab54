//! Incident pin registry and its verification lifecycle.
//!
//! Pins move `pending -> confirmed -> completed`; `deny` removes a pending
//! pin outright. Reports from tracking volunteers are trusted and enter the
//! registry already confirmed.

use chrono::Utc;
use reliefmap_core::{PinId, PinKind, PinStatus, Role};

use crate::authz::{self, Action};
use crate::models::{CurrentActor, Pin};

use super::{Store, StoreError};

/// Pin report input.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ReportPin {
    pub kind: PinKind,
    pub title: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub image: Option<String>,
}

impl Store {
    /// Reports a new pin. The report enters as `pending` unless the actor
    /// is a tracking volunteer, whose reports are trusted and confirmed on
    /// entry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] for a blank title or description
    /// or coordinates outside WGS84 range, and
    /// [`StoreError::AuthorizationDenied`] if the gate refuses the role.
    pub fn report_pin(&self, actor: &CurrentActor, input: ReportPin) -> Result<Pin, StoreError> {
        authz::require(actor.role, Action::CreatePin)?;

        let title = input.title.trim();
        let description = input.description.trim();
        if title.is_empty() || description.is_empty() {
            return Err(StoreError::Validation(
                "title and description must not be empty".to_owned(),
            ));
        }
        if !(-90.0..=90.0).contains(&input.lat) || !(-180.0..=180.0).contains(&input.lng) {
            return Err(StoreError::Validation(format!(
                "coordinates ({}, {}) are out of range",
                input.lat, input.lng
            )));
        }

        let status = if actor.role == Role::TrackingVolunteer {
            PinStatus::Confirmed
        } else {
            PinStatus::Pending
        };
        let pin = Pin {
            id: PinId::new(),
            kind: input.kind,
            status,
            title: title.to_owned(),
            description: description.to_owned(),
            lat: input.lat,
            lng: input.lng,
            created_by: actor.name.clone(),
            created_at: Utc::now(),
            assigned_to: None,
            image: input.image,
        };
        self.write(|inner| {
            inner.pins.insert(pin.id, pin.clone());
        });
        Ok(pin)
    }

    /// Pins visible to the actor, newest first. Supply volunteers get the
    /// delivery worklist: confirmed damage pins only. Everyone else sees
    /// the full registry.
    #[must_use]
    pub fn list_pins(&self, actor: &CurrentActor) -> Vec<Pin> {
        self.read(|inner| {
            let mut pins: Vec<Pin> = inner
                .pins
                .values()
                .filter(|pin| {
                    if actor.role == Role::SupplyVolunteer {
                        pin.kind == PinKind::Damaged && pin.status == PinStatus::Confirmed
                    } else {
                        true
                    }
                })
                .cloned()
                .collect();
            pins.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            pins
        })
    }

    /// Confirms a pending pin.
    ///
    /// # Errors
    ///
    /// [`StoreError::AuthorizationDenied`] unless a tracking volunteer,
    /// [`StoreError::NotFound`] for an unknown id, and
    /// [`StoreError::InvalidTransition`] if the pin is not pending.
    pub fn confirm_pin(&self, actor: &CurrentActor, id: PinId) -> Result<Pin, StoreError> {
        authz::require(actor.role, Action::ConfirmPin)?;
        self.write(|inner| {
            let pin = inner.pins.get_mut(&id).ok_or(StoreError::NotFound("pin"))?;
            if pin.status != PinStatus::Pending {
                return Err(invalid_transition("confirm", pin.status));
            }
            pin.status = PinStatus::Confirmed;
            Ok(pin.clone())
        })
    }

    /// Denies a pending pin, removing it from the registry.
    ///
    /// # Errors
    ///
    /// As [`Self::confirm_pin`].
    pub fn deny_pin(&self, actor: &CurrentActor, id: PinId) -> Result<(), StoreError> {
        authz::require(actor.role, Action::DenyPin)?;
        self.write(|inner| {
            let pin = inner.pins.get(&id).ok_or(StoreError::NotFound("pin"))?;
            if pin.status != PinStatus::Pending {
                return Err(invalid_transition("deny", pin.status));
            }
            inner.pins.remove(&id);
            Ok(())
        })
    }

    /// Marks a confirmed damage pin completed after supplies were delivered,
    /// recording who delivered.
    ///
    /// # Errors
    ///
    /// [`StoreError::AuthorizationDenied`] unless a supply volunteer,
    /// [`StoreError::NotFound`] for an unknown id, and
    /// [`StoreError::InvalidTransition`] if the pin is not a confirmed
    /// damage pin.
    pub fn complete_pin(&self, actor: &CurrentActor, id: PinId) -> Result<Pin, StoreError> {
        authz::require(actor.role, Action::CompletePin)?;
        self.write(|inner| {
            let pin = inner.pins.get_mut(&id).ok_or(StoreError::NotFound("pin"))?;
            if pin.kind != PinKind::Damaged {
                return Err(StoreError::InvalidTransition {
                    action: "complete",
                    entity: "safe pin",
                    status: pin.status.to_string(),
                });
            }
            if pin.status != PinStatus::Confirmed {
                return Err(invalid_transition("complete", pin.status));
            }
            pin.status = PinStatus::Completed;
            pin.assigned_to = Some(actor.name.clone());
            Ok(pin.clone())
        })
    }
}

fn invalid_transition(action: &'static str, status: PinStatus) -> StoreError {
    StoreError::InvalidTransition {
        action,
        entity: "pin",
        status: status.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reliefmap_core::ActorId;

    fn actor(role: Role) -> CurrentActor {
        CurrentActor {
            id: ActorId::new(),
            name: format!("{role} actor"),
            role,
            organization_id: None,
        }
    }

    fn report(kind: PinKind) -> ReportPin {
        ReportPin {
            kind,
            title: "Collapsed bridge".to_owned(),
            description: "North end of Strand Road".to_owned(),
            lat: 16.84,
            lng: 96.17,
            image: None,
        }
    }

    #[test]
    fn test_user_report_enters_pending() {
        let store = Store::new();
        let pin = store
            .report_pin(&actor(Role::User), report(PinKind::Damaged))
            .unwrap();
        assert_eq!(pin.status, PinStatus::Pending);
    }

    #[test]
    fn test_tracking_report_enters_confirmed() {
        let store = Store::new();
        let pin = store
            .report_pin(&actor(Role::TrackingVolunteer), report(PinKind::Safe))
            .unwrap();
        assert_eq!(pin.status, PinStatus::Confirmed);
    }

    #[test]
    fn test_report_validation() {
        let store = Store::new();
        let mut bad = report(PinKind::Damaged);
        bad.title = "   ".to_owned();
        assert!(matches!(
            store.report_pin(&actor(Role::User), bad).unwrap_err(),
            StoreError::Validation(_)
        ));

        let mut bad = report(PinKind::Damaged);
        bad.lat = 91.0;
        assert!(matches!(
            store.report_pin(&actor(Role::User), bad).unwrap_err(),
            StoreError::Validation(_)
        ));
    }

    #[test]
    fn test_confirm_then_complete_lifecycle() {
        let store = Store::new();
        let pin = store
            .report_pin(&actor(Role::User), report(PinKind::Damaged))
            .unwrap();

        let tracker = actor(Role::TrackingVolunteer);
        let confirmed = store.confirm_pin(&tracker, pin.id).unwrap();
        assert_eq!(confirmed.status, PinStatus::Confirmed);

        // Confirming twice is an invalid transition.
        assert!(matches!(
            store.confirm_pin(&tracker, pin.id).unwrap_err(),
            StoreError::InvalidTransition { .. }
        ));

        let supplier = actor(Role::SupplyVolunteer);
        let done = store.complete_pin(&supplier, pin.id).unwrap();
        assert_eq!(done.status, PinStatus::Completed);
        assert_eq!(done.assigned_to.as_deref(), Some(supplier.name.as_str()));
    }

    #[test]
    fn test_deny_removes_pending_pin() {
        let store = Store::new();
        let pin = store
            .report_pin(&actor(Role::User), report(PinKind::Damaged))
            .unwrap();
        store.deny_pin(&actor(Role::TrackingVolunteer), pin.id).unwrap();
        assert!(store.list_pins(&actor(Role::Admin)).is_empty());
        assert!(matches!(
            store
                .confirm_pin(&actor(Role::TrackingVolunteer), pin.id)
                .unwrap_err(),
            StoreError::NotFound("pin")
        ));
    }

    #[test]
    fn test_complete_rejects_safe_and_pending_pins() {
        let store = Store::new();
        let supplier = actor(Role::SupplyVolunteer);

        let safe = store
            .report_pin(&actor(Role::TrackingVolunteer), report(PinKind::Safe))
            .unwrap();
        assert!(matches!(
            store.complete_pin(&supplier, safe.id).unwrap_err(),
            StoreError::InvalidTransition { .. }
        ));

        let pending = store
            .report_pin(&actor(Role::User), report(PinKind::Damaged))
            .unwrap();
        assert!(matches!(
            store.complete_pin(&supplier, pending.id).unwrap_err(),
            StoreError::InvalidTransition { .. }
        ));
    }

    #[test]
    fn test_supply_volunteer_sees_only_confirmed_damage() {
        let store = Store::new();
        let tracker = actor(Role::TrackingVolunteer);
        store.report_pin(&tracker, report(PinKind::Safe)).unwrap();
        store.report_pin(&tracker, report(PinKind::Damaged)).unwrap();
        store
            .report_pin(&actor(Role::User), report(PinKind::Damaged))
            .unwrap();

        let visible = store.list_pins(&actor(Role::SupplyVolunteer));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].kind, PinKind::Damaged);
        assert_eq!(visible[0].status, PinStatus::Confirmed);

        assert_eq!(store.list_pins(&actor(Role::User)).len(), 3);
    }

    #[test]
    fn test_gate_refuses_wrong_roles() {
        let store = Store::new();
        let pin = store
            .report_pin(&actor(Role::User), report(PinKind::Damaged))
            .unwrap();
        assert!(matches!(
            store.confirm_pin(&actor(Role::User), pin.id).unwrap_err(),
            StoreError::AuthorizationDenied(_)
        ));
        assert!(matches!(
            store
                .complete_pin(&actor(Role::TrackingVolunteer), pin.id)
                .unwrap_err(),
            StoreError::AuthorizationDenied(_)
        ));
    }
}
