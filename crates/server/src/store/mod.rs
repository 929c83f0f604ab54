//! Authoritative in-process store.
//!
//! All platform state lives behind a single [`std::sync::RwLock`]; every
//! operation takes the lock once, validates, then applies its full effect
//! before releasing. Multi-record updates (assignment binding, completion
//! crediting) therefore observe and produce consistent state without any
//! per-entity locking.
//!
//! Registry logic is split per entity: [`accounts`], [`pins`], [`requests`],
//! [`volunteers`], [`organizations`], [`alerts`]. Each module implements its
//! operations as methods on [`Store`] working on `&StoreInner` /
//! `&mut StoreInner`.

pub mod accounts;
pub mod alerts;
pub mod organizations;
pub mod pins;
pub mod requests;
pub mod volunteers;

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use reliefmap_core::{
    ActorId, AlertId, HelpRequestId, OrganizationId, PinId, VolunteerId,
};

use crate::models::{Actor, Alert, HelpRequest, Organization, Pin, Volunteer};

/// Failure taxonomy for store operations.
///
/// Handlers map these onto HTTP statuses in `error::AppError`; the store
/// itself knows nothing about transport.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Input failed structural validation; nothing was applied.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The gate refused the actor's role for this action.
    #[error("not permitted to {0}")]
    AuthorizationDenied(&'static str),

    /// The referenced record does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The record exists but is in the wrong state for this operation.
    #[error("cannot {action} a {status} {entity}")]
    InvalidTransition {
        /// Operation that was attempted.
        action: &'static str,
        /// Kind of record.
        entity: &'static str,
        /// The record's current state, as its wire form.
        status: String,
    },

    /// The selected volunteer cannot take an assignment.
    #[error("volunteer unavailable: {0}")]
    VolunteerUnavailable(String),

    /// The operation conflicts with existing state (duplicate username,
    /// request already assigned).
    #[error("conflict: {0}")]
    Conflict(String),
}

/// Everything the platform knows, guarded by one lock.
#[derive(Debug, Default)]
pub struct StoreInner {
    pub(crate) accounts: HashMap<ActorId, Actor>,
    pub(crate) pins: HashMap<PinId, Pin>,
    pub(crate) requests: HashMap<HelpRequestId, HelpRequest>,
    pub(crate) volunteers: HashMap<VolunteerId, Volunteer>,
    pub(crate) organizations: HashMap<OrganizationId, Organization>,
    pub(crate) alerts: HashMap<AlertId, Alert>,
}

/// Shared handle to the store. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<StoreInner>>,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` under the read lock.
    pub(crate) fn read<T>(&self, f: impl FnOnce(&StoreInner) -> T) -> T {
        let guard = self
            .inner
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&guard)
    }

    /// Runs `f` under the write lock. The closure either returns `Ok` with
    /// its full effect applied or `Err` having mutated nothing; modules
    /// uphold this by validating before touching state.
    pub(crate) fn write<T>(&self, f: impl FnOnce(&mut StoreInner) -> T) -> T {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&mut guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_starts_empty() {
        let store = Store::new();
        store.read(|inner| {
            assert!(inner.accounts.is_empty());
            assert!(inner.pins.is_empty());
            assert!(inner.requests.is_empty());
            assert!(inner.volunteers.is_empty());
            assert!(inner.organizations.is_empty());
            assert!(inner.alerts.is_empty());
        });
    }

    #[test]
    fn test_clones_share_state() {
        let store = Store::new();
        let clone = store.clone();
        store.write(|inner| {
            inner.alerts.insert(
                AlertId::new(),
                crate::models::Alert {
                    id: AlertId::new(),
                    kind: reliefmap_core::AlertKind::Safety,
                    title: "shared".to_owned(),
                    description: String::new(),
                    severity: reliefmap_core::Severity::Low,
                    location: None,
                    created_at: chrono::Utc::now(),
                },
            );
        });
        clone.read(|inner| assert_eq!(inner.alerts.len(), 1));
    }
}
