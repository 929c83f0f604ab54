//! Platform alert feed.

use chrono::Utc;
use reliefmap_core::{AlertId, AlertKind, Severity};

use crate::authz::{self, Action};
use crate::models::{Alert, CurrentActor};

use super::{Store, StoreError};

/// Alert publication input.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct PublishAlert {
    pub kind: AlertKind,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    #[serde(default)]
    pub location: Option<String>,
}

impl Store {
    /// Publishes a platform alert.
    ///
    /// # Errors
    ///
    /// [`StoreError::AuthorizationDenied`] unless the actor is the admin
    /// and [`StoreError::Validation`] for a blank title.
    pub fn publish_alert(
        &self,
        actor: &CurrentActor,
        input: PublishAlert,
    ) -> Result<Alert, StoreError> {
        authz::require(actor.role, Action::PublishAlert)?;

        let title = input.title.trim();
        if title.is_empty() {
            return Err(StoreError::Validation("title must not be empty".to_owned()));
        }

        let alert = Alert {
            id: AlertId::new(),
            kind: input.kind,
            title: title.to_owned(),
            description: input.description.trim().to_owned(),
            severity: input.severity,
            location: input.location,
            created_at: Utc::now(),
        };
        self.write(|inner| {
            inner.alerts.insert(alert.id, alert.clone());
        });
        Ok(alert)
    }

    /// All alerts, newest first.
    #[must_use]
    pub fn list_alerts(&self) -> Vec<Alert> {
        self.read(|inner| {
            let mut alerts: Vec<Alert> = inner.alerts.values().cloned().collect();
            alerts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            alerts
        })
    }
}
