//! Platform alert domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use reliefmap_core::{AlertId, AlertKind, Severity};

/// A platform-wide notice published by an administrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Unique alert ID.
    pub id: AlertId,
    /// Alert category.
    pub kind: AlertKind,
    /// Short headline, e.g. "Earthquake Alert".
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Severity level.
    pub severity: Severity,
    /// Affected location, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// When the alert was published.
    pub created_at: DateTime<Utc>,
}
