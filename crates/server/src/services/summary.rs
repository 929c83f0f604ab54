//! Platform summaries: aggregate views derived from the store.
//!
//! Everything here is a pure projection of current state; nothing is
//! cached or persisted, so summaries are always consistent with the data
//! they were read from.

use rust_decimal::Decimal;
use serde::Serialize;

use reliefmap_core::{OrgStatus, PinKind, PinStatus, RequestStatus, VolunteerStatus};

use crate::models::Supplies;
use crate::store::{Store, StoreInner};

/// Top-level dashboard numbers.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformSummary {
    pub organizations_total: usize,
    pub organizations_active: usize,
    pub organizations_pending: usize,
    pub volunteers_total: usize,
    pub volunteers_active: usize,
    /// Sum of headcounts reported by organizations, distinct from the
    /// roster totals above.
    pub volunteers_reported: u64,
    pub requests_total: usize,
    pub requests_pending: usize,
    pub requests_assigned: usize,
    pub requests_completed: usize,
    pub alerts_total: usize,
    /// Sum of reported funding across the directory.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_funding: Decimal,
    /// Element-wise sum of reported supply inventories.
    pub supplies: Supplies,
    pub pins: PinSummary,
    pub regions: Vec<RegionRollup>,
}

/// Pin registry breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PinSummary {
    pub total: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub completed: usize,
    pub damaged: usize,
    pub safe: usize,
}

/// Per-region directory rollup.
#[derive(Debug, Clone, Serialize)]
pub struct RegionRollup {
    pub region: String,
    pub organizations: usize,
    /// Reported headcount across the region's organizations.
    pub volunteers: u64,
    #[serde(with = "rust_decimal::serde::str")]
    pub funding: Decimal,
}

fn pin_summary(inner: &StoreInner) -> PinSummary {
    let mut summary = PinSummary {
        total: inner.pins.len(),
        ..PinSummary::default()
    };
    for pin in inner.pins.values() {
        match pin.status {
            PinStatus::Pending => summary.pending += 1,
            PinStatus::Confirmed => summary.confirmed += 1,
            PinStatus::Completed => summary.completed += 1,
        }
        match pin.kind {
            PinKind::Damaged => summary.damaged += 1,
            PinKind::Safe => summary.safe += 1,
        }
    }
    summary
}

fn region_rollups(inner: &StoreInner) -> Vec<RegionRollup> {
    let mut by_region: std::collections::BTreeMap<String, (usize, u64, Decimal)> =
        std::collections::BTreeMap::new();
    for org in inner.organizations.values() {
        let entry = by_region
            .entry(org.region.clone())
            .or_insert((0, 0, Decimal::ZERO));
        entry.0 += 1;
        entry.1 += u64::from(org.volunteer_count);
        entry.2 += org.funding.amount();
    }
    by_region
        .into_iter()
        .map(|(region, (organizations, volunteers, funding))| RegionRollup {
            region,
            organizations,
            volunteers,
            funding,
        })
        .collect()
}

impl Store {
    /// Derives the full platform summary from current state.
    #[must_use]
    pub fn platform_summary(&self) -> PlatformSummary {
        self.read(|inner| {
            let count_orgs = |status: OrgStatus| {
                inner
                    .organizations
                    .values()
                    .filter(|o| o.status == status)
                    .count()
            };
            let count_requests = |status: RequestStatus| {
                inner
                    .requests
                    .values()
                    .filter(|r| r.status == status)
                    .count()
            };
            PlatformSummary {
                organizations_total: inner.organizations.len(),
                organizations_active: count_orgs(OrgStatus::Active),
                organizations_pending: count_orgs(OrgStatus::Pending),
                volunteers_total: inner.volunteers.len(),
                volunteers_reported: inner
                    .organizations
                    .values()
                    .map(|o| u64::from(o.volunteer_count))
                    .sum(),
                volunteers_active: inner
                    .volunteers
                    .values()
                    .filter(|v| v.status == VolunteerStatus::Active)
                    .count(),
                requests_total: inner.requests.len(),
                requests_pending: count_requests(RequestStatus::Pending),
                requests_assigned: count_requests(RequestStatus::Assigned),
                requests_completed: count_requests(RequestStatus::Completed),
                alerts_total: inner.alerts.len(),
                total_funding: inner
                    .organizations
                    .values()
                    .map(|o| o.funding.amount())
                    .sum(),
                supplies: inner
                    .organizations
                    .values()
                    .filter_map(|o| o.supplies)
                    .fold(Supplies::default(), Supplies::add),
                pins: pin_summary(inner),
                regions: region_rollups(inner),
            }
        })
    }

    /// Derives the pin registry breakdown alone.
    #[must_use]
    pub fn pin_registry_summary(&self) -> PinSummary {
        self.read(pin_summary)
    }
}
