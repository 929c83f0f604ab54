//! Organization directory flows: approval, updates, aggregates, deletion.

use rust_decimal::Decimal;

use reliefmap_core::{OrgStatus, VolunteerRole};
use reliefmap_integration_tests::{TEST_PASSWORD, TestPlatform};
use reliefmap_server::models::Supplies;
use reliefmap_server::store::organizations::UpdateOrganization;

#[test]
fn test_directory_approval_flow() {
    let platform = TestPlatform::new();
    let org = platform.register_org("Myanmar Relief", "mrn", "Yangon", "$12,000");
    assert_eq!(org.status, OrgStatus::Pending);

    // The operator account works while the org is still pending.
    let operator = platform.store.authenticate("mrn", TEST_PASSWORD).unwrap();
    assert_eq!(operator.organization_id, Some(org.id));

    let approved = platform.store.approve_organization(&platform.admin(), org.id).unwrap();
    assert_eq!(approved.status, OrgStatus::Active);

    let rejected = platform.store.reject_organization(&platform.admin(), org.id).unwrap();
    assert_eq!(rejected.status, OrgStatus::Inactive);
}

#[test]
fn test_funding_aggregates_across_directory() {
    let platform = TestPlatform::new();
    platform.register_org("Myanmar Relief", "mrn", "Yangon", "$12,000");
    platform.register_org("Sagaing Aid", "sagaing", "Sagaing", "$3,500");
    platform.register_org("Yangon Mutual Aid", "yma", "Yangon", "$500");

    let summary = platform.store.platform_summary();
    assert_eq!(summary.total_funding, Decimal::from(16_000));
    assert_eq!(summary.organizations_total, 3);
    assert_eq!(summary.organizations_pending, 3);

    let yangon = summary.regions.iter().find(|r| r.region == "Yangon").unwrap();
    assert_eq!(yangon.organizations, 2);
    assert_eq!(yangon.funding, Decimal::from(12_500));
}

#[test]
fn test_supplies_reported_via_update_roll_up() {
    let platform = TestPlatform::new();
    let admin = platform.admin();
    let org = platform.register_org("Myanmar Relief", "mrn", "Yangon", "$12,000");

    platform
        .store
        .update_organization(
            &admin,
            org.id,
            UpdateOrganization {
                supplies: Some(Supplies {
                    medical: 40,
                    food: 120,
                    water: 300,
                    shelter: 15,
                    equipment: 8,
                }),
                ..UpdateOrganization::default()
            },
        )
        .unwrap();

    let summary = platform.store.platform_summary();
    assert_eq!(summary.supplies.water, 300);
    assert_eq!(summary.supplies.equipment, 8);

    let financials = platform.store.org_financials(&admin, org.id).unwrap();
    assert_eq!(financials.supplies.unwrap().medical, 40);
}

#[test]
fn test_financials_hidden_from_public_view() {
    let platform = TestPlatform::new();
    platform.register_org("Myanmar Relief", "mrn", "Yangon", "$12,000");

    let listed = platform.store.list_organizations();
    let json = serde_json::to_value(&listed).unwrap();
    let entry = &json.as_array().unwrap()[0];
    assert!(entry.get("funding").is_none());
    assert!(entry.get("supplies").is_none());
    assert!(entry.get("secret").is_none());
}

#[test]
fn test_deletion_orphans_roster_and_revokes_operator() {
    let platform = TestPlatform::new();
    let (org, operator) = platform.active_org("Myanmar Relief", "mrn");
    let volunteer =
        platform.add_volunteer("Thiri", VolunteerRole::SupplyVolunteer, org.id, Some(&operator));

    platform.store.delete_organization(&platform.admin(), org.id).unwrap();

    assert!(platform.store.list_organizations().is_empty());
    assert!(platform.store.authenticate("mrn", TEST_PASSWORD).is_none());

    // The volunteer's record survives with the affiliation cleared.
    let roster = platform.store.list_volunteers(&platform.admin());
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].id, volunteer.id);
    assert!(roster[0].organization_id.is_none());
}

#[test]
fn test_reported_headcounts_roll_up_by_region() {
    let platform = TestPlatform::new();
    let mrn = platform.register_org("Myanmar Relief", "mrn", "Yangon", "$1,000");
    platform
        .store
        .update_organization(
            &platform.admin(),
            mrn.id,
            UpdateOrganization {
                volunteer_count: Some(25),
                ..UpdateOrganization::default()
            },
        )
        .unwrap();
    platform.register_org("Sagaing Aid", "sagaing", "Sagaing", "$500");

    let summary = platform.store.platform_summary();
    // Directory headcounts are self-reported; the roster is still empty.
    assert_eq!(summary.volunteers_total, 0);
    assert_eq!(summary.volunteers_reported, 25);

    let yangon = summary.regions.iter().find(|r| r.region == "Yangon").unwrap();
    assert_eq!(yangon.volunteers, 25);
    let sagaing = summary.regions.iter().find(|r| r.region == "Sagaing").unwrap();
    assert_eq!(sagaing.volunteers, 0);
}
