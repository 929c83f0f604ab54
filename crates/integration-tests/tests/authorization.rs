//! Authorization gate coverage across roles.

use reliefmap_core::{AlertKind, PinKind, Role, Severity, VolunteerRole};
use reliefmap_integration_tests::TestPlatform;
use reliefmap_server::store::StoreError;
use reliefmap_server::store::alerts::PublishAlert;
use reliefmap_server::store::pins::ReportPin;

fn damaged_pin() -> ReportPin {
    ReportPin {
        kind: PinKind::Damaged,
        title: "Cracked overpass".to_owned(),
        description: "integration test pin".to_owned(),
        lat: 16.8,
        lng: 96.2,
        image: None,
    }
}

#[test]
fn test_only_tracking_volunteers_verify_pins() {
    let platform = TestPlatform::new();
    let reporter = platform.register("Aye", "aye", Role::User);
    let supplier = platform.register("Thiri", "thiri", Role::SupplyVolunteer);

    let pin = platform.store.report_pin(&reporter, damaged_pin()).unwrap();

    for actor in [&reporter, &supplier, &platform.admin()] {
        assert!(matches!(
            platform.store.confirm_pin(actor, pin.id).unwrap_err(),
            StoreError::AuthorizationDenied(_)
        ));
        assert!(matches!(
            platform.store.deny_pin(actor, pin.id).unwrap_err(),
            StoreError::AuthorizationDenied(_)
        ));
    }
}

#[test]
fn test_only_operators_manage_rosters() {
    let platform = TestPlatform::new();
    let (org, operator) = platform.active_org("Myanmar Relief", "mrn");
    let volunteer = platform.add_volunteer("Thiri", VolunteerRole::SupplyVolunteer, org.id, None);
    let user = platform.register("Aye", "aye", Role::User);

    assert!(matches!(
        platform.store.approve_volunteer(&user, volunteer.id).unwrap_err(),
        StoreError::AuthorizationDenied(_)
    ));
    assert!(matches!(
        platform
            .store
            .approve_volunteer(&platform.admin(), volunteer.id)
            .unwrap_err(),
        StoreError::AuthorizationDenied(_)
    ));
    assert!(platform.store.approve_volunteer(&operator, volunteer.id).is_ok());
}

#[test]
fn test_operators_cannot_touch_other_rosters() {
    let platform = TestPlatform::new();
    let (org_a, _operator_a) = platform.active_org("Org A", "org-a");
    let (_org_b, operator_b) = platform.active_org("Org B", "org-b");
    let volunteer = platform.add_volunteer("Thiri", VolunteerRole::SupplyVolunteer, org_a.id, None);

    assert!(matches!(
        platform
            .store
            .approve_volunteer(&operator_b, volunteer.id)
            .unwrap_err(),
        StoreError::AuthorizationDenied(_)
    ));
    assert!(matches!(
        platform
            .store
            .remove_volunteer(&operator_b, volunteer.id)
            .unwrap_err(),
        StoreError::AuthorizationDenied(_)
    ));
}

#[test]
fn test_directory_and_alerts_are_admin_only() {
    let platform = TestPlatform::new();
    let (org, operator) = platform.active_org("Myanmar Relief", "mrn");
    let user = platform.register("Aye", "aye", Role::User);

    for actor in [&user, &operator] {
        assert!(matches!(
            platform.store.approve_organization(actor, org.id).unwrap_err(),
            StoreError::AuthorizationDenied(_)
        ));
        assert!(matches!(
            platform.store.delete_organization(actor, org.id).unwrap_err(),
            StoreError::AuthorizationDenied(_)
        ));
        assert!(matches!(
            platform
                .store
                .publish_alert(
                    actor,
                    PublishAlert {
                        kind: AlertKind::Safety,
                        title: "Stay clear".to_owned(),
                        description: String::new(),
                        severity: Severity::Low,
                        location: None,
                    },
                )
                .unwrap_err(),
            StoreError::AuthorizationDenied(_)
        ));
    }
}

#[test]
fn test_financials_scoped_to_admin_and_self() {
    let platform = TestPlatform::new();
    let (org_a, operator_a) = platform.active_org("Org A", "org-a");
    let (_org_b, operator_b) = platform.active_org("Org B", "org-b");
    let user = platform.register("Aye", "aye", Role::User);

    assert!(platform.store.org_financials(&platform.admin(), org_a.id).is_ok());
    assert!(platform.store.org_financials(&operator_a, org_a.id).is_ok());
    assert!(matches!(
        platform.store.org_financials(&operator_b, org_a.id).unwrap_err(),
        StoreError::AuthorizationDenied(_)
    ));
    assert!(matches!(
        platform.store.org_financials(&user, org_a.id).unwrap_err(),
        StoreError::AuthorizationDenied(_)
    ));
}

#[test]
fn test_reserved_roles_cannot_self_register() {
    let platform = TestPlatform::new();
    for role in [Role::Organization, Role::Admin] {
        let err = platform
            .store
            .register_account(reliefmap_server::store::accounts::RegisterAccount {
                name: "Sneaky".to_owned(),
                username: "sneaky".to_owned(),
                password: "pw".to_owned(),
                role,
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }
}
