//! Integration tests for ReliefMap.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p reliefmap-integration-tests
//! ```
//!
//! The tests drive the server's store and services directly (no HTTP
//! server needed): the store is the authoritative state and all policy
//! lives behind it, so exercising it end to end covers the same paths the
//! handlers call.

#![cfg_attr(not(test), forbid(unsafe_code))]
// Test support code; failing loudly is the point.
#![allow(clippy::unwrap_used)]
#![allow(clippy::missing_panics_doc)]

use secrecy::SecretString;

use reliefmap_core::{OrganizationId, Role, VolunteerRole};
use reliefmap_server::models::{CurrentActor, OrganizationView, Volunteer};
use reliefmap_server::store::Store;
use reliefmap_server::store::accounts::RegisterAccount;
use reliefmap_server::store::organizations::RegisterOrganization;
use reliefmap_server::store::volunteers::RegisterVolunteer;

/// Password used for every seeded account.
pub const TEST_PASSWORD: &str = "integration-pass";

/// A store pre-seeded with an admin account.
pub struct TestPlatform {
    pub store: Store,
}

impl Default for TestPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPlatform {
    #[must_use]
    pub fn new() -> Self {
        let store = Store::new();
        store.seed_admin("Admin", "admin", SecretString::from(TEST_PASSWORD));
        Self { store }
    }

    /// The seeded admin actor.
    #[must_use]
    pub fn admin(&self) -> CurrentActor {
        self.store.authenticate("admin", TEST_PASSWORD).unwrap()
    }

    /// Registers and returns a self-service account.
    pub fn register(&self, name: &str, username: &str, role: Role) -> CurrentActor {
        self.store
            .register_account(RegisterAccount {
                name: name.to_owned(),
                username: username.to_owned(),
                password: TEST_PASSWORD.to_owned(),
                role,
            })
            .unwrap()
    }

    /// Registers an organization through the admin and returns its public
    /// view. The operator logs in as `username` / [`TEST_PASSWORD`].
    pub fn register_org(&self, name: &str, username: &str, region: &str, funding: &str) -> OrganizationView {
        self.store
            .register_organization(
                &self.admin(),
                RegisterOrganization {
                    name: name.to_owned(),
                    username: username.to_owned(),
                    password: TEST_PASSWORD.to_owned(),
                    region: region.to_owned(),
                    funding: funding.to_owned(),
                    email: format!("{username}@example.org"),
                    phone: "+95 1 234 567".to_owned(),
                    volunteer_count: 0,
                    supplies: None,
                },
            )
            .unwrap()
    }

    /// Registers and approves an organization, returning its view and
    /// operator actor.
    pub fn active_org(&self, name: &str, username: &str) -> (OrganizationView, CurrentActor) {
        let org = self.register_org(name, username, "Yangon", "$0");
        let org = self.store.approve_organization(&self.admin(), org.id).unwrap();
        let operator = self.store.authenticate(username, TEST_PASSWORD).unwrap();
        (org, operator)
    }

    /// Registers a volunteer with an organization, optionally approving
    /// them with the given operator.
    pub fn add_volunteer(
        &self,
        name: &str,
        role: VolunteerRole,
        org: OrganizationId,
        approve_as: Option<&CurrentActor>,
    ) -> Volunteer {
        let registrant = self.register(name, &format!("{name}-acct"), Role::User);
        let volunteer = self
            .store
            .register_volunteer(
                &registrant,
                RegisterVolunteer {
                    name: name.to_owned(),
                    email: format!("{name}@example.org"),
                    phone: "+95 9 1234 5678".to_owned(),
                    role,
                    location: "Yangon".to_owned(),
                    organization_id: org,
                },
            )
            .unwrap();
        match approve_as {
            Some(operator) => self.store.approve_volunteer(operator, volunteer.id).unwrap(),
            None => volunteer,
        }
    }
}
