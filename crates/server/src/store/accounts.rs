//! Account registry: registration, credential checks, admin seeding.

use chrono::Utc;
use reliefmap_core::{ActorId, OrganizationId, Role};
use secrecy::{ExposeSecret, SecretString};

use crate::models::{Actor, CurrentActor};

use super::{Store, StoreError, StoreInner};

/// Self-service registration input.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RegisterAccount {
    pub name: String,
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl StoreInner {
    fn username_taken(&self, username: &str) -> bool {
        self.accounts.values().any(|a| a.username == username)
            || self.organizations.values().any(|o| o.username == username)
    }
}

impl Store {
    /// Registers a new account. Self-service registration is limited to
    /// plain users and the two volunteer roles; organization operator
    /// accounts are created through the directory, and the admin account is
    /// seeded at startup.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] for blank fields or a reserved
    /// role, and [`StoreError::Conflict`] when the username is taken.
    pub fn register_account(&self, input: RegisterAccount) -> Result<CurrentActor, StoreError> {
        let name = input.name.trim();
        let username = input.username.trim();
        if name.is_empty() || username.is_empty() {
            return Err(StoreError::Validation(
                "name and username must not be empty".to_owned(),
            ));
        }
        if input.password.is_empty() {
            return Err(StoreError::Validation("password must not be empty".to_owned()));
        }
        if !matches!(
            input.role,
            Role::User | Role::TrackingVolunteer | Role::SupplyVolunteer
        ) {
            return Err(StoreError::Validation(format!(
                "role '{}' cannot self-register",
                input.role
            )));
        }

        self.write(|inner| {
            if inner.username_taken(username) {
                return Err(StoreError::Conflict(format!(
                    "username '{username}' is already taken"
                )));
            }
            let actor = Actor {
                id: ActorId::new(),
                name: name.to_owned(),
                username: username.to_owned(),
                secret: SecretString::from(input.password.clone()),
                role: input.role,
                organization_id: None,
                created_at: Utc::now(),
            };
            let current = CurrentActor::from(&actor);
            inner.accounts.insert(actor.id, actor);
            Ok(current)
        })
    }

    /// Checks credentials against the account registry.
    ///
    /// Returns `None` on unknown username or wrong password; callers must
    /// not distinguish the two.
    #[must_use]
    pub fn authenticate(&self, username: &str, password: &str) -> Option<CurrentActor> {
        self.read(|inner| {
            inner
                .accounts
                .values()
                .find(|a| a.username == username && a.secret.expose_secret() == password)
                .map(CurrentActor::from)
        })
    }

    /// Looks up an actor by id, for session revalidation.
    #[must_use]
    pub fn find_actor(&self, id: ActorId) -> Option<CurrentActor> {
        self.read(|inner| inner.accounts.get(&id).map(CurrentActor::from))
    }

    /// Seeds the admin account from configuration. Idempotent: a second
    /// call with the same username replaces nothing.
    pub fn seed_admin(&self, name: &str, username: &str, password: SecretString) {
        self.write(|inner| {
            if inner.username_taken(username) {
                return;
            }
            let actor = Actor {
                id: ActorId::new(),
                name: name.to_owned(),
                username: username.to_owned(),
                secret: password,
                role: Role::Admin,
                organization_id: None,
                created_at: Utc::now(),
            };
            inner.accounts.insert(actor.id, actor);
        });
    }

    /// Creates an operator account bound to an organization. Used by the
    /// directory when an organization is registered.
    pub(crate) fn insert_operator(
        inner: &mut StoreInner,
        name: &str,
        username: &str,
        password: SecretString,
        organization_id: OrganizationId,
    ) -> ActorId {
        let actor = Actor {
            id: ActorId::new(),
            name: name.to_owned(),
            username: username.to_owned(),
            secret: password,
            role: Role::Organization,
            organization_id: Some(organization_id),
            created_at: Utc::now(),
        };
        let id = actor.id;
        inner.accounts.insert(id, actor);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(username: &str, role: Role) -> RegisterAccount {
        RegisterAccount {
            name: "Aye Chan".to_owned(),
            username: username.to_owned(),
            password: "hunter2".to_owned(),
            role,
        }
    }

    #[test]
    fn test_register_and_authenticate() {
        let store = Store::new();
        let actor = store.register_account(input("aye", Role::User)).unwrap();
        assert_eq!(actor.role, Role::User);

        let current = store.authenticate("aye", "hunter2").unwrap();
        assert_eq!(current.id, actor.id);
        assert!(store.authenticate("aye", "wrong").is_none());
        assert!(store.authenticate("nobody", "hunter2").is_none());
    }

    #[test]
    fn test_duplicate_username_conflicts() {
        let store = Store::new();
        store.register_account(input("aye", Role::User)).unwrap();
        let err = store
            .register_account(input("aye", Role::TrackingVolunteer))
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[test]
    fn test_reserved_roles_cannot_self_register() {
        let store = Store::new();
        for role in [Role::Organization, Role::Admin] {
            let err = store.register_account(input("op", role)).unwrap_err();
            assert!(matches!(err, StoreError::Validation(_)));
        }
    }

    #[test]
    fn test_blank_fields_rejected() {
        let store = Store::new();
        let mut bad = input("aye", Role::User);
        bad.name = "  ".to_owned();
        assert!(matches!(
            store.register_account(bad).unwrap_err(),
            StoreError::Validation(_)
        ));

        let mut bad = input("aye", Role::User);
        bad.password = String::new();
        assert!(matches!(
            store.register_account(bad).unwrap_err(),
            StoreError::Validation(_)
        ));
    }

    #[test]
    fn test_seed_admin_is_idempotent() {
        let store = Store::new();
        store.seed_admin("Admin", "admin", SecretString::from("first"));
        store.seed_admin("Admin", "admin", SecretString::from("second"));

        let current = store.authenticate("admin", "first").unwrap();
        assert_eq!(current.role, Role::Admin);
        assert!(store.authenticate("admin", "second").is_none());
    }
}
