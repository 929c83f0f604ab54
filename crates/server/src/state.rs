//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::InMemoryImageStore;
use crate::store::Store;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources: configuration, the in-process store, and the image
/// store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    store: Store,
    images: InMemoryImageStore,
}

impl AppState {
    /// Create a new application state. Seeds the admin account from the
    /// configuration.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let store = Store::new();
        store.seed_admin(
            &config.admin.name,
            &config.admin.username,
            config.admin.password.clone(),
        );
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                images: InMemoryImageStore::new(),
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.inner.store
    }

    /// Get a reference to the image store.
    #[must_use]
    pub fn images(&self) -> &InMemoryImageStore {
        &self.inner.images
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    use crate::config::{AdminAccountConfig, MapCenter};

    pub(crate) fn test_config() -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            base_url: "http://localhost:3000".to_string(),
            session_secret: SecretString::from("x".repeat(64)),
            admin: AdminAccountConfig {
                name: "Administrator".to_string(),
                username: "admin".to_string(),
                password: SecretString::from("test-admin-pass"),
            },
            map_center: MapCenter {
                lat: 16.8409,
                lng: 96.1735,
            },
        }
    }

    #[test]
    fn test_state_seeds_admin() {
        let state = AppState::new(test_config());
        let admin = state.store().authenticate("admin", "test-admin-pass").unwrap();
        assert_eq!(admin.role, reliefmap_core::Role::Admin);
    }
}
