//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `RELIEFMAP_BASE_URL` - Public URL for the platform
//! - `RELIEFMAP_SESSION_SECRET` - Cookie signing key material (min 64 chars, high entropy)
//! - `RELIEFMAP_ADMIN_PASSWORD` - Password for the seeded admin account
//!
//! ## Optional
//! - `RELIEFMAP_HOST` - Bind address (default: 127.0.0.1)
//! - `RELIEFMAP_PORT` - Listen port (default: 3000)
//! - `RELIEFMAP_ADMIN_NAME` - Display name of the admin account (default: Administrator)
//! - `RELIEFMAP_ADMIN_USERNAME` - Login username of the admin account (default: admin)
//! - `RELIEFMAP_MAP_CENTER_LAT` / `RELIEFMAP_MAP_CENTER_LNG` - Default map
//!   center served to clients (defaults: Yangon, 16.8409 / 96.1735)

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

// The session layer signs cookies with this secret; the cookie key
// requires a 64-byte master key.
const MIN_SESSION_SECRET_LENGTH: usize = 64;
const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

const DEFAULT_MAP_CENTER_LAT: f64 = 16.8409;
const DEFAULT_MAP_CENTER_LNG: f64 = 96.1735;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the platform
    pub base_url: String,
    /// Session signing secret
    pub session_secret: SecretString,
    /// Seeded admin account
    pub admin: AdminAccountConfig,
    /// Default map center served to clients
    pub map_center: MapCenter,
}

/// Admin account seeded into the store at startup.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct AdminAccountConfig {
    /// Display name
    pub name: String,
    /// Login username
    pub username: String,
    /// Login password
    pub password: SecretString,
}

impl std::fmt::Debug for AdminAccountConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminAccountConfig")
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Default map center served to clients.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct MapCenter {
    pub lat: f64,
    pub lng: f64,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if secrets fail validation (placeholder detection, entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("RELIEFMAP_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("RELIEFMAP_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("RELIEFMAP_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("RELIEFMAP_PORT".to_string(), e.to_string()))?;
        let base_url = get_required_env("RELIEFMAP_BASE_URL")?;
        let session_secret = get_validated_secret("RELIEFMAP_SESSION_SECRET")?;
        validate_session_secret(&session_secret, "RELIEFMAP_SESSION_SECRET")?;

        let admin = AdminAccountConfig::from_env()?;
        let map_center = MapCenter::from_env()?;

        Ok(Self {
            host,
            port,
            base_url,
            session_secret,
            admin,
            map_center,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl AdminAccountConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            name: get_env_or_default("RELIEFMAP_ADMIN_NAME", "Administrator"),
            username: get_env_or_default("RELIEFMAP_ADMIN_USERNAME", "admin"),
            password: get_validated_secret("RELIEFMAP_ADMIN_PASSWORD")?,
        })
    }
}

impl MapCenter {
    fn from_env() -> Result<Self, ConfigError> {
        let lat = get_optional_env("RELIEFMAP_MAP_CENTER_LAT")
            .map(|s| {
                s.parse::<f64>().map_err(|e| {
                    ConfigError::InvalidEnvVar("RELIEFMAP_MAP_CENTER_LAT".to_string(), e.to_string())
                })
            })
            .transpose()?
            .unwrap_or(DEFAULT_MAP_CENTER_LAT);
        let lng = get_optional_env("RELIEFMAP_MAP_CENTER_LNG")
            .map(|s| {
                s.parse::<f64>().map_err(|e| {
                    ConfigError::InvalidEnvVar("RELIEFMAP_MAP_CENTER_LNG".to_string(), e.to_string())
                })
            })
            .transpose()?
            .unwrap_or(DEFAULT_MAP_CENTER_LNG);

        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(ConfigError::InvalidEnvVar(
                "RELIEFMAP_MAP_CENTER_*".to_string(),
                format!("({lat}, {lng}) is not a valid coordinate pair"),
            ));
        }
        Ok(Self { lat, lng })
    }
}

// --- env helpers ---

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that a session secret meets minimum length requirements.
fn validate_session_secret(secret: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    let value = secret.expose_secret();
    if value.len() < MIN_SESSION_SECRET_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "must be at least {} characters (got {})",
                MIN_SESSION_SECRET_LENGTH,
                value.len()
            ),
        ));
    }
    Ok(())
}

/// Shannon entropy in bits per character, used to reject weak secrets.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // secret lengths are far below f64 precision
    let len = s.len() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // char counts are far below f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Reject placeholder-looking or low-entropy secrets.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Use a randomly generated secret."
            ),
        ));
    }

    Ok(())
}

/// Read a secret from the environment and vet it before wrapping.
fn get_validated_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    validate_secret_strength(&value, key)?;
    Ok(SecretString::from(value))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_shannon_entropy_empty() {
        assert!((shannon_entropy("") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_single_char() {
        // All same character = 0 entropy
        assert!((shannon_entropy("aaaaaaa") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_two_chars() {
        // "ab" has entropy of 1 bit per char (50% a, 50% b)
        let entropy = shannon_entropy("ab");
        assert!((entropy - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_validate_secret_strength_placeholder() {
        let result = validate_secret_strength("your-admin-key-here", "TEST_VAR");
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InsecureSecret(_, _)
        ));
    }

    #[test]
    fn test_validate_secret_strength_low_entropy() {
        let result = validate_secret_strength("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", "TEST_VAR");
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InsecureSecret(_, _)
        ));
    }

    #[test]
    fn test_validate_secret_strength_valid() {
        // High-entropy random string
        let result = validate_secret_strength("aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6", "TEST_VAR");
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_session_secret_too_short() {
        let secret = SecretString::from("short");
        assert!(validate_session_secret(&secret, "TEST_SESSION").is_err());
    }

    #[test]
    fn test_validate_session_secret_rejects_sub_key_length() {
        // 32 chars is not enough master-key material for cookie signing
        let secret = SecretString::from("a".repeat(32));
        assert!(validate_session_secret(&secret, "TEST_SESSION").is_err());
    }

    #[test]
    fn test_validate_session_secret_valid_length() {
        let secret = SecretString::from("a".repeat(64));
        assert!(validate_session_secret(&secret, "TEST_SESSION").is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            session_secret: SecretString::from("x".repeat(64)),
            admin: AdminAccountConfig {
                name: "Administrator".to_string(),
                username: "admin".to_string(),
                password: SecretString::from("test-admin-pass"),
            },
            map_center: MapCenter {
                lat: DEFAULT_MAP_CENTER_LAT,
                lng: DEFAULT_MAP_CENTER_LNG,
            },
        };
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_default_map_center_is_yangon() {
        assert!((DEFAULT_MAP_CENTER_LAT - 16.8409).abs() < f64::EPSILON);
        assert!((DEFAULT_MAP_CENTER_LNG - 96.1735).abs() < f64::EPSILON);
    }
}
