//! HTTP client for a running ReliefMap server.
//!
//! Sessions are cookie-based, so the client keeps a cookie store and logs
//! in once with the admin credentials from the environment.

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur talking to the server.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server rejected the request.
    #[error("Server returned {status}: {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },
}

/// A logged-in API client.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Connects to the server from the environment and logs in as the
    /// admin.
    ///
    /// # Errors
    ///
    /// Fails when admin credentials are missing or the login is rejected.
    pub async fn admin_from_env() -> Result<Self, ClientError> {
        dotenvy::dotenv().ok();

        let base_url = std::env::var("RELIEFMAP_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:3000".to_owned());
        let username = std::env::var("RELIEFMAP_ADMIN_USERNAME")
            .map_err(|_| ClientError::MissingEnvVar("RELIEFMAP_ADMIN_USERNAME"))?;
        let password = std::env::var("RELIEFMAP_ADMIN_PASSWORD")
            .map_err(|_| ClientError::MissingEnvVar("RELIEFMAP_ADMIN_PASSWORD"))?;

        let http = reqwest::Client::builder().cookie_store(true).build()?;
        let client = Self { http, base_url };
        client
            .post_checked(
                "/api/auth/login",
                &serde_json::json!({ "username": username, "password": password }),
            )
            .await?;
        tracing::info!("logged in as admin");
        Ok(client)
    }

    /// POST a JSON body and return the parsed response.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or a non-success status.
    pub async fn post_checked(&self, path: &str, body: &Value) -> Result<Value, ClientError> {
        let response = self
            .http
            .post(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await?;
        Self::parse(response).await
    }

    /// GET and return the parsed response.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or a non-success status.
    pub async fn get_checked(&self, path: &str) -> Result<Value, ClientError> {
        let response = self
            .http
            .get(format!("{}{path}", self.base_url))
            .send()
            .await?;
        Self::parse(response).await
    }

    async fn parse(response: reqwest::Response) -> Result<Value, ClientError> {
        let status = response.status();
        if status == reqwest::StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }
        let body: Value = response.json().await.unwrap_or(Value::Null);
        if status.is_success() {
            Ok(body)
        } else {
            let message = body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
                .to_owned();
            Err(ClientError::Api { status, message })
        }
    }
}
