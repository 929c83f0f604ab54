//! Organization directory commands.

use serde_json::Value;

use super::client::ApiClient;

/// Registration parameters for a new organization.
pub struct Registration {
    pub name: String,
    pub username: String,
    pub password: String,
    pub region: String,
    pub funding: String,
    pub email: String,
    pub phone: String,
}

/// Register a new organization and print its id.
///
/// # Errors
///
/// Fails when the server rejects the registration.
#[allow(clippy::print_stdout)]
pub async fn register(input: Registration) -> Result<(), Box<dyn std::error::Error>> {
    let client = ApiClient::admin_from_env().await?;
    let org = client
        .post_checked(
            "/api/organizations",
            &serde_json::json!({
                "name": input.name,
                "username": input.username,
                "password": input.password,
                "region": input.region,
                "funding": input.funding,
                "email": input.email,
                "phone": input.phone,
            }),
        )
        .await?;
    println!(
        "registered {} ({})",
        org.get("name").and_then(Value::as_str).unwrap_or("?"),
        org.get("id").and_then(Value::as_str).unwrap_or("?"),
    );
    Ok(())
}

/// Approve a pending organization.
///
/// # Errors
///
/// Fails when the id is unknown or the server rejects the change.
#[allow(clippy::print_stdout)]
pub async fn approve(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = ApiClient::admin_from_env().await?;
    let org = client
        .post_checked(&format!("/api/organizations/{id}/approve"), &Value::Null)
        .await?;
    println!(
        "approved {}",
        org.get("name").and_then(Value::as_str).unwrap_or(id)
    );
    Ok(())
}

/// Reject an organization.
///
/// # Errors
///
/// Fails when the id is unknown or the server rejects the change.
#[allow(clippy::print_stdout)]
pub async fn reject(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = ApiClient::admin_from_env().await?;
    let org = client
        .post_checked(&format!("/api/organizations/{id}/reject"), &Value::Null)
        .await?;
    println!(
        "rejected {}",
        org.get("name").and_then(Value::as_str).unwrap_or(id)
    );
    Ok(())
}

/// List the directory.
///
/// # Errors
///
/// Fails when the server is unreachable.
#[allow(clippy::print_stdout)]
pub async fn list() -> Result<(), Box<dyn std::error::Error>> {
    let client = ApiClient::admin_from_env().await?;
    let orgs = client.get_checked("/api/organizations").await?;
    for org in orgs.as_array().into_iter().flatten() {
        println!(
            "{}  {}  [{}]  {}",
            org.get("id").and_then(Value::as_str).unwrap_or("?"),
            org.get("name").and_then(Value::as_str).unwrap_or("?"),
            org.get("status").and_then(Value::as_str).unwrap_or("?"),
            org.get("region").and_then(Value::as_str).unwrap_or("?"),
        );
    }
    Ok(())
}
