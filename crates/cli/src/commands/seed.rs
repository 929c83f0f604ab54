//! Seed a running server with demo data.
//!
//! Registers two organizations, approves one, drops a few pins around
//! Yangon, submits a help request, and publishes an alert. Useful for
//! local development against an empty store.

use serde_json::json;
use tracing::info;

use super::client::ApiClient;

/// Seed demo data.
///
/// # Errors
///
/// Fails when the server is unreachable or any request is rejected.
pub async fn demo_data() -> Result<(), Box<dyn std::error::Error>> {
    let client = ApiClient::admin_from_env().await?;

    let relief = client
        .post_checked(
            "/api/organizations",
            &json!({
                "name": "Myanmar Relief Network",
                "username": "mrn",
                "password": "demo-mrn-operator",
                "region": "Yangon",
                "funding": "$25,000",
                "email": "contact@mrn.example.org",
                "phone": "+95 1 234 567",
                "supplies": { "medical": 40, "food": 120, "water": 300, "shelter": 15, "equipment": 8 },
            }),
        )
        .await?;
    let relief_id = relief
        .get("id")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .to_owned();
    client
        .post_checked(
            &format!("/api/organizations/{relief_id}/approve"),
            &serde_json::Value::Null,
        )
        .await?;
    info!(org = "Myanmar Relief Network", "seeded and approved");

    client
        .post_checked(
            "/api/organizations",
            &json!({
                "name": "Sagaing Aid Collective",
                "username": "sagaing-aid",
                "password": "demo-sagaing-operator",
                "region": "Sagaing",
                "funding": "$4,800",
                "email": "hello@sagaing-aid.example.org",
                "phone": "+95 71 000 111",
            }),
        )
        .await?;
    info!(org = "Sagaing Aid Collective", "seeded (left pending)");

    for (kind, title, lat, lng) in [
        ("damaged", "Collapsed footbridge", 16.8661, 96.1951),
        ("damaged", "Cracked apartment block", 16.7967, 96.1610),
        ("safe", "Monastery shelter", 16.8409, 96.1735),
    ] {
        client
            .post_checked(
                "/api/pins",
                &json!({
                    "kind": kind,
                    "title": title,
                    "description": "Seeded demo pin",
                    "lat": lat,
                    "lng": lng,
                }),
            )
            .await?;
    }
    info!("seeded 3 pins");

    client
        .post_checked(
            "/api/requests",
            &json!({
                "title": "Drinking water",
                "description": "Water for 40 households without mains supply",
                "location": "Hlaing Township",
                "urgency": "high",
            }),
        )
        .await?;
    info!("seeded help request");

    client
        .post_checked(
            "/api/alerts",
            &json!({
                "kind": "earthquake",
                "title": "Aftershock advisory",
                "description": "Magnitude 5.1 aftershock recorded; avoid damaged structures.",
                "severity": "medium",
                "location": "Sagaing",
            }),
        )
        .await?;
    info!("seeded alert");

    Ok(())
}
