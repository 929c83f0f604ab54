//! HTTP route handlers for the API server.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                          - Health check
//!
//! # Auth
//! POST   /api/auth/register               - Create an account
//! POST   /api/auth/login                  - Log in
//! POST   /api/auth/logout                 - Log out
//! GET    /api/auth/me                     - Current session actor
//!
//! # Pins
//! GET    /api/pins                        - List pins (role-projected)
//! POST   /api/pins                        - Report a pin
//! POST   /api/pins/{id}/confirm           - Confirm a pending pin
//! POST   /api/pins/{id}/deny              - Deny (remove) a pending pin
//! POST   /api/pins/{id}/complete          - Mark a damage pin completed
//!
//! # Help requests
//! GET    /api/requests                    - List requests
//! POST   /api/requests                    - Submit a request
//! GET    /api/requests/candidates         - Eligible assignment candidates
//! POST   /api/requests/{id}/assign        - Assign a volunteer
//! POST   /api/requests/{id}/complete      - Complete an assigned request
//!
//! # Volunteers
//! GET    /api/volunteers                  - Roster (org-scoped for operators)
//! POST   /api/volunteers                  - Register with an organization
//! POST   /api/volunteers/{id}/approve     - Approve a roster entry
//! POST   /api/volunteers/{id}/reject      - Reject a roster entry
//! DELETE /api/volunteers/{id}             - Remove from the roster
//!
//! # Organizations
//! GET    /api/organizations               - Public directory
//! POST   /api/organizations               - Register (admin)
//! POST   /api/organizations/{id}/approve  - Approve (admin)
//! POST   /api/organizations/{id}/reject   - Reject (admin)
//! PATCH  /api/organizations/{id}          - Update (admin)
//! DELETE /api/organizations/{id}          - Delete (admin)
//! GET    /api/organizations/{id}/financials - Funding/supplies (admin or self)
//!
//! # Alerts
//! GET    /api/alerts                      - Alert feed, newest first
//! POST   /api/alerts                      - Publish (admin)
//!
//! # Summaries and misc
//! GET    /api/summary                     - Platform summary
//! GET    /api/summary/pins                - Pin registry breakdown
//! GET    /api/map-center                  - Default map center
//! POST   /api/images                      - Upload a pin image
//! GET    /api/images/{reference}          - Fetch a pin image
//! ```

pub mod alerts;
pub mod auth;
pub mod images;
pub mod organizations;
pub mod pins;
pub mod requests;
pub mod summary;
pub mod volunteers;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

/// Create the pin routes router.
pub fn pin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pins::index).post(pins::create))
        .route("/{id}/confirm", post(pins::confirm))
        .route("/{id}/deny", post(pins::deny))
        .route("/{id}/complete", post(pins::complete))
}

/// Create the help request routes router.
pub fn request_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(requests::index).post(requests::create))
        .route("/candidates", get(requests::candidates))
        .route("/{id}/assign", post(requests::assign))
        .route("/{id}/complete", post(requests::complete))
}

/// Create the volunteer routes router.
pub fn volunteer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(volunteers::index).post(volunteers::create))
        .route("/{id}/approve", post(volunteers::approve))
        .route("/{id}/reject", post(volunteers::reject))
        .route("/{id}", delete(volunteers::remove))
}

/// Create the organization routes router.
pub fn organization_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(organizations::index).post(organizations::create))
        .route("/{id}/approve", post(organizations::approve))
        .route("/{id}/reject", post(organizations::reject))
        .route(
            "/{id}",
            axum::routing::patch(organizations::update).delete(organizations::remove),
        )
        .route("/{id}/financials", get(organizations::financials))
}

/// Create the alert routes router.
pub fn alert_routes() -> Router<AppState> {
    Router::new().route("/", get(alerts::index).post(alerts::create))
}

/// Create the full API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/auth", auth_routes())
        .nest("/api/pins", pin_routes())
        .nest("/api/requests", request_routes())
        .nest("/api/volunteers", volunteer_routes())
        .nest("/api/organizations", organization_routes())
        .nest("/api/alerts", alert_routes())
        .route("/api/summary", get(summary::platform))
        .route("/api/summary/pins", get(summary::pins))
        .route("/api/map-center", get(summary::map_center))
        .route("/api/images", post(images::upload))
        .route("/api/images/{reference}", get(images::fetch))
}
