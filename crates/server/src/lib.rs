//! ReliefMap server library.
//!
//! This crate provides the coordination API as a library, allowing it to be
//! tested and reused. The binary in `main.rs` wires it to an HTTP listener.
//!
//! # Architecture
//!
//! - Axum JSON API over an in-process authoritative store
//! - tower-sessions for actor identity (in-memory store)
//! - A central authorization gate ([`authz`]) consulted before every mutation
//!
//! The store is the single source of truth; the UI and CLI are read-only or
//! write-through clients. Persistence, geolocation, and push delivery are
//! external collaborators and are not part of this crate.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod authz;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
