//! ReliefMap Core - Shared types library.
//!
//! This crate provides common types used across all ReliefMap components:
//! - `server` - Coordination API (pins, help requests, volunteers, organizations)
//! - `cli` - Command-line tools for seeding and organization management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no store
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, roles, statuses,
//!   contact details, and funding amounts

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
