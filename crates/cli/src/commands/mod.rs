//! CLI command implementations.

pub mod client;
pub mod org;
pub mod seed;
