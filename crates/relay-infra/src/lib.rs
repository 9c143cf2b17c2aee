//! Infrastructure layer for Relay.
//!
//! Contains implementations of the repository traits defined in `relay-core`
//! (SQLite storage), the config file loader, and data directory resolution.

pub mod config;
pub mod filesystem;
pub mod sqlite;
