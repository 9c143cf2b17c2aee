//! Shared domain types for Relay.
//!
//! This crate contains the domain types used across the relay:
//! users, chat messages, configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod config;
pub mod error;
pub mod message;
pub mod user;
