//! Business logic and repository trait definitions for Relay.
//!
//! This crate defines the "ports" (repository traits) that the infrastructure
//! layer implements. It depends only on `relay-types` -- never on
//! `relay-infra` or any database/IO crate.

pub mod channel;
pub mod reply;
pub mod repository;
pub mod seed;
pub mod service;
