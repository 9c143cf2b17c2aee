//! HTTP and WebSocket layer for Relay.
//!
//! Axum router serving the user and history reads, the duplex chat channel
//! at `/ws`, and a health check, with permissive CORS and request tracing.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
