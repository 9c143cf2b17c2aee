//! Observability setup for Relay: structured logging with optional
//! OpenTelemetry span export.

pub mod tracing_setup;
