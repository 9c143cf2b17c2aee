//! HTTP and WebSocket request handlers.

pub mod message;
pub mod user;
pub mod ws;
