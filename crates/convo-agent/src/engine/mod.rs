//! Reasoning-engine HTTP client.
//!
//! Implements `SessionRegistry` over the request/response query method
//! and `Exchange` over the streaming method of one engine resource.

mod api;
mod client;
mod config;

pub use client::EngineClient;
pub use config::EngineConfig;
