//! Bearer-token sources.
//!
//! Token acquisition lives outside this crate; the client only asks a
//! `TokenProvider` for a fresh token before every request.

use async_trait::async_trait;

use crate::AgentError;

/// Name of the environment variable `EnvToken` reads by default.
pub const DEFAULT_TOKEN_VAR: &str = "CONVO_AUTH_TOKEN";

#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn token(&self) -> Result<String, AgentError>;
}

/// A fixed token, e.g. injected by an embedding application.
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("StaticToken").field(&"[REDACTED]").finish()
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn token(&self) -> Result<String, AgentError> {
        Ok(self.0.clone())
    }
}

/// Reads the token from an environment variable on every call, so a
/// refreshed value is picked up without restarting.
#[derive(Debug, Clone)]
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvToken {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_VAR)
    }
}

#[async_trait]
impl TokenProvider for EnvToken {
    async fn token(&self) -> Result<String, AgentError> {
        std::env::var(&self.var).map_err(|_| AgentError::Auth(format!("{} is not set", self.var)))
    }
}
