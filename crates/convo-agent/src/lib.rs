//! Conversational-agent session client.
//!
//! Talks to a remote reasoning engine on behalf of one user:
//! - Session resolution (local cache, remote registry, creation)
//! - One streamed exchange at a time
//! - Tail-line response parsing with embedded navigation commands
//! - An explicit chat state machine for presentation layers

pub mod auth;
pub mod chat;
pub mod engine;
pub mod parser;
pub mod session;
pub mod store;
pub mod streaming;

#[cfg(test)]
mod testing;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use auth::{EnvToken, StaticToken, TokenProvider};
pub use chat::{ChatOptions, ChatSession, PendingNavigation, SendOutcome};
pub use convo_common::{ClientState, Message, PageId, Role, SessionId};
pub use engine::{EngineClient, EngineConfig};
pub use parser::{parse, NavigationCommand, NoticeField, PageData, ParseOutcome, ParsedReply};
pub use session::{Session, SessionManager};
pub use store::{FileStore, MemoryStore, SessionStore};

/// Remote registry of the conversation sessions a user owns.
#[async_trait]
pub trait SessionRegistry: Send + Sync {
    /// Sessions belonging to `user_id`, in the order the registry returns them.
    async fn list_sessions(&self, user_id: &str) -> Result<Vec<RemoteSession>, AgentError>;

    async fn create_session(&self, user_id: &str) -> Result<SessionId, AgentError>;
}

/// Carries one user utterance to the engine and returns the raw streamed body.
#[async_trait]
pub trait Exchange: Send + Sync {
    async fn stream_query(&self, request: &ExchangeRequest) -> Result<String, AgentError>;
}

/// A session entry as listed by the registry. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSession {
    pub id: SessionId,
}

/// Input of a single exchange. Built per send, never retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRequest {
    pub message: String,
    pub session_id: SessionId,
    pub user_id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("auth error: {0}")]
    Auth(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("timeout")]
    Timeout,
    #[error("no conversation session is available")]
    SessionUnresolved,
    #[error(transparent)]
    Store(#[from] convo_common::StoreError),
}

impl AgentError {
    /// Whether this failure happened while talking to the engine.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AgentError::Network(_) | AgentError::Api { .. } | AgentError::Timeout | AgentError::Auth(_)
        )
    }
}

impl From<reqwest::Error> for AgentError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AgentError::Timeout
        } else if e.is_decode() {
            AgentError::Parse(e.to_string())
        } else {
            AgentError::Network(e.to_string())
        }
    }
}
