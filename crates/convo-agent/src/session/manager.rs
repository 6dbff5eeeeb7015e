//! SessionManager and the resolved Session value.

use std::collections::HashMap;
use std::sync::Arc;

use convo_common::SessionId;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::store::{session_key, SessionStore};
use crate::{AgentError, SessionRegistry};

/// The active conversation of one user. Never mutated, only replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: SessionId,
    pub user_id: String,
}

impl Session {
    pub fn new(id: SessionId, user_id: impl Into<String>) -> Self {
        Self {
            id,
            user_id: user_id.into(),
        }
    }
}

/// Resolves the active session of a user, in priority order:
/// local store, first registry entry, newly created session.
pub struct SessionManager {
    registry: Arc<dyn SessionRegistry>,
    store: Arc<dyn SessionStore>,
    /// Sessions already resolved by this process, by user id.
    resolved: Mutex<HashMap<String, Session>>,
}

impl SessionManager {
    pub fn new(registry: Arc<dyn SessionRegistry>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            registry,
            store,
            resolved: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve the session of `user_id`. Once resolved, later calls return
    /// the same session without touching the store or the network.
    ///
    /// Fails with `AgentError::SessionUnresolved` only when nothing was
    /// cached, the registry had nothing usable, and creation failed.
    pub async fn resolve(&self, user_id: &str) -> Result<Session, AgentError> {
        if let Some(session) = self.resolved.lock().await.get(user_id) {
            return Ok(session.clone());
        }

        let session = self.resolve_uncached(user_id).await?;
        self.resolved
            .lock()
            .await
            .insert(user_id.to_string(), session.clone());
        Ok(session)
    }

    async fn resolve_uncached(&self, user_id: &str) -> Result<Session, AgentError> {
        let key = session_key(user_id);

        if let Some(id) = self.cached(&key).await {
            info!(user_id, session = %id, "using cached session");
            return Ok(Session::new(id, user_id));
        }

        if let Some(id) = self.latest_remote(user_id).await {
            info!(user_id, session = %id, "restored session from registry");
            self.persist(&key, &id).await;
            return Ok(Session::new(id, user_id));
        }

        match self.registry.create_session(user_id).await {
            Ok(id) if !id.as_str().is_empty() => {
                info!(user_id, session = %id, "created new session");
                self.persist(&key, &id).await;
                Ok(Session::new(id, user_id))
            }
            Ok(_) => {
                warn!(user_id, "create_session returned an empty id");
                Err(AgentError::SessionUnresolved)
            }
            Err(e) => {
                warn!(user_id, error = %e, "create_session failed");
                Err(AgentError::SessionUnresolved)
            }
        }
    }

    async fn cached(&self, key: &str) -> Option<SessionId> {
        match self.store.get(key).await {
            Ok(Some(id)) if !id.is_empty() => Some(SessionId::new(id)),
            Ok(_) => None,
            Err(e) => {
                warn!(key, error = %e, "session store read failed, treating as miss");
                None
            }
        }
    }

    /// First listed session. The registry is assumed to list newest first.
    async fn latest_remote(&self, user_id: &str) -> Option<SessionId> {
        match self.registry.list_sessions(user_id).await {
            Ok(sessions) => {
                let first = sessions.into_iter().next()?;
                if first.id.as_str().is_empty() {
                    warn!(user_id, "registry listed a session without id");
                    return None;
                }
                Some(first.id)
            }
            Err(e) => {
                warn!(user_id, error = %e, "list_sessions failed");
                None
            }
        }
    }

    async fn persist(&self, key: &str, id: &SessionId) {
        if let Err(e) = self.store.set(key, id.as_str()).await {
            warn!(key, error = %e, "failed to persist session id");
        } else {
            debug!(key, "session id cached");
        }
    }
}
