//! In-process fakes for the registry, exchange and store seams.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use convo_common::{SessionId, StoreError};
use serde_json::json;

use crate::store::SessionStore;
use crate::{AgentError, Exchange, ExchangeRequest, RemoteSession, SessionRegistry};

pub(crate) struct FakeRegistry {
    sessions: Vec<String>,
    created: Option<String>,
    fail_list: bool,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
}

impl FakeRegistry {
    /// `created: None` makes `create_session` fail.
    pub(crate) fn new(sessions: Vec<&str>, created: Option<&str>) -> Self {
        Self {
            sessions: sessions.into_iter().map(String::from).collect(),
            created: created.map(String::from),
            fail_list: false,
            list_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionRegistry for FakeRegistry {
    async fn list_sessions(&self, _user_id: &str) -> Result<Vec<RemoteSession>, AgentError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list {
            return Err(AgentError::Network("connection refused".into()));
        }
        Ok(self
            .sessions
            .iter()
            .map(|id| RemoteSession {
                id: SessionId::new(id.clone()),
            })
            .collect())
    }

    async fn create_session(&self, _user_id: &str) -> Result<SessionId, AgentError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        match &self.created {
            Some(id) => Ok(SessionId::new(id.clone())),
            None => Err(AgentError::Api {
                status: 500,
                body: "internal".into(),
            }),
        }
    }
}

/// Replays canned exchange results in order and records every request.
pub(crate) struct ScriptedExchange {
    replies: Mutex<VecDeque<Result<String, AgentError>>>,
    requests: Mutex<Vec<ExchangeRequest>>,
}

impl ScriptedExchange {
    pub(crate) fn new(replies: Vec<Result<String, AgentError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn requests(&self) -> Vec<ExchangeRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Exchange for ScriptedExchange {
    async fn stream_query(&self, request: &ExchangeRequest) -> Result<String, AgentError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AgentError::Network("no scripted reply".into())))
    }
}

/// A store whose every operation fails.
pub(crate) struct FailingStore;

#[async_trait]
impl SessionStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Corrupt("unreadable".into()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Io(std::io::Error::other("read-only filesystem")))
    }
}

/// A streamed body whose tail line carries `text`.
pub(crate) fn stream_body(text: &str) -> String {
    let partial = json!({ "content": { "parts": [{ "text": "..." }] }, "partial": true });
    let last = json!({ "content": { "parts": [{ "text": text }], "role": "model" } });
    format!("{partial}\n{last}\n")
}
