//! Engine client struct, request building, and response decoding.

use std::sync::Arc;

use convo_common::SessionId;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::TokenProvider;
use crate::{AgentError, ExchangeRequest, RemoteSession};

use super::config::EngineConfig;

/// Reasoning-engine client.
pub struct EngineClient {
    pub(crate) config: EngineConfig,
    pub(crate) http: reqwest::Client,
    pub(crate) token: Arc<dyn TokenProvider>,
}

#[derive(Debug, Deserialize)]
struct ListSessionsResponse {
    output: ListSessionsOutput,
}

#[derive(Debug, Deserialize)]
struct ListSessionsOutput {
    #[serde(default)]
    sessions: Vec<RemoteSession>,
}

impl EngineClient {
    pub fn new(config: EngineConfig, token: Arc<dyn TokenProvider>) -> Result<Self, AgentError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AgentError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            config,
            http,
            token,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// POST `body` with a fresh bearer token; non-2xx becomes `AgentError::Api`.
    pub(crate) async fn post(&self, url: &str, body: &Value) -> Result<reqwest::Response, AgentError> {
        let token = self.token.token().await?;

        let response = self
            .http
            .post(url)
            .header("content-type", "application/json")
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AgentError::Api {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(response)
    }
}

pub(crate) fn list_sessions_body(user_id: &str) -> Value {
    json!({
        "class_method": "list_sessions",
        "input": { "user_id": user_id }
    })
}

pub(crate) fn create_session_body(user_id: &str) -> Value {
    json!({
        "class_method": "create_session",
        "input": { "user_id": user_id }
    })
}

pub(crate) fn stream_query_body(request: &ExchangeRequest) -> Value {
    json!({
        "class_method": "stream_query",
        "input": {
            "message": request.message,
            "session_id": request.session_id,
            "user_id": request.user_id,
        }
    })
}

/// `{ output: { sessions: [...] } }` → sessions in registry order.
pub(crate) fn decode_list_sessions(json: Value) -> Result<Vec<RemoteSession>, AgentError> {
    let response: ListSessionsResponse =
        serde_json::from_value(json).map_err(|e| AgentError::Parse(e.to_string()))?;
    Ok(response.output.sessions)
}

/// `{ id }`, or the same wrapped in `output`.
pub(crate) fn decode_created_session(json: &Value) -> Result<SessionId, AgentError> {
    json.get("id")
        .or_else(|| json.pointer("/output/id"))
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .map(SessionId::new)
        .ok_or_else(|| AgentError::Parse("create_session response has no id".into()))
}
