//! Registry and exchange trait implementations for EngineClient.

use async_trait::async_trait;
use convo_common::SessionId;
use tracing::debug;

use crate::streaming::read_response;
use crate::{AgentError, Exchange, ExchangeRequest, RemoteSession, SessionRegistry};

use super::client::{
    create_session_body, decode_created_session, decode_list_sessions, list_sessions_body,
    stream_query_body, EngineClient,
};

#[async_trait]
impl SessionRegistry for EngineClient {
    async fn list_sessions(&self, user_id: &str) -> Result<Vec<RemoteSession>, AgentError> {
        debug!(user_id, "list_sessions request");

        let response = self
            .post(&self.config.query_url, &list_sessions_body(user_id))
            .await?;
        let json: serde_json::Value = response.json().await?;
        let sessions = decode_list_sessions(json)?;

        debug!(user_id, count = sessions.len(), "list_sessions response");
        Ok(sessions)
    }

    async fn create_session(&self, user_id: &str) -> Result<SessionId, AgentError> {
        debug!(user_id, "create_session request");

        let response = self
            .post(&self.config.query_url, &create_session_body(user_id))
            .await?;
        let json: serde_json::Value = response.json().await?;
        decode_created_session(&json)
    }
}

#[async_trait]
impl Exchange for EngineClient {
    async fn stream_query(&self, request: &ExchangeRequest) -> Result<String, AgentError> {
        debug!(session = %request.session_id, "stream_query request");

        let response = self
            .post(&self.config.stream_url, &stream_query_body(request))
            .await?;
        let streamed = read_response(response).await?;

        debug!(
            session = %request.session_id,
            events = streamed.events,
            bytes = streamed.body.len(),
            "stream_query complete"
        );
        Ok(streamed.body)
    }
}
