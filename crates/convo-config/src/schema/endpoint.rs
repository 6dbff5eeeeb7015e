//! Remote reasoning-engine endpoint configuration.

use serde::{Deserialize, Serialize};

/// Where the reasoning engine lives and how long to wait for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EndpointConfig {
    /// Engine resource URL; method suffixes are appended to it.
    pub base_url: String,
    /// Suffix of the request/response method (session registry).
    pub query_suffix: String,
    /// Suffix of the streaming method (exchange).
    pub stream_suffix: String,
    /// Total request timeout in seconds (valid range: 10-600).
    pub request_timeout_secs: u32,
    /// Connect timeout in seconds (valid range: 1-60).
    pub connect_timeout_secs: u32,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "https://europe-west1-aiplatform.googleapis.com/v1beta1/projects/PROJECT/locations/europe-west1/reasoningEngines/ENGINE".into(),
            query_suffix: ":query".into(),
            stream_suffix: ":streamQuery?alt=sse".into(),
            request_timeout_secs: 120,
            connect_timeout_secs: 10,
        }
    }
}

impl EndpointConfig {
    /// URL of the session registry (`list_sessions`, `create_session`).
    pub fn query_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.query_suffix)
    }

    /// URL of the streamed exchange (`stream_query`).
    pub fn stream_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.stream_suffix)
    }
}
