//! Engine client configuration.

use std::time::Duration;

/// Engine client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Request/response method URL (session registry).
    pub query_url: String,
    /// Streaming method URL (exchange).
    pub stream_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl EngineConfig {
    /// Derive both method URLs from the engine resource URL using the
    /// engine's standard `:query` / `:streamQuery?alt=sse` suffixes.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let base = base_url.trim_end_matches('/');
        Self {
            query_url: format!("{base}:query"),
            stream_url: format!("{base}:streamQuery?alt=sse"),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
        }
    }

    pub fn with_urls(mut self, query_url: impl Into<String>, stream_url: impl Into<String>) -> Self {
        self.query_url = query_url.into();
        self.stream_url = stream_url.into();
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_derives_method_urls() {
        let config = EngineConfig::new("https://engine.example/reasoningEngines/1/");
        assert_eq!(config.query_url, "https://engine.example/reasoningEngines/1:query");
        assert_eq!(
            config.stream_url,
            "https://engine.example/reasoningEngines/1:streamQuery?alt=sse"
        );
    }

    #[test]
    fn builders_override_defaults() {
        let config = EngineConfig::new("https://e")
            .with_urls("https://q", "https://s")
            .with_request_timeout(Duration::from_secs(30))
            .with_connect_timeout(Duration::from_secs(2));
        assert_eq!(config.query_url, "https://q");
        assert_eq!(config.stream_url, "https://s");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
    }
}
