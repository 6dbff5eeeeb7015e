//! Wires config into the agent components.

use std::sync::Arc;
use std::time::Duration;

use convo_agent::{
    ChatOptions, ChatSession, EngineClient, EngineConfig, EnvToken, FileStore, MemoryStore,
    SessionManager, SessionStore,
};
use convo_common::ConvoError;
use convo_config::ConvoConfig;
use tracing::{info, warn};

/// Everything the front end needs to run one conversation.
pub struct Booted {
    pub chat: ChatSession,
    pub user_id: String,
}

pub fn chat_options(config: &ConvoConfig) -> ChatOptions {
    ChatOptions {
        navigation_delay: Duration::from_millis(u64::from(config.chat.navigation_delay_ms)),
        navigation_placeholder: config.chat.navigation_placeholder.clone(),
        error_message: config.chat.error_message.clone(),
        banner_ttl: Duration::from_millis(u64::from(config.chat.banner_ttl_ms)),
    }
}

pub fn engine_config(config: &ConvoConfig) -> EngineConfig {
    let endpoint = &config.endpoint;
    EngineConfig::new(endpoint.base_url.clone())
        .with_urls(endpoint.query_url(), endpoint.stream_url())
        .with_connect_timeout(Duration::from_secs(u64::from(endpoint.connect_timeout_secs)))
        .with_request_timeout(Duration::from_secs(u64::from(endpoint.request_timeout_secs)))
}

fn session_store(config: &ConvoConfig) -> Arc<dyn SessionStore> {
    if let Some(path) = &config.storage.session_file {
        return Arc::new(FileStore::new(path.clone()));
    }
    match FileStore::default_location() {
        Ok(store) => {
            info!("session cache at {}", store.path().display());
            Arc::new(store)
        }
        Err(e) => {
            warn!("{e}; session id will not survive a restart");
            Arc::new(MemoryStore::new())
        }
    }
}

/// Build the client stack and resolve the user's session.
///
/// A session that cannot be resolved is not fatal: the chat is returned
/// without one and refuses every send.
pub async fn boot(config: &ConvoConfig, user_id: String) -> Result<Booted, ConvoError> {
    let engine = Arc::new(
        EngineClient::new(engine_config(config), Arc::new(EnvToken::default()))
            .map_err(|e| ConvoError::Agent(e.to_string()))?,
    );
    let manager = SessionManager::new(engine.clone(), session_store(config));

    let mut chat = ChatSession::new(engine).with_options(chat_options(config));
    if let Err(e) = chat.resolve_session(&manager, &user_id).await {
        warn!(user_id = %user_id, "could not resolve a session: {e}");
    }

    Ok(Booted { chat, user_id })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_options_follow_config() {
        let mut config = ConvoConfig::default();
        config.chat.navigation_delay_ms = 250;
        config.chat.banner_ttl_ms = 4000;
        config.chat.error_message = "Errore".into();

        let options = chat_options(&config);
        assert_eq!(options.navigation_delay, Duration::from_millis(250));
        assert_eq!(options.banner_ttl, Duration::from_millis(4000));
        assert_eq!(options.error_message, "Errore");
        assert_eq!(options.navigation_placeholder, "Navigazione in corso...");
    }

    #[test]
    fn engine_config_uses_endpoint_suffixes() {
        let mut config = ConvoConfig::default();
        config.endpoint.base_url = "https://engine.example/e".into();
        config.endpoint.stream_suffix = ":streamQuery".into();
        config.endpoint.request_timeout_secs = 30;

        let engine = engine_config(&config);
        assert_eq!(engine.query_url, "https://engine.example/e:query");
        assert_eq!(engine.stream_url, "https://engine.example/e:streamQuery");
        assert_eq!(engine.request_timeout, Duration::from_secs(30));
    }
}
