use serde::{Deserialize, Serialize};
use std::fmt;

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Agent,
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn agent(content: impl Into<String>) -> Self {
        Self {
            role: Role::Agent,
            content: content.into(),
        }
    }
}

/// Client-visible state of a conversation.
///
/// `Idle` is both the initial state and the only state that accepts a send.
/// `Error` is advisory and is left for `Idle` as soon as it is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ClientState {
    #[default]
    Idle,
    Sending,
    AwaitingNavigationDelay,
    Error,
}

impl ClientState {
    pub fn accepts_send(self) -> bool {
        self == ClientState::Idle
    }
}

impl fmt::Display for ClientState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClientState::Idle => "idle",
            ClientState::Sending => "sending",
            ClientState::AwaitingNavigationDelay => "awaiting-navigation",
            ClientState::Error => "error",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_constructors() {
        let m = Message::user("ciao");
        assert_eq!(m.role, Role::User);
        assert_eq!(m.content, "ciao");

        let m = Message::agent("salve");
        assert_eq!(m.role, Role::Agent);
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Message::agent("x")).unwrap();
        assert_eq!(json, r#"{"role":"agent","content":"x"}"#);
    }

    #[test]
    fn only_idle_accepts_send() {
        assert!(ClientState::Idle.accepts_send());
        assert!(!ClientState::Sending.accepts_send());
        assert!(!ClientState::AwaitingNavigationDelay.accepts_send());
        assert!(!ClientState::Error.accepts_send());
    }

    #[test]
    fn default_state_is_idle() {
        assert_eq!(ClientState::default(), ClientState::Idle);
    }

    #[test]
    fn state_display() {
        assert_eq!(ClientState::AwaitingNavigationDelay.to_string(), "awaiting-navigation");
        assert_eq!(ClientState::Sending.to_string(), "sending");
    }
}
