//! Conversation behaviour: delays and fixed transcript texts.

use serde::{Deserialize, Serialize};

/// Chat state-machine configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChatConfig {
    /// Delay before a navigation command switches page (valid range: 0-10000).
    pub navigation_delay_ms: u32,
    /// Interim agent message shown while a navigation is pending.
    pub navigation_placeholder: String,
    /// Agent message substituted when an exchange fails.
    pub error_message: String,
    /// How long a notice banner stays visible (valid range: 500-30000).
    pub banner_ttl_ms: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            navigation_delay_ms: 1000,
            navigation_placeholder: "Navigazione in corso...".into(),
            error_message: "An error occurred. Please try again.".into(),
            banner_ttl_ms: 2600,
        }
    }
}
