//! Configuration schema types for convo.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod chat;
mod endpoint;
mod system;

pub use chat::*;
pub use endpoint::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for convo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ConvoConfig {
    pub endpoint: EndpointConfig,
    pub user: UserConfig,
    pub chat: ChatConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}
