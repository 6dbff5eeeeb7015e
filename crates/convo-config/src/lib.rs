//! convo configuration system.
//!
//! TOML-based configuration with validation. All sections use sensible
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! let config = convo_config::load_config().expect("failed to load config");
//! println!("{}", config.endpoint.stream_url());
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ConvoConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{default_config_path, load_default, load_from_path};
pub use validation::validate;

use convo_common::ConfigError;
use std::path::Path;

/// Load config from `path` when given, otherwise from the platform default
/// location (creating a documented default file there on first run).
pub fn load_config_from(path: Option<&Path>) -> Result<ConvoConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

/// Convenience function to load config from the platform default path.
pub fn load_config() -> Result<ConvoConfig, ConfigError> {
    load_config_from(None)
}

/// Serialize a config to a pretty-printed TOML string.
pub fn config_to_toml(config: &ConvoConfig) -> String {
    toml::to_string_pretty(config)
        .unwrap_or_else(|e| format!("# failed to serialize config: {e}\n"))
}
