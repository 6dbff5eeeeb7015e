//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# convo configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[endpoint]
# Reasoning-engine resource URL. Method suffixes are appended verbatim.
# base_url = "https://europe-west1-aiplatform.googleapis.com/v1beta1/projects/PROJECT/locations/europe-west1/reasoningEngines/ENGINE"
# query_suffix = ":query"
# stream_suffix = ":streamQuery?alt=sse"
# request_timeout_secs = 120   # 10-600
# connect_timeout_secs = 10    # 1-60

[user]
# user_id = "local-user"

[chat]
# navigation_delay_ms = 1000   # 0-10000
# navigation_placeholder = "Navigazione in corso..."
# error_message = "An error occurred. Please try again."
# banner_ttl_ms = 2600         # 500-30000

[storage]
# session_file = "/path/to/sessions.json"

[logging]
# level = "info"               # trace, debug, info, warn, error
"##
    .to_string()
}
