use crate::schema::ConvoConfig;

use super::helpers::{validate_non_empty, validate_range};

pub(super) fn validate_chat(errors: &mut Vec<String>, config: &ConvoConfig) {
    let chat = &config.chat;
    validate_range(errors, "chat.navigation_delay_ms", chat.navigation_delay_ms, 0, 10_000);
    validate_range(errors, "chat.banner_ttl_ms", chat.banner_ttl_ms, 500, 30_000);
    validate_non_empty(errors, "chat.navigation_placeholder", &chat.navigation_placeholder);
    validate_non_empty(errors, "chat.error_message", &chat.error_message);
}

pub(super) fn validate_user(errors: &mut Vec<String>, config: &ConvoConfig) {
    validate_non_empty(errors, "user.user_id", &config.user.user_id);
}
