use crate::schema::ConvoConfig;

use super::helpers::{validate_non_empty, validate_range};

pub(super) fn validate_endpoint(errors: &mut Vec<String>, config: &ConvoConfig) {
    let endpoint = &config.endpoint;

    let url = endpoint.base_url.trim();
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        errors.push(format!(
            "endpoint.base_url = {:?} must start with http:// or https://",
            endpoint.base_url
        ));
    }
    validate_non_empty(errors, "endpoint.query_suffix", &endpoint.query_suffix);
    validate_non_empty(errors, "endpoint.stream_suffix", &endpoint.stream_suffix);
    if endpoint.query_suffix == endpoint.stream_suffix {
        errors.push("endpoint.query_suffix and endpoint.stream_suffix must differ".into());
    }

    validate_range(
        errors,
        "endpoint.request_timeout_secs",
        endpoint.request_timeout_secs,
        10,
        600,
    );
    validate_range(
        errors,
        "endpoint.connect_timeout_secs",
        endpoint.connect_timeout_secs,
        1,
        60,
    );
}
