mod boot;
mod cli;
mod repl;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

/// Directive for `--log-level`: a bare level applies to the convo crates.
fn log_directive(arg: Option<&str>, config: &convo_config::ConvoConfig) -> String {
    match arg {
        Some(level) if !level.contains('=') => format!("convo={level}"),
        Some(directive) => directive.to_string(),
        None => config.logging.directive(),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // .env may carry CONVO_AUTH_TOKEN and RUST_LOG.
    let _ = dotenvy::dotenv();

    let args = cli::parse();

    let config = match convo_config::load_config_from(args.config.as_deref()) {
        Ok(config) => Some(config),
        Err(e) if args.config.is_some() => {
            eprintln!("convo: {e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("convo: config load failed, using defaults: {e}");
            None
        }
    };
    let config = config.unwrap_or_default();

    let directive = log_directive(args.log_level.as_deref(), &config);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "convo=info".parse().expect("static directive")),
            ),
        )
        .init();

    tracing::info!("convo v{} starting", env!("CARGO_PKG_VERSION"));

    let user_id = args.user.clone().unwrap_or_else(|| config.user.user_id.clone());
    let mut booted = match boot::boot(&config, user_id).await {
        Ok(booted) => booted,
        Err(e) => {
            tracing::error!("startup failed: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(user_id = %booted.user_id, "ready");

    if let Some(message) = args.message.as_deref() {
        repl::one_shot(&mut booted.chat, message).await;
        return ExitCode::SUCCESS;
    }

    if let Err(e) = repl::run(&mut booted.chat).await {
        tracing::error!("terminal error: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("bye");
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_level_is_scoped_to_convo() {
        let config = convo_config::ConvoConfig::default();
        assert_eq!(log_directive(Some("debug"), &config), "convo=debug");
        assert_eq!(log_directive(Some("reqwest=trace"), &config), "reqwest=trace");
        assert_eq!(log_directive(None, &config), "convo=info");
    }
}
