use std::path::PathBuf;

use clap::Parser;

/// convo: chat with a remote reasoning agent from the terminal.
#[derive(Parser, Debug)]
#[command(name = "convo", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error) or a full filter directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// User identity override.
    #[arg(short = 'u', long)]
    pub user: Option<String>,

    /// Send a single message, print the reply, and exit.
    #[arg(short = 'm', long)]
    pub message: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_shot_flags() {
        let args = Args::parse_from(["convo", "-u", "studente", "-m", "ciao", "--log-level", "debug"]);
        assert_eq!(args.user.as_deref(), Some("studente"));
        assert_eq!(args.message.as_deref(), Some("ciao"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.config.is_none());
    }

    #[test]
    fn defaults_are_interactive() {
        let args = Args::parse_from(["convo"]);
        assert!(args.message.is_none());
        assert!(args.user.is_none());
    }
}
