//! Line-oriented terminal front end.

use std::io::Write;

use convo_agent::{AgentError, ChatSession, SendOutcome, Session};
use convo_common::{ChatEvent, ClientState, Message, Role};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast;
use tracing::debug;

const HELP: &str = "commands: /page  /cancel  /help  /quit";

enum Step {
    Line(Option<String>),
    Navigated,
}

/// Render one chat event as a terminal line, if it deserves one.
pub fn render_event(event: &ChatEvent) -> Option<String> {
    match event {
        ChatEvent::MessageAppended(Message {
            role: Role::Agent,
            content,
        }) => Some(format!("agent> {content}")),
        ChatEvent::MessageAppended(_) => None,
        ChatEvent::PageChanged(page) => Some(format!("[page: {page}]")),
        ChatEvent::Banner(text) => Some(format!("[notice] {text}")),
        ChatEvent::StateChanged(ClientState::Sending) => Some("…".to_string()),
        ChatEvent::SessionResolved(id) => Some(format!("[session {id}]")),
        ChatEvent::StateChanged(_) | ChatEvent::Unknown => None,
    }
}

/// Status line for the session resolved at boot, before anyone subscribed.
pub fn session_line(session: Option<&Session>) -> String {
    match session {
        Some(session) => render_event(&ChatEvent::SessionResolved(session.id.clone()))
            .unwrap_or_default(),
        None => "[no session; sends will be refused]".to_string(),
    }
}

fn flush_events(rx: &mut broadcast::Receiver<ChatEvent>) {
    loop {
        match rx.try_recv() {
            Ok(event) => {
                if let Some(line) = render_event(&event) {
                    println!("{line}");
                }
            }
            Err(broadcast::error::TryRecvError::Lagged(n)) => {
                debug!(skipped = n, "event receiver lagged");
            }
            Err(_) => break,
        }
    }
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

async fn send(chat: &mut ChatSession, text: &str) {
    match chat.send(text).await {
        Ok(SendOutcome::Ignored) if !text.trim().is_empty() => {
            println!("[busy, message not sent]");
        }
        Ok(_) => {}
        Err(AgentError::SessionUnresolved) => {
            println!("[no conversation session available; check the endpoint and token]");
        }
        Err(e) => println!("[error] {e}"),
    }
}

/// Send one message, wait for any navigation it triggers, print the result.
pub async fn one_shot(chat: &mut ChatSession, text: &str) {
    let mut rx = chat.subscribe();
    send(chat, text).await;
    chat.settle().await;
    flush_events(&mut rx);
}

/// Interactive loop until EOF or `/quit`.
pub async fn run(chat: &mut ChatSession) -> std::io::Result<()> {
    let mut rx = chat.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", session_line(chat.session()));
    println!("{HELP}");
    prompt();

    loop {
        let step = if chat.pending_navigation().is_some() {
            tokio::select! {
                _ = chat.settle() => Step::Navigated,
                line = lines.next_line() => Step::Line(line?),
            }
        } else {
            Step::Line(lines.next_line().await?)
        };

        let line = match step {
            Step::Navigated => {
                flush_events(&mut rx);
                prompt();
                continue;
            }
            Step::Line(None) => break,
            Step::Line(Some(line)) => line,
        };

        match line.trim() {
            "/quit" | "/exit" => break,
            "/help" => println!("{HELP}"),
            "/page" => {
                let title = chat
                    .page_data()
                    .and_then(|d| d.title.clone())
                    .unwrap_or_default();
                println!("[page: {}] {title}", chat.active_page());
            }
            "/cancel" => match chat.cancel_navigation() {
                Some(cmd) => println!("[navigation to {} cancelled]", cmd.target),
                None => println!("[nothing pending]"),
            },
            text => send(chat, text).await,
        }

        flush_events(&mut rx);
        prompt();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use convo_common::{PageId, SessionId};

    #[test]
    fn agent_messages_are_rendered() {
        let line = render_event(&ChatEvent::MessageAppended(Message::agent("Ciao")));
        assert_eq!(line.as_deref(), Some("agent> Ciao"));
    }

    #[test]
    fn user_echo_is_suppressed() {
        assert!(render_event(&ChatEvent::MessageAppended(Message::user("Ciao"))).is_none());
    }

    #[test]
    fn navigation_events_are_rendered() {
        assert_eq!(
            render_event(&ChatEvent::PageChanged(PageId::new("lessons"))).as_deref(),
            Some("[page: lessons]")
        );
        assert_eq!(
            render_event(&ChatEvent::Banner("Ecco".into())).as_deref(),
            Some("[notice] Ecco")
        );
        assert_eq!(
            render_event(&ChatEvent::SessionResolved(SessionId::new("s-1"))).as_deref(),
            Some("[session s-1]")
        );
    }

    #[test]
    fn session_line_reports_the_boot_session() {
        let session = Session::new(SessionId::new("s-7"), "u-1");
        assert_eq!(session_line(Some(&session)), "[session s-7]");
        assert!(session_line(None).contains("no session"));
    }

    #[test]
    fn idle_transitions_are_silent() {
        assert!(render_event(&ChatEvent::StateChanged(ClientState::Idle)).is_none());
        assert!(render_event(&ChatEvent::Unknown).is_none());
    }
}
