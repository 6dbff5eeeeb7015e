//! The send/receive exchange and reply handling.

use convo_common::{new_correlation_id, ClientState, Message};
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::parser::{self, NavigationCommand, NoticeField, ParseOutcome, ParsedReply};
use crate::{AgentError, ExchangeRequest};

use super::navigation::PendingNavigation;
use super::session::ChatSession;
use super::SendOutcome;

impl ChatSession {
    /// Send one user utterance and process the reply.
    ///
    /// Blank input and sends while not `Idle` are ignored. Transport
    /// failures are absorbed into the transcript; the only error returned
    /// is `AgentError::SessionUnresolved`.
    pub async fn send(&mut self, text: &str) -> Result<SendOutcome, AgentError> {
        // An overdue navigation is applied before anything else.
        self.poll_navigation();

        if text.trim().is_empty() {
            return Ok(SendOutcome::Ignored);
        }
        if !self.state.accepts_send() {
            debug!(state = %self.state, "send ignored while busy");
            return Ok(SendOutcome::Ignored);
        }
        let Some(session) = self.session.clone() else {
            warn!("send refused: no session");
            return Err(AgentError::SessionUnresolved);
        };

        self.append(Message::user(text));
        self.set_state(ClientState::Sending);

        let request = ExchangeRequest {
            message: text.to_string(),
            session_id: session.id,
            user_id: session.user_id,
        };
        let cid = new_correlation_id();
        debug!(cid, session = %request.session_id, "exchange started");

        let outcome = match self.exchange.stream_query(&request).await {
            Ok(body) => self.apply_reply(&cid, parser::parse(&body)),
            Err(e) => {
                error!(cid, error = %e, "exchange failed");
                self.fail()
            }
        };
        Ok(outcome)
    }

    fn apply_reply(&mut self, cid: &str, outcome: ParseOutcome) -> SendOutcome {
        match outcome {
            ParseOutcome::NoReply => {
                debug!(cid, "no reply in stream");
                self.set_state(ClientState::Idle);
                SendOutcome::NoReply
            }
            ParseOutcome::Reply(ParsedReply::PlainText { text }) => {
                debug!(cid, len = text.len(), "text reply");
                self.append(Message::agent(text));
                self.set_state(ClientState::Idle);
                SendOutcome::Replied
            }
            ParseOutcome::Reply(ParsedReply::Navigation(command)) => {
                if command.notice_field == NoticeField::Risposta {
                    debug!(cid, "navigation notice received as `risposta`");
                }
                if command.target.is_home() {
                    self.navigate_home(cid, command)
                } else {
                    self.schedule_navigation(cid, command)
                }
            }
        }
    }

    fn navigate_home(&mut self, cid: &str, command: NavigationCommand) -> SendOutcome {
        info!(cid, "navigating home");
        self.append(Message::agent(command.notice));
        self.switch_page(command.target);
        self.set_state(ClientState::Idle);
        SendOutcome::NavigatedHome
    }

    /// Arm a deferred page switch. A navigation still pending is applied
    /// first so its page switch is never lost.
    pub(super) fn schedule_navigation(
        &mut self,
        cid: &str,
        command: NavigationCommand,
    ) -> SendOutcome {
        if self.pending.is_some() {
            warn!(cid, "previous navigation still pending, applying it now");
            self.fire_navigation();
        }

        let target = command.target.clone();
        let delay = self.options.navigation_delay;
        info!(cid, page = %target, delay_ms = delay.as_millis() as u64, "navigation scheduled");

        self.page_data = Some(command.page.clone());
        self.append(Message::agent(self.options.navigation_placeholder.clone()));
        self.pending = Some(PendingNavigation::new(command, Instant::now() + delay));
        self.set_state(ClientState::AwaitingNavigationDelay);
        SendOutcome::NavigationScheduled(target)
    }

    /// No reply placeholder exists while a request is in flight, so the
    /// generic error message is appended after the user's message.
    fn fail(&mut self) -> SendOutcome {
        self.append(Message::agent(self.options.error_message.clone()));
        self.set_state(ClientState::Error);
        self.set_state(ClientState::Idle);
        SendOutcome::Failed
    }
}
