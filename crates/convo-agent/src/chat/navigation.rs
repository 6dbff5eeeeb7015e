//! Deferred page switch of a navigation command.

use convo_common::{ClientState, Message, PageId};
use tokio::time::Instant;
use tracing::{debug, info};

use crate::parser::NavigationCommand;

use super::session::ChatSession;

/// A scheduled one-shot page switch.
///
/// Owned by the `ChatSession`; applied at most once, either when its
/// deadline is awaited (`settle`) or observed as passed
/// (`poll_navigation`), or dropped by `cancel_navigation`.
#[derive(Debug, Clone)]
pub struct PendingNavigation {
    command: NavigationCommand,
    deadline: Instant,
}

impl PendingNavigation {
    pub(super) fn new(command: NavigationCommand, deadline: Instant) -> Self {
        Self { command, deadline }
    }

    pub fn target(&self) -> &PageId {
        &self.command.target
    }

    pub fn notice(&self) -> &str {
        &self.command.notice
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn is_due(&self) -> bool {
        Instant::now() >= self.deadline
    }
}

impl ChatSession {
    pub fn pending_navigation(&self) -> Option<&PendingNavigation> {
        self.pending.as_ref()
    }

    /// Wait for the pending navigation's deadline and apply it.
    ///
    /// Returns the page switched to, or `None` if nothing was pending.
    /// Dropping the future before the deadline leaves the navigation pending.
    pub async fn settle(&mut self) -> Option<PageId> {
        let deadline = self.pending.as_ref()?.deadline;
        tokio::time::sleep_until(deadline).await;
        self.fire_navigation()
    }

    /// Apply the pending navigation if its deadline has passed.
    pub fn poll_navigation(&mut self) -> Option<PageId> {
        if self.pending.as_ref().is_some_and(PendingNavigation::is_due) {
            self.fire_navigation()
        } else {
            None
        }
    }

    /// Drop the pending navigation without switching page.
    ///
    /// The placeholder already in the transcript stays; the notice is
    /// never appended and no banner is shown.
    pub fn cancel_navigation(&mut self) -> Option<NavigationCommand> {
        let pending = self.pending.take()?;
        info!(page = %pending.command.target, "navigation cancelled");
        if self.state == ClientState::AwaitingNavigationDelay {
            self.set_state(ClientState::Idle);
        }
        Some(pending.command)
    }

    pub(super) fn fire_navigation(&mut self) -> Option<PageId> {
        let PendingNavigation { command, .. } = self.pending.take()?;
        debug!(page = %command.target, "navigation deadline reached");

        self.switch_page(command.target.clone());
        self.show_banner(&command.notice);
        self.append(Message::agent(command.notice));
        if self.state == ClientState::AwaitingNavigationDelay {
            self.set_state(ClientState::Idle);
        }
        Some(command.target)
    }
}
