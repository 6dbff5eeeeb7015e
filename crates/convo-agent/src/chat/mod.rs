//! Conversation orchestration.
//!
//! `ChatSession` owns the transcript and the client state machine:
//!
//! ```text
//! Idle ──send──▶ Sending ──reply──▶ Idle
//!                   │ └──navigate──▶ AwaitingNavigationDelay ──deadline──▶ Idle
//!                   └──failure──▶ Error ──▶ Idle
//! ```
//!
//! It is explicitly constructed and owned by one presentation root; every
//! change is also published on its `EventBus`.

mod exchange;
mod navigation;
mod session;


use std::time::Duration;

use convo_common::{PageId, DEFAULT_BANNER_TTL};

pub use navigation::PendingNavigation;
pub use session::ChatSession;

/// Fixed texts and timings of the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatOptions {
    /// Delay between a navigation reply and the page switch.
    pub navigation_delay: Duration,
    /// Interim agent message while a navigation is pending.
    pub navigation_placeholder: String,
    /// Agent message substituted for a failed exchange.
    pub error_message: String,
    pub banner_ttl: Duration,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self {
            navigation_delay: Duration::from_millis(1000),
            navigation_placeholder: "Navigazione in corso...".into(),
            error_message: "An error occurred. Please try again.".into(),
            banner_ttl: DEFAULT_BANNER_TTL,
        }
    }
}

/// What a call to `ChatSession::send` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input, or a send while not idle. Nothing changed.
    Ignored,
    /// An agent text reply was appended.
    Replied,
    /// The exchange produced no decodable reply.
    NoReply,
    /// The agent sent the client home immediately.
    NavigatedHome,
    /// A page switch to the given page is pending.
    NavigationScheduled(PageId),
    /// The exchange failed; the generic error message was appended.
    Failed,
}
