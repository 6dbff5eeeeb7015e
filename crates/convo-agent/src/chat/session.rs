//! ChatSession struct, construction and read access.

use std::sync::Arc;
use std::time::Duration;

use convo_common::{
    Banner, BannerQueue, ChatEvent, ClientState, EventBus, Message, PageId,
};
use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::parser::PageData;
use crate::session::{Session, SessionManager};
use crate::{AgentError, Exchange};

use super::navigation::PendingNavigation;
use super::ChatOptions;

/// One conversation: transcript, state machine and navigation state.
pub struct ChatSession {
    pub(super) exchange: Arc<dyn Exchange>,
    pub(super) options: ChatOptions,
    /// Resolved session; `None` blocks every send.
    pub(super) session: Option<Session>,
    /// Transcript, chronological and append-only.
    pub(super) messages: Vec<Message>,
    pub(super) state: ClientState,
    pub(super) active_page: PageId,
    /// Payload of the most recent navigation command.
    pub(super) page_data: Option<PageData>,
    pub(super) pending: Option<PendingNavigation>,
    pub(super) banners: BannerQueue,
    pub(super) events: Arc<EventBus>,
}

impl ChatSession {
    pub fn new(exchange: Arc<dyn Exchange>) -> Self {
        Self {
            exchange,
            options: ChatOptions::default(),
            session: None,
            messages: Vec::new(),
            state: ClientState::Idle,
            active_page: PageId::home(),
            page_data: None,
            pending: None,
            banners: BannerQueue::default(),
            events: Arc::new(EventBus::default()),
        }
    }

    pub fn with_options(mut self, options: ChatOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_navigation_delay(mut self, delay: Duration) -> Self {
        self.options.navigation_delay = delay;
        self
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.attach_session(session);
        self
    }

    /// Share an existing bus, e.g. one the presentation root already listens on.
    pub fn with_event_bus(mut self, events: Arc<EventBus>) -> Self {
        self.events = events;
        self
    }

    /// Make `session` the active one. Sends are refused until this happens.
    pub fn attach_session(&mut self, session: Session) {
        info!(user_id = %session.user_id, session = %session.id, "session attached");
        self.events
            .publish(ChatEvent::SessionResolved(session.id.clone()));
        self.session = Some(session);
    }

    /// Resolve the session of `user_id` through `manager` and attach it.
    /// On failure the chat stays without a session and refuses sends.
    pub async fn resolve_session(
        &mut self,
        manager: &SessionManager,
        user_id: &str,
    ) -> Result<&Session, AgentError> {
        let session = manager.resolve(user_id).await?;
        self.attach_session(session);
        self.session.as_ref().ok_or(AgentError::SessionUnresolved)
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn state(&self) -> ClientState {
        self.state
    }

    /// Full transcript, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn active_page(&self) -> &PageId {
        &self.active_page
    }

    /// Content and title carried by the latest navigation command.
    pub fn page_data(&self) -> Option<&PageData> {
        self.page_data.as_ref()
    }

    /// Banners still on screen.
    pub fn visible_banners(&mut self) -> Vec<&Banner> {
        self.banners.visible()
    }

    pub fn dismiss_banners(&mut self) {
        self.banners.dismiss_all();
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChatEvent> {
        self.events.subscribe()
    }

    pub(super) fn set_state(&mut self, state: ClientState) {
        if self.state != state {
            debug!(from = %self.state, to = %state, "chat state");
            self.state = state;
            self.events.publish(ChatEvent::StateChanged(state));
        }
    }

    pub(super) fn append(&mut self, message: Message) {
        self.events
            .publish(ChatEvent::MessageAppended(message.clone()));
        self.messages.push(message);
    }

    pub(super) fn switch_page(&mut self, page: PageId) {
        debug!(page = %page, "active page");
        self.events.publish(ChatEvent::PageChanged(page.clone()));
        self.active_page = page;
    }

    pub(super) fn show_banner(&mut self, text: &str) {
        self.banners
            .push(Banner::new(text, self.options.banner_ttl));
        self.events.publish(ChatEvent::Banner(text.to_string()));
    }
}
