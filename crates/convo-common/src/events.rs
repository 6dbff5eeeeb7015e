use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::id::{PageId, SessionId};
use crate::types::{ClientState, Message};

/// Everything a presentation layer needs to mirror a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ChatEvent {
    SessionResolved(SessionId),
    StateChanged(ClientState),
    MessageAppended(Message),
    PageChanged(PageId),
    Banner(String),
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<ChatEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChatEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: ChatEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(ChatEvent::StateChanged(ClientState::Sending));

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, ChatEvent::StateChanged(ClientState::Sending)));
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(ChatEvent::Banner("ok".into()));

        let e1 = rx1.recv().await.unwrap();
        let e2 = rx2.recv().await.unwrap();
        assert!(matches!(e1, ChatEvent::Banner(ref s) if s == "ok"));
        assert!(matches!(e2, ChatEvent::Banner(ref s) if s == "ok"));
    }

    #[tokio::test]
    async fn events_arrive_in_publish_order() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(ChatEvent::MessageAppended(Message::user("ciao")));
        bus.publish(ChatEvent::PageChanged(PageId::new("lessons")));
        bus.publish(ChatEvent::SessionResolved(SessionId::new("s-1")));

        let e1 = rx.recv().await.unwrap();
        assert!(matches!(e1, ChatEvent::MessageAppended(ref m) if m.content == "ciao"));

        let e2 = rx.recv().await.unwrap();
        assert!(matches!(e2, ChatEvent::PageChanged(ref p) if p.as_str() == "lessons"));

        let e3 = rx.recv().await.unwrap();
        assert!(matches!(e3, ChatEvent::SessionResolved(ref s) if s.as_str() == "s-1"));
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        let count = bus.publish(ChatEvent::StateChanged(ClientState::Idle));
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn publish_returns_subscriber_count() {
        let bus = EventBus::new(16);
        let _rx1 = bus.subscribe();
        let _rx2 = bus.subscribe();

        let count = bus.publish(ChatEvent::Banner("x".into()));
        assert_eq!(count, 2);
    }

    #[test]
    fn unknown_event_deserializes() {
        let json = r#"{"type":"SomethingNewer","data":null}"#;
        let event: ChatEvent = serde_json::from_str(json).unwrap();
        assert!(matches!(event, ChatEvent::Unknown));
    }
}
