//! Broadcast hub for observer notifications.
//!
//! [`NotificationHub`] wraps a [`tokio::sync::broadcast`] channel. Every
//! state mutation publishes a [`BoardEvent`] through the hub, and every
//! WebSocket connection registers once on upgrade to receive all future
//! frames. The hub also carries opaque peer-relay messages, which bypass
//! the domain entirely.

use tokio::sync::broadcast;
use uuid::Uuid;

use super::BoardEvent;

/// Opaque identity of one observer connection.
///
/// Generated at registration time; used only to keep a relayed peer
/// message from echoing back to its sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(Uuid);

impl ObserverId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ObserverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One frame travelling through the hub.
#[derive(Debug, Clone)]
pub enum HubFrame {
    /// A domain event to be encoded to its wire form per connection.
    Event(BoardEvent),
    /// An opaque peer message, forwarded verbatim to every observer
    /// except the one it originated from.
    Relay {
        /// The observer that sent the message.
        origin: ObserverId,
        /// The message text, untouched.
        text: String,
    },
}

/// A registered observer: its identity plus its frame receiver.
///
/// Dropping the receiver unregisters the observer; there is no explicit
/// unregister call.
#[derive(Debug)]
pub struct Observer {
    /// This observer's identity.
    pub id: ObserverId,
    /// Receiving end for all hub frames.
    pub frames: broadcast::Receiver<HubFrame>,
}

/// Broadcast hub for [`BoardEvent`]s and peer-relay messages.
///
/// Backed by a `tokio::broadcast` channel with a configurable capacity.
/// When the ring buffer is full, the oldest frames are dropped for
/// lagging receivers; observers are never retried or queued individually.
#[derive(Debug, Clone)]
pub struct NotificationHub {
    sender: broadcast::Sender<HubFrame>,
}

impl NotificationHub {
    /// Creates a new hub with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Registers a new observer.
    ///
    /// Each WebSocket connection calls this once on upgrade. The observer
    /// receives every frame published after registration.
    #[must_use]
    pub fn register(&self) -> Observer {
        Observer {
            id: ObserverId::new(),
            frames: self.sender.subscribe(),
        }
    }

    /// Publishes a domain event to all observers.
    ///
    /// Returns the number of observers that received the frame. If no
    /// observer is registered the event is silently dropped.
    pub fn broadcast(&self, event: BoardEvent) -> usize {
        tracing::debug!(event = event.event_type_str(), "broadcasting");
        self.sender.send(HubFrame::Event(event)).unwrap_or(0)
    }

    /// Publishes an opaque peer message on behalf of `origin`.
    ///
    /// Connection tasks forward the text verbatim to their client unless
    /// the frame originated from that same connection.
    pub fn relay(&self, origin: ObserverId, text: String) -> usize {
        self.sender.send(HubFrame::Relay { origin, text }).unwrap_or(0)
    }

    /// Returns the current number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn broadcast_without_observers_returns_zero() {
        let hub = NotificationHub::new(16);
        assert_eq!(hub.broadcast(BoardEvent::QueueChanged), 0);
    }

    #[tokio::test]
    async fn observer_receives_event() {
        let hub = NotificationHub::new(16);
        let mut observer = hub.register();

        hub.broadcast(BoardEvent::RoomsChanged);

        let frame = observer.frames.recv().await;
        let Ok(HubFrame::Event(event)) = frame else {
            panic!("expected an event frame");
        };
        assert_eq!(event, BoardEvent::RoomsChanged);
    }

    #[tokio::test]
    async fn all_observers_receive_same_event() {
        let hub = NotificationHub::new(16);
        let mut a = hub.register();
        let mut b = hub.register();

        let count = hub.broadcast(BoardEvent::QueueChanged);
        assert_eq!(count, 2);

        let Ok(HubFrame::Event(ea)) = a.frames.recv().await else {
            panic!("a missed the event");
        };
        let Ok(HubFrame::Event(eb)) = b.frames.recv().await else {
            panic!("b missed the event");
        };
        assert_eq!(ea, eb);
    }

    #[tokio::test]
    async fn relay_carries_origin() {
        let hub = NotificationHub::new(16);
        let sender = hub.register();
        let mut receiver = hub.register();

        hub.relay(sender.id, "hello".to_string());

        let Ok(HubFrame::Relay { origin, text }) = receiver.frames.recv().await else {
            panic!("expected a relay frame");
        };
        assert_eq!(origin, sender.id);
        assert_eq!(text, "hello");
    }

    #[test]
    fn observer_count_tracks_registrations() {
        let hub = NotificationHub::new(16);
        assert_eq!(hub.observer_count(), 0);

        let a = hub.register();
        assert_eq!(hub.observer_count(), 1);

        let b = hub.register();
        assert_eq!(hub.observer_count(), 2);

        drop(a);
        assert_eq!(hub.observer_count(), 1);
        drop(b);
    }

    #[test]
    fn dropped_observer_never_poisons_broadcast() {
        let hub = NotificationHub::new(16);
        let kept = hub.register();
        let closed = hub.register();
        drop(closed);

        let count = hub.broadcast(BoardEvent::QueueChanged);
        assert_eq!(count, 1);
        drop(kept);
    }
}
