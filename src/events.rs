use indexmap::IndexMap;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use tracing::trace;

/// Recompute triggers delivered by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenEvent {
    /// The container may have changed width
    Resize,
    /// The text to display changed
    ContentChanged(String),
}

/// Kind of event a listener wants to receive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interest {
    Resize,
    Content,
}

impl ShortenEvent {
    pub fn interest(&self) -> Interest {
        match self {
            ShortenEvent::Resize => Interest::Resize,
            ShortenEvent::ContentChanged(_) => Interest::Content,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Receiving end of a registration.
///
/// All interests of one subscription share a single channel, so events are
/// received in the order they were emitted.
#[derive(Debug)]
pub struct Subscription {
    id: ListenerId,
    receiver: Receiver<ShortenEvent>,
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Next pending event, if any
    pub fn try_next(&self) -> Option<ShortenEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

/// Something a controller can register with for resize/content events
pub trait EventSource {
    fn subscribe(&mut self, interests: &[Interest]) -> Subscription;
    fn unsubscribe(&mut self, id: ListenerId);
}

struct Listener {
    interests: Vec<Interest>,
    sender: Sender<ShortenEvent>,
}

/// Fan-out of host events to registered listeners, in registration order.
#[derive(Default)]
pub struct EventHub {
    next_id: u64,
    listeners: IndexMap<ListenerId, Listener>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` to every listener interested in it.
    ///
    /// Listeners whose subscription has been dropped are pruned. Returns the
    /// number of listeners the event reached.
    pub fn emit(&mut self, event: ShortenEvent) -> usize {
        let interest = event.interest();
        let mut delivered = 0;
        let mut dead = Vec::new();

        for (id, listener) in &self.listeners {
            if !listener.interests.contains(&interest) {
                continue;
            }
            if listener.sender.send(event.clone()).is_ok() {
                delivered += 1;
            } else {
                dead.push(*id);
            }
        }

        for id in dead {
            self.listeners.shift_remove(&id);
        }

        trace!(?interest, delivered, "event emitted");
        delivered
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of listeners registered for `interest`
    pub fn listeners_for(&self, interest: Interest) -> usize {
        self.listeners
            .values()
            .filter(|l| l.interests.contains(&interest))
            .count()
    }
}

impl EventSource for EventHub {
    fn subscribe(&mut self, interests: &[Interest]) -> Subscription {
        let id = ListenerId(self.next_id);
        self.next_id += 1;

        let (sender, receiver) = mpsc::channel();
        self.listeners.insert(
            id,
            Listener {
                interests: interests.to_vec(),
                sender,
            },
        );
        Subscription { id, receiver }
    }

    fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.shift_remove(&id);
    }
}
