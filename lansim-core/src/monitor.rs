//! Observability for dispatch outcomes.

use crate::Address;
use tokio::sync::broadcast;

/// How many events a slow subscriber may fall behind before missing some.
const EVENT_BUFFER: usize = 16;

/// Broadcasts per-packet dispatch outcomes from a
/// [`Router`](crate::Router).
///
/// Events are best-effort: a dispatch pass never waits on, and never fails
/// because of, its observers. With no subscribers, events go nowhere. A
/// subscriber that falls too far behind sees a lag error from its receiver
/// rather than stalling the router.
#[derive(Debug, Clone)]
pub struct RouterMonitor {
    events: broadcast::Sender<RouterEvent>,
}

impl RouterMonitor {
    /// Creates a monitor with no subscribers.
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_BUFFER);
        Self { events }
    }

    /// Returns a receiver for events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<RouterEvent> {
        self.events.subscribe()
    }

    /// Publishes `event` to current subscribers, if any.
    pub(crate) fn publish(&self, event: RouterEvent) {
        if self.events.receiver_count() > 0 {
            let _ = self.events.send(event);
        }
    }
}

impl Default for RouterMonitor {
    fn default() -> Self {
        Self::new()
    }
}

/// The outcome of dispatching a single packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterEvent {
    /// The packet was appended to the inbox of the server linked at
    /// `destination`.
    Delivered {
        /// The address the packet was delivered to.
        destination: Address,
    },
    /// Nothing was linked at `destination`; the packet was discarded.
    DestinationUnknown {
        /// The address the packet was bound for.
        destination: Address,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Router, Server};

    #[tokio::test]
    async fn subscribers_see_both_outcomes() {
        let router = Router::new();
        let server = Server::new();
        router.link(&server);
        let mut events = router.monitor().subscribe();

        let dark = Address::new(u64::MAX).unwrap();
        server.send("lands", server.address(), &router);
        server.send("vanishes", dark, &router);
        router.dispatch();

        assert_eq!(
            events.recv().await.unwrap(),
            RouterEvent::Delivered {
                destination: server.address()
            }
        );
        assert_eq!(
            events.recv().await.unwrap(),
            RouterEvent::DestinationUnknown { destination: dark }
        );
    }

    #[tokio::test]
    async fn every_subscriber_receives() {
        let monitor = RouterMonitor::new();
        let mut receivers = [monitor.subscribe(), monitor.subscribe()];
        let event = RouterEvent::Delivered {
            destination: Address::new(1).unwrap(),
        };
        monitor.publish(event);

        for receiver in receivers.iter_mut() {
            assert_eq!(receiver.recv().await.unwrap(), event);
        }
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let monitor = RouterMonitor::new();
        monitor.publish(RouterEvent::DestinationUnknown {
            destination: Address::new(9).unwrap(),
        });
    }
}
