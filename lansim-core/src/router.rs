use crate::{
    logging::{delivery_event, drop_event},
    monitor::{RouterEvent, RouterMonitor},
    Address, Packet, Server,
};
use dashmap::DashMap;
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, Weak},
};

/// Moves packets between [`Server`]s.
///
/// A router keeps a routing table of the servers currently linked to it
/// and a FIFO queue of outbound packets awaiting delivery. Queued traffic
/// sits until an explicit [`dispatch`](Router::dispatch) pass, which
/// delivers each packet to the inbox of the server linked at its
/// destination or discards it if that address is unreachable.
///
/// Table entries are weak references: linking a server never extends its
/// lifetime, and the router's only write access to a server is appending
/// to its inbox on delivery. Keeping a linked server alive is its owner's
/// job.
#[derive(Debug)]
pub struct Router {
    table: DashMap<Address, Weak<Server>>,
    outbound: Mutex<VecDeque<Packet>>,
    monitor: RouterMonitor,
}

impl Router {
    /// Creates a router with an empty routing table and outbound queue.
    pub fn new() -> Self {
        Self {
            table: DashMap::new(),
            outbound: Mutex::new(VecDeque::new()),
            monitor: RouterMonitor::new(),
        }
    }

    /// The monitor broadcasting this router's per-packet dispatch
    /// outcomes. Subscribe before dispatching to observe them.
    pub fn monitor(&self) -> &RouterMonitor {
        &self.monitor
    }

    /// Links `server` into the routing table, making its address
    /// reachable.
    ///
    /// Linking another server at the same address replaces the prior
    /// association silently.
    pub fn link(&self, server: &Arc<Server>) {
        self.table.insert(server.address(), Arc::downgrade(server));
    }

    /// Removes the table entry for `server`'s address. A no-op if the
    /// address is not linked.
    pub fn unlink(&self, server: &Server) {
        self.table.remove(&server.address());
    }

    /// Appends a packet to the tail of the outbound queue.
    ///
    /// [`Server::send`] calls this; other producers may queue packets
    /// directly as well.
    pub fn enqueue(&self, packet: Packet) {
        self.outbound.lock().unwrap().push_back(packet);
    }

    /// Delivers every packet queued before this call.
    ///
    /// Packets are processed in FIFO order: each is appended to the inbox
    /// of the server linked at its destination, or discarded without error
    /// if that address is unlinked. Discards surface only through the
    /// [`monitor`](Router::monitor) and the log. The outbound queue is
    /// empty when this returns no matter how many packets were
    /// deliverable; packets enqueued by other producers while the pass
    /// runs wait for the next one.
    ///
    /// Returns the number of packets delivered.
    pub fn dispatch(&self) -> usize {
        let pending = std::mem::take(&mut *self.outbound.lock().unwrap());
        let mut delivered = 0;
        for packet in pending {
            let destination = packet.destination();
            match self.lookup(destination) {
                Some(server) => {
                    delivery_event(destination, packet.payload());
                    server.deliver(packet);
                    self.monitor.publish(RouterEvent::Delivered { destination });
                    delivered += 1;
                }
                None => {
                    drop_event(destination, packet.payload());
                    self.monitor
                        .publish(RouterEvent::DestinationUnknown { destination });
                }
            }
        }
        delivered
    }

    /// Upgrades the table entry at `address`. A linked server that has
    /// since been dropped counts as unreachable; its stale entry is pruned.
    fn lookup(&self, address: Address) -> Option<Arc<Server>> {
        let server = self.table.get(&address).and_then(|entry| entry.upgrade());
        if server.is_none() {
            self.table
                .remove_if(&address, |_, entry| entry.strong_count() == 0);
        }
        server
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AddressAllocator;

    #[test]
    fn delivers_to_linked_server() {
        let router = Router::new();
        let server = Server::new();
        router.link(&server);

        router.enqueue(Packet::new("hello", server.address()));
        assert_eq!(router.dispatch(), 1);

        let received = server.receive();
        assert_eq!(received, vec![Packet::new("hello", server.address())]);
    }

    #[test]
    fn drops_for_unknown_destination() {
        let router = Router::new();
        let server = Server::new();
        router.link(&server);

        let dark = Address::new(u64::MAX).unwrap();
        router.enqueue(Packet::new("anyone?", dark));
        assert_eq!(router.dispatch(), 0);
        assert!(server.receive().is_empty());

        // The queue is empty afterward; a second pass has nothing to do.
        assert_eq!(router.dispatch(), 0);
    }

    #[test]
    fn preserves_fifo_order_per_destination() {
        let router = Router::new();
        let server = Server::new();
        router.link(&server);

        for payload in ["P1", "P2", "P3"] {
            router.enqueue(Packet::new(payload, server.address()));
        }
        assert_eq!(router.dispatch(), 3);

        let payloads: Vec<_> = server
            .receive()
            .iter()
            .map(|packet| packet.payload().to_string())
            .collect();
        assert_eq!(payloads, ["P1", "P2", "P3"]);
    }

    #[test]
    fn relink_replaces_prior_association() {
        let router = Router::new();

        // Separate allocators both start at 1, fabricating an address
        // collision that a single allocator can never produce.
        let old = Server::with_allocator(&AddressAllocator::new());
        let replacement = Server::with_allocator(&AddressAllocator::new());
        assert_eq!(old.address(), replacement.address());

        router.link(&old);
        router.unlink(&old);
        router.link(&replacement);

        router.enqueue(Packet::new("for the new one", old.address()));
        assert_eq!(router.dispatch(), 1);
        assert!(old.receive().is_empty());
        assert_eq!(replacement.receive().len(), 1);
    }

    #[test]
    fn unlink_absent_is_a_no_op() {
        let router = Router::new();
        let server = Server::new();
        router.unlink(&server);
        router.link(&server);
        router.unlink(&server);
        router.unlink(&server);

        router.enqueue(Packet::new("gone", server.address()));
        assert_eq!(router.dispatch(), 0);
    }

    #[test]
    fn dropped_server_counts_as_unreachable() {
        let router = Router::new();
        let server = Server::new();
        let address = server.address();
        router.link(&server);
        drop(server);

        router.enqueue(Packet::new("too late", address));
        assert_eq!(router.dispatch(), 0);
    }
}
