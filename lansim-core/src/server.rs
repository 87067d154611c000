use crate::{allocator, logging::server_creation_event, Address, AddressAllocator, Packet, Router};
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

/// An endpoint on the simulated network.
///
/// A server holds a unique address for its whole lifetime and an inbox of
/// packets delivered to it. Servers never talk to each other directly:
/// outbound traffic is queued on a [`Router`] and lands in the
/// destination's inbox on a later [`dispatch`](Router::dispatch) pass.
///
/// The inbox belongs to the server. The router appends to it on delivery
/// and nothing else touches it until the server drains it with
/// [`receive`](Server::receive).
#[derive(Debug)]
pub struct Server {
    address: Address,
    inbox: Mutex<VecDeque<Packet>>,
}

impl Server {
    /// Creates a server with a fresh address from the process-wide
    /// allocator and an empty inbox.
    pub fn new() -> Arc<Self> {
        Self::with_allocator(allocator::global())
    }

    /// Creates a server addressed by `allocator` instead of the
    /// process-wide one.
    pub fn with_allocator(allocator: &AddressAllocator) -> Arc<Self> {
        let address = allocator.next_address();
        server_creation_event(address);
        Arc::new(Self {
            address,
            inbox: Mutex::new(VecDeque::new()),
        })
    }

    /// The address this server answers to.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Queues `payload` on `router` for delivery to `destination`.
    ///
    /// The packet only moves on the router's next
    /// [`dispatch`](Router::dispatch) pass, and is silently discarded then
    /// if nothing is linked at `destination`.
    ///
    /// # Return value
    ///
    /// Returns a snapshot of this server's *own inbox* at call time. It is
    /// not the packet just sent and not a delivery acknowledgment; an empty
    /// vec says nothing about whether the send will ever be delivered. The
    /// reference behavior this simulation reproduces couples sending with a
    /// peek at pending mail, and the contract is kept for parity. Callers
    /// interested in the inbox should use [`receive`](Server::receive)
    /// instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lansim_core::{Router, Server};
    /// let router = Router::new();
    /// let server = Server::new();
    /// router.link(&server);
    ///
    /// // The return value is the sender's inbox, still empty here.
    /// let snapshot = server.send("hi", server.address(), &router);
    /// assert!(snapshot.is_empty());
    ///
    /// router.dispatch();
    /// assert_eq!(server.receive().len(), 1);
    /// ```
    pub fn send(&self, payload: impl Into<String>, destination: Address, router: &Router) -> Vec<Packet> {
        router.enqueue(Packet::new(payload, destination));
        self.inbox.lock().unwrap().iter().cloned().collect()
    }

    /// Takes every packet currently in the inbox, oldest first.
    ///
    /// This is a destructive read: the inbox is left empty, and calling
    /// again before another delivery returns an empty vec.
    pub fn receive(&self) -> Vec<Packet> {
        self.inbox.lock().unwrap().drain(..).collect()
    }

    /// Appends a packet to the inbox. Called by the router on delivery.
    pub(crate) fn deliver(&self, packet: Packet) {
        self.inbox.lock().unwrap().push_back(packet);
    }
}
