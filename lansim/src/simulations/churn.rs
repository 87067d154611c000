use lansim_core::{AddressAllocator, Router, Server};

/// Links, unlinks, and replaces servers while traffic flows.
///
/// Traffic addressed to an unlinked server is dropped. Relinking a
/// different server at the same address (possible here because separate
/// allocators hand out colliding addresses) steers later traffic to the
/// replacement.
pub fn churn() {
    let router = Router::new();

    // Both allocators start at 1, so these two servers collide.
    let first = Server::with_allocator(&AddressAllocator::new());
    let second = Server::with_allocator(&AddressAllocator::new());
    assert_eq!(first.address(), second.address());
    let address = first.address();

    router.link(&first);
    second.send("to the first", address, &router);
    assert_eq!(router.dispatch(), 1);
    assert_eq!(first.receive().len(), 1);

    router.unlink(&first);
    second.send("into the void", address, &router);
    assert_eq!(router.dispatch(), 0);
    assert!(first.receive().is_empty());

    router.link(&second);
    second.send("to the replacement", address, &router);
    assert_eq!(router.dispatch(), 1);
    let received = second.receive();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].payload(), "to the replacement");
    assert!(first.receive().is_empty());
}
