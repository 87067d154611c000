use lansim_core::{Router, Server};

/// Runs a basic simulation.
///
/// In this simulation, a server sends a greeting to another server through
/// a single router. The packet sits in the router's outbound queue until
/// the dispatch pass, then lands in the receiver's inbox.
pub fn basic() {
    let router = Router::new();
    let sender = Server::new();
    let receiver = Server::new();
    router.link(&sender);
    router.link(&receiver);

    sender.send("Hello!", receiver.address(), &router);
    assert_eq!(router.dispatch(), 1);

    let received = receiver.receive();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].payload(), "Hello!");
    assert_eq!(received[0].destination(), receiver.address());
}
