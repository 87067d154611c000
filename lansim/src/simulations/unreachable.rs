use lansim_core::{Address, Router, RouterEvent, Server};

/// Sends traffic to an address nothing is linked at.
///
/// The router discards the packet during dispatch and reports the drop on
/// its monitor. The sender is not told anything went wrong, and no linked
/// server's inbox changes.
pub async fn unreachable() {
    let router = Router::new();
    let server = Server::new();
    router.link(&server);
    let mut events = router.monitor().subscribe();

    let dark = Address::new(999_999).unwrap();
    server.send("Anyone there?", dark, &router);
    assert_eq!(router.dispatch(), 0);

    assert_eq!(
        events.recv().await.unwrap(),
        RouterEvent::DestinationUnknown { destination: dark }
    );
    assert!(server.receive().is_empty());
}
