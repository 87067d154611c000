use lansim_core::{Router, Server};

/// Passes a payload along a chain of servers.
///
/// Each hop drains its inbox and forwards what it got to the next server
/// in line. A forwarded packet only moves on the following dispatch pass,
/// so the payload takes one pass per hop to reach the end of the chain.
pub fn relay(hops: usize) {
    assert!(hops >= 2, "a relay needs somewhere to forward to");
    let router = Router::new();
    let servers: Vec<_> = (0..hops).map(|_| Server::new()).collect();
    for server in &servers {
        router.link(server);
    }

    let message = "Pass it on!";
    servers[0].send(message, servers[1].address(), &router);

    for hop in 1..hops - 1 {
        router.dispatch();
        let received = servers[hop].receive();
        assert_eq!(received.len(), 1);
        servers[hop].send(received[0].payload(), servers[hop + 1].address(), &router);
    }

    router.dispatch();
    let received = servers[hops - 1].receive();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].payload(), message);
}
