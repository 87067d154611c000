use lansim_core::{Address, Router, Server};
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Runs a randomized load of many servers through one router.
///
/// Most traffic goes to linked servers; the rest is addressed far past
/// anything the allocator has issued and must be dropped. The delivered
/// count has to account for every packet, and every server's inbox must
/// drain in the order its traffic was sent.
pub fn traffic(servers: usize, packets: usize, seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let router = Router::new();
    let fleet: Vec<_> = (0..servers).map(|_| Server::new()).collect();
    for server in &fleet {
        router.link(server);
    }

    let mut expected: Vec<Vec<String>> = vec![Vec::new(); servers];
    let mut dropped = 0;
    for n in 0..packets {
        let source = &fleet[rng.gen_range(0..servers)];
        let payload = format!("packet {n}");
        if rng.gen_bool(0.8) {
            let target = rng.gen_range(0..servers);
            expected[target].push(payload.clone());
            source.send(payload, fleet[target].address(), &router);
        } else {
            let dark = Address::new(u64::MAX - n as u64).unwrap();
            source.send(payload, dark, &router);
            dropped += 1;
        }
    }

    assert_eq!(router.dispatch(), packets - dropped);
    for (server, expected) in fleet.iter().zip(expected) {
        let received: Vec<_> = server
            .receive()
            .iter()
            .map(|packet| packet.payload().to_string())
            .collect();
        assert_eq!(received, expected);
    }
}
