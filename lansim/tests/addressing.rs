use lansim_core::{Address, AddressAllocator, Server};

#[test]
fn sequential_construction_yields_one_through_n() {
    let allocator = AddressAllocator::new();
    let addresses: Vec<u64> = (0..10)
        .map(|_| Server::with_allocator(&allocator).address().into_inner())
        .collect();
    assert_eq!(addresses, (1..=10).collect::<Vec<u64>>());
}

#[test]
fn global_addresses_are_pairwise_distinct() {
    // The process-wide allocator is shared with every other test, so the
    // concrete values are unpredictable; distinctness is not.
    let servers: Vec<_> = (0..50).map(|_| Server::new()).collect();
    for (n, server) in servers.iter().enumerate() {
        for other in &servers[n + 1..] {
            assert_ne!(server.address(), other.address());
        }
    }
}

#[test]
fn addresses_survive_the_server() {
    let allocator = AddressAllocator::new();
    let server = Server::with_allocator(&allocator);
    let taken = server.address();
    drop(server);

    // Dropping a server does not return its address to the allocator.
    assert_ne!(Server::with_allocator(&allocator).address(), taken);
}

#[test]
fn fabricated_addresses_are_validated() {
    assert!(Address::new(0).is_err());
    assert!(Address::new(1).is_ok());
}
