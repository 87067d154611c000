use criterion::{criterion_group, criterion_main, Criterion};
use lansim_core::{Router, Server};

fn round_trip(servers: usize) {
    let router = Router::new();
    let fleet: Vec<_> = (0..servers).map(|_| Server::new()).collect();
    for server in &fleet {
        router.link(server);
    }
    for pair in fleet.chunks_exact(2) {
        pair[0].send("ping", pair[1].address(), &router);
    }
    router.dispatch();
    for server in &fleet {
        server.receive();
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("send/dispatch/receive x100", |b| b.iter(|| round_trip(100)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
