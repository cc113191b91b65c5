use std::sync::Arc;
use std::thread;

use criterion::{Criterion, criterion_group};

use iproto::net::connect::request_id_allocator::RequestIdAllocator;
use iproto::net::request::ping::Ping;
use iproto::net::request::request::{Request, RequestIdentity};

const SIZE: usize = 1024;

fn allocate(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("request id allocator");

    group.bench_function("next on a single thread", |bencher| {
        let allocator = RequestIdAllocator::new();
        bencher.iter(|| allocator.next());
    });
    group.bench_function("next on four threads", |bencher| {
        let allocator = Arc::new(RequestIdAllocator::new());
        bencher.iter(|| {
            let handles: Vec<_> = (0..4).map(|_| {
                let allocator = allocator.clone();
                thread::spawn(move || {
                    for _ in 0..SIZE {
                        allocator.next();
                    }
                })
            }).collect();
            for handle in handles {
                let _ = handle.join();
            }
        });
    });
    group.bench_function("assign and serialize ping", |bencher| {
        let allocator = RequestIdAllocator::new();
        bencher.iter(|| {
            let mut ping = Ping::new();
            ping.assign_next_request_id(&allocator);
            return ping.serialize();
        });
    });
    group.finish();
}

criterion_group!(benches, allocate);
