use std::sync::Arc;
use std::time::Duration;

use criterion::{BatchSize, Criterion, criterion_group};

use iproto::clock::clock::SystemClock;
use iproto::net::connect::request_id::RequestId;
use iproto::net::connect::response::Response;
use iproto::net::request_waiting_list::request_waiting_list::RequestWaitingList;
use iproto::net::request_waiting_list::request_waiting_list_config::RequestWaitingListConfig;
use iproto::net::request_waiting_list::response_callback::{ResponseCallback, ResponseErrorType};

const SIZE: usize = 1024 * 64;

struct SuccessResponseCallback {}

impl ResponseCallback for SuccessResponseCallback {
    fn on_response(&self, _: Result<Response, ResponseErrorType>) {}
}

fn add(criterion: &mut Criterion) {
    let success_response_callback = Arc::new(SuccessResponseCallback {});

    let mut group = criterion.benchmark_group("request waiting list add");

    group.bench_function("add with capacity", |bencher| {
        bencher.iter_batched(
            || {
                // each batch drops its list; a short pause lets the remover thread exit
                let waiting_list = RequestWaitingList::new_with_capacity(
                    SIZE,
                    Arc::new(SystemClock::new()),
                    RequestWaitingListConfig::new(Duration::from_secs(60), Duration::from_millis(10)),
                );
                let request_ids = (0..SIZE).map(|index| index as RequestId).collect::<Vec<_>>();
                (waiting_list, request_ids)
            },
            |(waiting_list, request_ids)| {
                for request_id in request_ids {
                    let _ = waiting_list.add(request_id, success_response_callback.clone());
                }
            },
            BatchSize::LargeInput
        );
    });
    group.finish();
}

criterion_group!(benches, add);
