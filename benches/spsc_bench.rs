//! Criterion benchmark: ring buffer vs blocking queue
//!
//! Run dengan: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use talaria::baseline::BlockingQueue;
use talaria::core::RingBuffer;

fn bench_put_get_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_get_cycle");
    group.throughput(Throughput::Elements(1));

    group.bench_function("ring_buffer", |b| {
        let rb = RingBuffer::new(65536);
        let mut i = 0u64;
        b.iter(|| {
            rb.put(black_box(i));
            black_box(rb.get());
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("blocking_queue", |b| {
        let q = BlockingQueue::new(65536);
        let mut i = 0u64;
        b.iter(|| {
            q.put(black_box(i));
            black_box(q.get());
            i = i.wrapping_add(1);
        });
    });

    group.finish();
}

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");

    // Batch operations
    for batch_size in [100u64, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*batch_size));

        group.bench_function(format!("ring_buffer_batch_{}", batch_size), |b| {
            let rb = RingBuffer::new(65536);
            b.iter(|| {
                for i in 0..*batch_size {
                    rb.put(black_box(i));
                }
                for _ in 0..*batch_size {
                    black_box(rb.get());
                }
            });
        });

        group.bench_function(format!("blocking_queue_batch_{}", batch_size), |b| {
            let q = BlockingQueue::new(65536);
            b.iter(|| {
                for i in 0..*batch_size {
                    q.put(black_box(i));
                }
                for _ in 0..*batch_size {
                    black_box(q.get());
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_put_get_cycle, bench_throughput);
criterion_main!(benches);
