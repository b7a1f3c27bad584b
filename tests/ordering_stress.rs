//! Ordering Stress Test - deteksi bug memory-ordering
//!
//! Bug acquire/release pada queue lock-free biasanya flaky: muncul sekali
//! dari sekian run. Test di sini mengulang pasangan producer/consumer
//! berkali-kali pada buffer kecil untuk memancingnya.
//!
//! Usage:
//!   cargo test --release --test ordering_stress

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use talaria::baseline::BlockingQueue;
use talaria::core::{RingBuffer, WaitPolicy};
use talaria::harness::run_trial;

#[test]
fn test_ring_buffer_100_trials_in_order() {
    const TRIALS: usize = 100;
    const ITERATIONS: u64 = 10_000;

    for trial in 0..TRIALS {
        let rb = RingBuffer::new(16);
        let report = run_trial(&rb, ITERATIONS, false);

        assert_eq!(
            report.mismatches, 0,
            "trial {}: out-of-order values detected",
            trial
        );
    }
}

#[test]
fn test_yield_policy_trials_in_order() {
    const TRIALS: usize = 20;
    const ITERATIONS: u64 = 10_000;

    for trial in 0..TRIALS {
        let rb = RingBuffer::with_policy(16, WaitPolicy::Yield);
        let report = run_trial(&rb, ITERATIONS, false);

        assert_eq!(
            report.mismatches, 0,
            "trial {}: out-of-order values detected",
            trial
        );
    }
}

#[test]
fn test_blocking_queue_trials_in_order() {
    const TRIALS: usize = 10;
    const ITERATIONS: u64 = 10_000;

    for trial in 0..TRIALS {
        let q = BlockingQueue::new(16);
        let report = run_trial(&q, ITERATIONS, false);

        assert_eq!(
            report.mismatches, 0,
            "trial {}: out-of-order values detected",
            trial
        );
    }
}

#[test]
fn test_cursor_distance_never_exceeds_capacity() {
    const ITERATIONS: u64 = 200_000;

    let rb = RingBuffer::new(16);
    let capacity = rb.capacity();
    let done = AtomicBool::new(false);

    thread::scope(|s| {
        // Observer: sampling jarak cursor selama run berjalan.
        // len() membaca cursor producer lebih dulu, jadi nilainya tidak
        // boleh melebihi capacity kalau protokolnya benar.
        s.spawn(|| {
            while !done.load(Ordering::Relaxed) {
                let len = rb.len();
                assert!(
                    len <= capacity,
                    "cursor distance {} exceeds capacity {}",
                    len,
                    capacity
                );
            }
        });

        s.spawn(|| {
            for i in 0..ITERATIONS {
                rb.put(i);
            }
        });

        s.spawn(|| {
            for i in 0..ITERATIONS {
                assert_eq!(rb.get(), i);
            }
            done.store(true, Ordering::Relaxed);
        });
    });
}
