//! Harness: driver producer/consumer + pengukuran wall-clock
//!
//! Menjalankan satu thread producer dan satu thread consumer terhadap
//! sebuah queue, memverifikasi urutan nilai yang diterima, dan mengukur
//! durasi total. Kedua implementasi dijalankan lewat trait [`Queue`]
//! supaya driver-nya satu.

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crate::baseline::BlockingQueue;
use crate::core::RingBuffer;

/// Antarmuka bersama kedua implementasi queue untuk driver benchmark.
pub trait Queue: Sync {
    /// Menulis satu nilai, menunggu bila penuh.
    fn put(&self, value: u64);
    /// Mengambil nilai tertua, menunggu bila kosong.
    fn get(&self) -> u64;
}

impl Queue for RingBuffer {
    #[inline(always)]
    fn put(&self, value: u64) {
        RingBuffer::put(self, value);
    }

    #[inline(always)]
    fn get(&self) -> u64 {
        RingBuffer::get(self)
    }
}

impl Queue for BlockingQueue {
    fn put(&self, value: u64) {
        BlockingQueue::put(self, value);
    }

    fn get(&self) -> u64 {
        BlockingQueue::get(self)
    }
}

/// Hasil satu trial benchmark.
pub struct TrialReport {
    /// Durasi wall-clock dari start kedua thread sampai keduanya selesai
    pub elapsed: Duration,
    /// Jumlah nilai yang dialirkan
    pub iterations: u64,
    /// Jumlah nilai yang keluar dari urutan (harus 0)
    pub mismatches: u64,
}

impl TrialReport {
    /// Throughput dalam juta operasi per detik
    pub fn throughput_m_per_sec(&self) -> f64 {
        self.iterations as f64 / self.elapsed.as_secs_f64() / 1_000_000.0
    }
}

/// Menjalankan pasangan producer/consumer terhadap `queue`.
///
/// Producer menulis `0..iterations`; consumer membaca sebanyak itu dan
/// memverifikasi setiap nilai sama dengan counter berjalan. Nilai yang
/// keluar dari urutan dilaporkan ke stderr dan dihitung - ini self-check
/// algoritma yang diuji, bukan kondisi fatal.
pub fn run_trial<Q: Queue>(queue: &Q, iterations: u64, pin_cores: bool) -> TrialReport {
    let mismatches = AtomicU64::new(0);
    let start = Instant::now();

    thread::scope(|s| {
        // Consumer di-start lebih dulu, lalu producer
        s.spawn(|| {
            if pin_cores {
                pin_to_core(1);
            }
            for i in 0..iterations {
                let value = queue.get();
                if value != i {
                    eprintln!(
                        "⚠️  Numbers not in order: expected {}, got {} - algorithm is broken",
                        i, value
                    );
                    mismatches.fetch_add(1, Ordering::Relaxed);
                }
            }
        });

        s.spawn(|| {
            if pin_cores {
                pin_to_core(0);
            }
            for i in 0..iterations {
                queue.put(i);
            }
        });
    });

    TrialReport {
        elapsed: start.elapsed(),
        iterations,
        mismatches: mismatches.load(Ordering::Relaxed),
    }
}

/// Pin thread pemanggil ke satu CPU core supaya hasil pengukuran stabil.
///
/// Ignore errors - not all platforms support this
#[cfg(target_os = "linux")]
pub fn pin_to_core(core: usize) {
    unsafe {
        let mut set: libc::cpu_set_t = std::mem::zeroed();
        libc::CPU_ZERO(&mut set);
        libc::CPU_SET(core, &mut set);
        libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set);
    }
}

#[cfg(not(target_os = "linux"))]
pub fn pin_to_core(_core: usize) {}
