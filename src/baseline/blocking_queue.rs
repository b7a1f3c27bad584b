//! Blocking Bounded Queue (baseline berbasis lock)
//!
//! FIFO bounded klasik: satu Mutex mengawal VecDeque, dua Condvar untuk
//! menunggu slot kosong / data masuk. Kontraknya sama dengan ring buffer
//! (put menunggu saat penuh, get menunggu saat kosong), tapi setiap
//! operasi melewati lock dan bisa memarkir thread di OS.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};

/// Bounded FIFO dengan blocking put/get.
///
/// Berbeda dengan ring buffer, kapasitas dipakai apa adanya (tidak
/// dibulatkan ke power of two) karena tidak ada bitmask di sini.
pub struct BlockingQueue {
    inner: Mutex<VecDeque<u64>>,
    not_full: Condvar,
    not_empty: Condvar,
    capacity: usize,
}

impl BlockingQueue {
    /// Membuat queue baru dengan kapasitas tetap.
    ///
    /// # Panics
    /// Panic jika `capacity == 0`
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be at least 1");

        Self {
            inner: Mutex::new(VecDeque::with_capacity(capacity)),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
            capacity,
        }
    }

    /// Menulis satu nilai, menunggu (park) selama queue penuh.
    pub fn put(&self, value: u64) {
        let queue = self.inner.lock().unwrap();
        let mut queue = self
            .not_full
            .wait_while(queue, |q| q.len() >= self.capacity)
            .unwrap();

        queue.push_back(value);
        self.not_empty.notify_one();
    }

    /// Mengambil nilai tertua, menunggu (park) selama queue kosong.
    pub fn get(&self) -> u64 {
        let queue = self.inner.lock().unwrap();
        let mut queue = self.not_empty.wait_while(queue, |q| q.is_empty()).unwrap();

        // wait_while menjamin queue tidak kosong di sini
        let value = queue.pop_front().unwrap();
        self.not_full.notify_one();
        value
    }

    /// Jumlah elemen saat ini (snapshot)
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    /// Cek apakah queue kosong
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Kapasitas queue
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
