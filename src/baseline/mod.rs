//! Baseline module: Blocking Queue berbasis lock
//!
//! Pembanding untuk ring buffer - implementasi klasik dengan Mutex dan
//! Condvar, dipakai harness untuk mengukur selisih performa.

mod blocking_queue;

pub use blocking_queue::BlockingQueue;
