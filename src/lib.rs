//! Talaria - SPSC Ring Buffer Benchmark
//!
//! Membandingkan dua strategi mengalirkan bounded stream integer dari
//! satu thread producer ke satu thread consumer:
//! - Blocking queue berbasis lock (baseline)
//! - Lock-free ring buffer dengan cursor caching dan cache-line padding
//!
//! Inti desain ring buffer:
//! - Lock-Free: Atomic-only cursor dengan acquire/release ordering
//! - No-Allocation: Slot pre-allocated saat inisialisasi
//! - Batching: Cursor lawan di-cache lokal, dibaca ulang hanya saat
//!   slack habis (buffer penuh/kosong)

pub mod baseline;
pub mod core;
pub mod harness;
