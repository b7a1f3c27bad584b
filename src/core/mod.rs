//! Core module: Lock-Free SPSC Ring Buffer
//!
//! Prinsip desain:
//! - Lock-Free: Hanya atomic operations, tidak ada Mutex/RwLock
//! - No-Allocation: Semua slot pre-allocated saat init
//! - Batching: Cursor lawan di-cache lokal, dibaca ulang hanya saat perlu

mod ring_buffer;

pub use ring_buffer::{capacity_for, RingBuffer, WaitPolicy};
