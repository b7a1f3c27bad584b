//! Lock-Free Single-Producer Single-Consumer (SPSC) Ring Buffer
//!
//! Implementasi menggunakan cursor monoton (tanpa wraparound) dengan
//! memory ordering yang tepat. Tidak ada Mutex, tidak ada alokasi
//! setelah inisialisasi.

use std::cell::{Cell, UnsafeCell};
use std::hint;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

/// Padding untuk cache line isolation (64 bytes pada x86-64)
#[repr(C, align(64))]
struct CacheLinePadded<T> {
    value: T,
}

impl<T> CacheLinePadded<T> {
    const fn new(value: T) -> Self {
        Self { value }
    }
}

/// State milik thread producer: cursor publikasi + snapshot cursor consumer.
/// Kedua field hanya ditulis oleh thread producer.
struct ProducerSide {
    position: AtomicU64,
    cached_consumer: Cell<u64>,
}

/// State milik thread consumer: cursor publikasi + snapshot cursor producer.
struct ConsumerSide {
    position: AtomicU64,
    cached_producer: Cell<u64>,
}

/// Kebijakan menunggu saat buffer penuh (producer) atau kosong (consumer).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum WaitPolicy {
    /// Busy-spin murni - latency terendah, satu core terpakai penuh
    /// selama menunggu.
    #[default]
    Spin,
    /// Yield ke OS scheduler setiap iterasi - lebih ramah CPU.
    Yield,
}

/// Kapasitas terkecil berupa power of two >= `requested`.
///
/// Dihitung dengan bit manipulation eksak, bukan logaritma floating-point,
/// jadi power of two eksak tidak ikut dibulatkan ke atas.
///
/// # Panics
/// Panic jika `requested == 0`
pub fn capacity_for(requested: usize) -> usize {
    assert!(requested > 0, "requested capacity must be at least 1");
    requested.next_power_of_two()
}

/// Lock-Free SPSC Ring Buffer
///
/// Kontrak SPSC: tepat SATU thread memanggil [`put`](Self::put) dan tepat
/// SATU thread lain memanggil [`get`](Self::get). Cursor tidak pernah
/// wraparound; slot fisik diturunkan via bitmask.
///
/// Kedua cursor menempati cache line terpisah untuk menghindari false
/// sharing, dan masing-masing sisi menyimpan snapshot cursor lawannya
/// di cache line miliknya sendiri - fast path tidak menyentuh cache line
/// yang ditulis thread lain (batching).
///
/// Saat penuh/kosong, put/get busy-spin tanpa batas waktu: partner yang
/// macet berarti spin selamanya. Trade-off yang disengaja untuk primitive
/// benchmark latency-minimum, bukan queue general-purpose.
#[repr(C)]
pub struct RingBuffer {
    // Producer side - cache line aligned
    producer: CacheLinePadded<ProducerSide>,
    // Consumer side - cache line aligned
    consumer: CacheLinePadded<ConsumerSide>,
    // Pre-allocated storage di heap - tidak ada alokasi setelah init
    slots: Box<[UnsafeCell<u64>]>,
    // Mask untuk operasi modulo yang cepat (capacity selalu power of 2)
    mask: u64,
    capacity: u64,
    wait: WaitPolicy,
}

// SAFETY: RingBuffer aman untuk Send/Sync karena:
// - Hanya satu thread yang memanggil put (menulis producer side)
// - Hanya satu thread lain yang memanggil get (menulis consumer side)
// - Release/acquire pada cursor menjamin visibility tulisan slot
unsafe impl Send for RingBuffer {}
unsafe impl Sync for RingBuffer {}

impl RingBuffer {
    /// Membuat ring buffer baru dengan kebijakan spin default.
    ///
    /// `requested` dibulatkan ke atas ke power of two terdekat.
    /// Alokasi hanya terjadi sekali saat inisialisasi.
    ///
    /// # Panics
    /// Panic jika `requested == 0`
    pub fn new(requested: usize) -> Self {
        Self::with_policy(requested, WaitPolicy::Spin)
    }

    /// Membuat ring buffer dengan [`WaitPolicy`] eksplisit.
    pub fn with_policy(requested: usize, wait: WaitPolicy) -> Self {
        let capacity = capacity_for(requested);

        let mut slots = Vec::with_capacity(capacity);
        for _ in 0..capacity {
            slots.push(UnsafeCell::new(0));
        }

        Self {
            producer: CacheLinePadded::new(ProducerSide {
                position: AtomicU64::new(0),
                cached_consumer: Cell::new(0),
            }),
            consumer: CacheLinePadded::new(ConsumerSide {
                position: AtomicU64::new(0),
                cached_producer: Cell::new(0),
            }),
            slots: slots.into_boxed_slice(),
            mask: capacity as u64 - 1,
            capacity: capacity as u64,
            wait,
        }
    }

    /// Menulis satu nilai ke buffer (producer side).
    ///
    /// Spin sampai ada slot kosong. Tidak pernah gagal.
    #[inline(always)]
    pub fn put(&self, value: u64) {
        let side = &self.producer.value;
        let p = side.position.load(Ordering::Relaxed);

        // Baca cursor consumer hanya jika slack lokal habis (batching).
        // Acquire: pembacaan slot oleh consumer harus sudah selesai
        // sebelum slot boleh ditulis ulang.
        while p.wrapping_sub(side.cached_consumer.get()) >= self.capacity {
            side.cached_consumer
                .set(self.consumer.value.position.load(Ordering::Acquire));
            self.pause();
        }

        let slot = &self.slots[(p & self.mask) as usize];

        // SAFETY: p - c < capacity, jadi slot ini sudah dikonsumsi dan
        // tidak sedang dibaca oleh consumer.
        unsafe {
            *slot.get() = value;
        }

        // Release: tulisan slot di atas harus visible sebelum cursor
        // di-publish ke consumer.
        side.position.store(p.wrapping_add(1), Ordering::Release);
    }

    /// Mengambil nilai berikutnya dari buffer (consumer side), FIFO ketat.
    ///
    /// Spin sampai ada nilai tersedia. Tidak pernah gagal.
    #[inline(always)]
    pub fn get(&self) -> u64 {
        let side = &self.consumer.value;
        let c = side.position.load(Ordering::Relaxed);

        // Baca cursor producer hanya jika slack lokal habis (batching).
        // Acquire: setelah melihat cursor baru, tulisan slot-nya juga
        // pasti terlihat.
        while c == side.cached_producer.get() {
            side.cached_producer
                .set(self.producer.value.position.load(Ordering::Acquire));
            self.pause();
        }

        // SAFETY: c < producer cursor, jadi slot ini sudah ditulis dan
        // tidak akan ditulis ulang sebelum cursor kita di-publish.
        let entry = unsafe { *self.slots[(c & self.mask) as usize].get() };

        // Release: pembacaan slot harus selesai sebelum producer boleh
        // menulis ulang slot ini.
        side.position.store(c.wrapping_add(1), Ordering::Release);

        entry
    }

    #[inline(always)]
    fn pause(&self) {
        match self.wait {
            WaitPolicy::Spin => hint::spin_loop(),
            WaitPolicy::Yield => thread::yield_now(),
        }
    }

    /// Jumlah elemen dalam buffer (snapshot, bisa langsung stale).
    ///
    /// Cursor producer dibaca lebih dulu, jadi hasilnya tidak pernah
    /// melebihi [`capacity`](Self::capacity).
    #[inline(always)]
    pub fn len(&self) -> usize {
        let p = self.producer.value.position.load(Ordering::Acquire);
        let c = self.consumer.value.position.load(Ordering::Acquire);
        p.saturating_sub(c) as usize
    }

    /// Cek apakah buffer kosong
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cek apakah buffer penuh
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len() as u64 >= self.capacity
    }

    /// Kapasitas buffer (power of two hasil pembulatan requested size)
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity as usize
    }

    /// Kebijakan menunggu yang dipakai buffer ini
    #[inline(always)]
    pub fn wait_policy(&self) -> WaitPolicy {
        self.wait
    }
}
