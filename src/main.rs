//! Talaria - SPSC Ring Buffer Benchmark
//!
//! Menjalankan blocking queue (baseline berbasis lock) lalu lock-free
//! ring buffer pada beban yang sama, dan mencetak durasi masing-masing.
//!
//! Usage:
//!   cargo run --release -- [OPTIONS]

use std::io::{self, BufRead, Write};

use talaria::baseline::BlockingQueue;
use talaria::core::RingBuffer;
use talaria::harness::{run_trial, TrialReport};

/// Ukuran buffer default (dibulatkan ke power of two oleh ring buffer)
const BUFFER_SIZE: usize = 1024;
/// Jumlah nilai yang dialirkan per implementasi
const NUM_ITERATIONS: u64 = 10_000_000;

/// Konfigurasi benchmark
struct BenchConfig {
    buffer_size: usize,
    iterations: u64,
    pin_cores: bool,
    skip_prompt: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            buffer_size: BUFFER_SIZE,
            iterations: NUM_ITERATIONS,
            pin_cores: false,
            skip_prompt: false,
        }
    }
}

fn wait_for_enter(prompt: &str) -> io::Result<()> {
    println!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}

fn print_report(name: &str, report: &TrialReport) {
    println!(
        "  {} took {:.3}s ({:.2} M ops/sec)",
        name,
        report.elapsed.as_secs_f64(),
        report.throughput_m_per_sec()
    );

    if report.mismatches > 0 {
        println!(
            "  ⚠️  {} values out of order - algorithm is broken!",
            report.mismatches
        );
    }
}

fn run_benchmarks(config: BenchConfig) -> io::Result<()> {
    println!("🚀 Talaria - SPSC Ring Buffer Benchmark");
    println!("=======================================\n");
    println!(
        "Tests will execute {} iterations and a buffer size of {}",
        config.iterations, config.buffer_size
    );

    if !config.skip_prompt {
        wait_for_enter("Press Enter to start.")?;
    }
    println!("Running...\n");

    // Baseline: blocking queue berbasis Mutex + Condvar
    let blocking = BlockingQueue::new(config.buffer_size);
    let blocking_report = run_trial(&blocking, config.iterations, config.pin_cores);
    print_report("Blocking queue", &blocking_report);

    // Lock-free ring buffer dengan cursor caching
    let ring = RingBuffer::new(config.buffer_size);
    let ring_report = run_trial(&ring, config.iterations, config.pin_cores);
    print_report("Ring buffer   ", &ring_report);

    let speedup = blocking_report.elapsed.as_secs_f64() / ring_report.elapsed.as_secs_f64();
    println!("\n✅ Done - ring buffer speedup: {:.1}x", speedup);

    if !config.skip_prompt {
        wait_for_enter("\nPress Enter to exit.")?;
    }

    Ok(())
}

fn parse_args() -> BenchConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = BenchConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--size" | "-s" => {
                if i + 1 < args.len() {
                    config.buffer_size = args[i + 1].parse().unwrap_or(BUFFER_SIZE);
                    i += 1;
                }
            }
            "--iterations" | "-n" => {
                if i + 1 < args.len() {
                    config.iterations = args[i + 1].parse().unwrap_or(NUM_ITERATIONS);
                    i += 1;
                }
            }
            "--pin" | "-p" => {
                config.pin_cores = true;
            }
            "--yes" | "-y" => {
                config.skip_prompt = true;
            }
            "--help" | "-h" => {
                println!("Talaria - SPSC Ring Buffer Benchmark\n");
                println!("Usage: talaria [OPTIONS]\n");
                println!("Options:");
                println!("  -s, --size <N>        Buffer size (default: {})", BUFFER_SIZE);
                println!(
                    "  -n, --iterations <N>  Iteration count (default: {})",
                    NUM_ITERATIONS
                );
                println!("  -p, --pin             Pin producer/consumer to CPU cores 0/1");
                println!("  -y, --yes             Skip interactive prompts");
                println!("  -h, --help            Show this help");
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn main() {
    let config = parse_args();

    if let Err(e) = run_benchmarks(config) {
        eprintln!("❌ Benchmark error: {}", e);
        std::process::exit(1);
    }
}
