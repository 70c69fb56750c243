//! Milliseconds per generation for the compute and commit passes

use std::time::Instant;

use gol::Glyphs;
use gol::domain::{compute_next_generation, initializer};
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn benchmark_generation(size: usize, iterations: u32) -> (f64, f64) {
    let mut rng = SmallRng::seed_from_u64(size as u64);
    let mut grid = match initializer::from_random(size, size, 0.3, Glyphs::default(), &mut rng) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("{size}x{size}: {err}");
            return (0.0, 0.0);
        }
    };

    let mut compute_ms = 0.0;
    let mut commit_ms = 0.0;
    for _ in 0..iterations {
        let start = Instant::now();
        compute_next_generation(&mut grid);
        let computed = Instant::now();
        grid.commit_generation();
        compute_ms += (computed - start).as_secs_f64() * 1000.0;
        commit_ms += computed.elapsed().as_secs_f64() * 1000.0;
    }
    (compute_ms / iterations as f64, commit_ms / iterations as f64)
}

fn main() {
    println!("=== Game of Life Generation Benchmark ===\n");

    let sizes = [50, 100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>14}", "Size", "Compute", "Commit", "Cells/sec");
    println!("{:-<52}", "");

    for size in sizes {
        let (compute_ms, commit_ms) = benchmark_generation(size, iterations);
        let total_ms = compute_ms + commit_ms;
        let throughput = if total_ms > 0.0 {
            format!("{:>13.1}M", (size * size) as f64 / (total_ms / 1000.0) / 1_000_000.0)
        } else {
            format!("{:>14}", "-")
        };
        println!(
            "{:>10} {:>12.3} {:>12.3} {}",
            format!("{size}x{size}"),
            compute_ms,
            commit_ms,
            throughput
        );
    }
}
