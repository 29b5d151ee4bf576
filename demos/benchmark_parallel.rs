use std::time::Instant;
use sumador::{Matrix, ParallelSumMatrix, SequentialSumMatrix, SumMatrix};

fn main() {
    let size = 2048;
    println!("Creating {}×{} matrix...", size, size);

    let matrix = Matrix::from_vec(
        size,
        size,
        (0..size * size)
            .map(|i| ((i % 100) as f64) / 10.0)
            .collect(),
    )
    .expect("Failed to create matrix");

    // Warmup
    println!("Warmup...");
    let sequential = SequentialSumMatrix::new();
    for _ in 0..3 {
        let _ = sequential.sum(&matrix).expect("Warmup sum failed");
    }

    let iterations = 20;

    println!("Benchmarking sequential sum...");
    let start = Instant::now();
    for _ in 0..iterations {
        let _ = sequential.sum(&matrix).expect("Sequential sum failed");
    }
    let seq_ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    println!("Sequential: {:.3}ms per sum", seq_ms);

    for nthread in [2, 4, 8] {
        let summer = ParallelSumMatrix::new(nthread).expect("Failed to create summer");
        let start = Instant::now();
        for _ in 0..iterations {
            let _ = summer.sum(&matrix).expect("Parallel sum failed");
        }
        let par_ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
        println!(
            "Parallel ({} workers): {:.3}ms per sum ({:.2}x)",
            nthread,
            par_ms,
            seq_ms / par_ms
        );
    }

    #[cfg(feature = "parallel")]
    println!("Parallel feature: ENABLED");
    #[cfg(not(feature = "parallel"))]
    println!("Parallel feature: DISABLED");
}
