use sumador::{available_workers, Matrix, ParallelSumMatrix, SequentialSumMatrix, SumMatrix};

fn main() {
    let matrix = Matrix::from_rows(&[
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
    ])
    .expect("Failed to create matrix");

    let sequential = SequentialSumMatrix::new()
        .sum(&matrix)
        .expect("Sequential sum failed");
    println!("Sequential total: {sequential}");

    let summer = ParallelSumMatrix::new(4).expect("Failed to create summer");
    let parallel = summer.sum(&matrix).expect("Parallel sum failed");
    println!("Parallel total with {} workers: {parallel}", summer.nthread());

    let auto = ParallelSumMatrix::with_available_parallelism();
    println!(
        "Hardware concurrency: {} workers available",
        available_workers()
    );
    println!(
        "Auto-sized total: {}",
        auto.sum(&matrix).expect("Auto-sized sum failed")
    );
}
