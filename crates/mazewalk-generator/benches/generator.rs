//! Benchmarks for maze generation.
//!
//! This benchmark suite measures `MazeGenerator` on square grids of several
//! sizes, without a renderer attached.
//!
//! # Benchmarks
//!
//! - **`generator`**: Generates a maze for each size and seed. Measures the
//!   complete generation process including the initial cell pass, entrance and
//!   exit opening, carving and the visited-flag reset.
//!
//! # Test Data
//!
//! Uses three fixed integer seeds (`0`, `1`, `2`) to ensure reproducibility
//! while testing multiple cases.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use mazewalk_core::Layout;
use mazewalk_generator::{MazeGenerator, MazeSeed};

const SEEDS: [u64; 3] = [0, 1, 2];
const SIZES: [usize; 3] = [16, 64, 256];

fn bench_generator(c: &mut Criterion) {
    for size in SIZES {
        let generator = MazeGenerator::new(Layout::with_size(size, size).unwrap());
        for (i, seed) in SEEDS.into_iter().enumerate() {
            let seed = MazeSeed::from(seed);
            c.bench_with_input(
                BenchmarkId::new(format!("generator_{size}x{size}"), format!("seed_{i}")),
                &seed,
                |b, seed| {
                    b.iter_batched(
                        || hint::black_box(*seed),
                        |seed| generator.generate_with_seed(seed),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_generator
);
criterion_main!(benches);
