use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use grider::{Grid, GridLike, Point};
use std::hint::black_box;

// Helper function to create test grids of different patterns
fn create_test_grid(size: usize, pattern: &str) -> Grid<char> {
    Grid::from_cells(
        (0..size * size).map(|i| {
            let (row, column) = (i / size, i % size);
            let filled = match pattern {
                "checkerboard" => (row + column) % 2 == 0,
                "horizontal_stripes" => row % 2 == 0,
                "sparse" => row % 10 == 0 && column % 10 == 0,
                _ => false,
            };
            if filled {
                '#'
            } else {
                '.'
            }
        }),
        size,
    )
}

// Benchmark map over different grid sizes
fn bench_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("map");
    for size in [10, 100, 500] {
        let grid = create_test_grid(size, "checkerboard");
        group.bench_with_input(
            BenchmarkId::new("size", format!("{size}x{size}")),
            &grid,
            |b, grid| {
                b.iter(|| black_box(grid.map(|&c| c == '#')));
            },
        );
    }
    group.finish();
}

// Benchmark flat_map zoom factors
fn bench_flat_map_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat_map_zoom");
    let grid = create_test_grid(50, "checkerboard");
    for zoom in [1, 2, 3, 5] {
        group.bench_with_input(BenchmarkId::new("zoom", zoom), &grid, |b, grid| {
            b.iter(|| black_box(grid.flat_map(|&c| grider::grid![[c; zoom]; zoom])));
        });
    }
    group.finish();
}

// Benchmark a full adjacency sweep, counting filled neighbours per cell
fn bench_adjacency(c: &mut Criterion) {
    let mut group = c.benchmark_group("adjacency");
    for pattern in ["checkerboard", "horizontal_stripes", "sparse"] {
        let grid = create_test_grid(200, pattern);
        group.bench_with_input(BenchmarkId::new("pattern", pattern), &grid, |b, grid| {
            b.iter(|| {
                let counts = grid.map_by_point(|p: Point, _| {
                    grid.adjacent_of(p.row, p.column)
                        .into_iter()
                        .filter(|&n| grid[n] == '#')
                        .count()
                });
                black_box(counts)
            });
        });
    }
    group.finish();
}

// Benchmark text import and export
fn bench_text_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");
    let text = create_test_grid(300, "sparse").to_string();
    group.bench_function("import", |b| {
        b.iter(|| black_box(Grid::from(text.as_str()).row_count()));
    });
    let grid = Grid::from(text.as_str());
    group.bench_function("export", |b| {
        b.iter(|| black_box(grid.to_string()));
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(20); // Reduced sample size for faster runs
    targets = bench_map, bench_flat_map_zoom, bench_adjacency, bench_text_round_trip
}
criterion_main!(benches);
