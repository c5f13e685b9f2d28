//! 邊際成本表建構與完整求解的效能比較

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lotsizing::{CostTableBuilder, LotSizingProblem, Solver, SolverConfig};
use rust_decimal::Decimal;

fn lost_sales_problem(n: usize) -> LotSizingProblem {
    LotSizingProblem::lost_sales(
        (0..n).map(|i| Decimal::from(50 + (i * 37) % 90)).collect(),
        (0..n).map(|i| Decimal::from(1 + i % 3)).collect::<Vec<_>>(),
        vec![Decimal::from(10); n],
        (0..n).map(|i| Decimal::from(200 + (i * 53) % 150)).collect(),
        (0..n).map(|i| Decimal::from(15 + i % 7)).collect(),
    )
}

fn bench_table_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("cost_table");

    for n in [16usize, 64, 128] {
        let problem = lost_sales_problem(n);

        group.bench_with_input(BenchmarkId::new("prefix_sum", n), &problem, |b, p| {
            b.iter(|| CostTableBuilder::build_prefix_sum(black_box(p), false))
        });
        group.bench_with_input(BenchmarkId::new("naive", n), &problem, |b, p| {
            b.iter(|| CostTableBuilder::build_naive(black_box(p)))
        });
    }

    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");

    for n in [128usize, 1024] {
        let problem = lost_sales_problem(n);
        let sequential = Solver::new(SolverConfig::new().sequential());
        let parallel = Solver::new(SolverConfig::new().with_parallel_threshold(1));

        group.bench_with_input(BenchmarkId::new("sequential", n), &problem, |b, p| {
            b.iter(|| sequential.solve(black_box(p)))
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &problem, |b, p| {
            b.iter(|| parallel.solve(black_box(p)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_table_build, bench_solve);
criterion_main!(benches);
