//! Benchmarks for the word-list strategies and birthday selection

use classroom_tools::{
    birthday::{born_in_month, by_birthday, parse_roster, select, BUNDLED_ROSTER},
    timer::{default_tasks, Task},
    words::{WordSource, BUNDLED_WORDLIST},
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Benchmark every strategy on the bundled word list held in memory
fn benchmark_strategies(c: &mut Criterion) {
    let source = WordSource::Inline(BUNDLED_WORDLIST.to_string());
    let mut group = c.benchmark_group("strategies");

    for (index, task) in default_tasks(5_000).iter().enumerate() {
        group.bench_with_input(BenchmarkId::new("task", index + 1), &source, |b, source| {
            b.iter(|| black_box(task.run(source)))
        });
    }

    group.finish();
}

/// Benchmark month selection over the bundled roster
fn benchmark_selection(c: &mut Criterion) {
    let students = parse_roster(BUNDLED_ROSTER).unwrap();

    c.bench_function("select_month", |b| {
        b.iter(|| black_box(select(&students, born_in_month(black_box(10)), by_birthday).len()))
    });
}

criterion_group!(benches, benchmark_strategies, benchmark_selection);
criterion_main!(benches);
