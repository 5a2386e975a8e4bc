//! Criterion benchmarks for Faceta.
//!
//! Covers the two hot paths of a browse request:
//! - Query interpretation
//! - Ranking over catalogs of increasing size

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use faceta::catalog::{Category, Item, synthetic_catalog};
use faceta::query::interpret;
use faceta::ranking::Ranker;
use faceta::search::{CatalogSearch, FacetFilter};
use faceta::RankingConfig;
use std::hint::black_box;

const QUERIES: &[&str] = &[
    "cheap running shoes under $80 with 4 stars",
    "premium leather bags between $100 and $300",
    "wireless headphones with great reviews",
    "affordable jacket",
    "",
];

/// Benchmark query interpretation.
fn bench_interpret(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpret");

    group.bench_function("interpret_single_query", |b| {
        b.iter(|| black_box(interpret(black_box(QUERIES[0]))))
    });

    group.throughput(Throughput::Elements(QUERIES.len() as u64));
    group.bench_function("interpret_query_mix", |b| {
        b.iter(|| {
            for query in QUERIES {
                black_box(interpret(black_box(query)));
            }
        })
    });

    group.finish();
}

/// Benchmark ranking over catalogs of different sizes.
fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    let ranker = Ranker::default();
    let constraints = interpret(QUERIES[0]);

    for size in [100, 1_000, 10_000] {
        let items = synthetic_catalog(size, 42);
        let candidates: Vec<&Item> = items.iter().collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("heuristic", size), &candidates, |b, candidates| {
            b.iter(|| black_box(ranker.rank(black_box(candidates), &constraints)))
        });
    }

    group.finish();
}

/// Benchmark the full facet-then-rank pipeline.
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let items = synthetic_catalog(5_000, 7);
    let search = CatalogSearch::new(&items, RankingConfig::default()).unwrap();
    let filter = FacetFilter::new().with_category(Category::Shoes);

    group.bench_function("facets_only", |b| {
        b.iter(|| black_box(search.search(&filter, "")))
    });
    group.bench_function("facets_and_query", |b| {
        b.iter(|| black_box(search.search(&filter, black_box(QUERIES[1]))))
    });

    group.finish();
}

criterion_group!(benches, bench_interpret, bench_rank, bench_search);

criterion_main!(benches);
