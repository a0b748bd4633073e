//! Span and source map benchmarks.
//!
//! Run with: `cargo bench --bench span_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vixen_util::{SourceMap, Span};

fn bench_span_ordering(c: &mut Criterion) {
    let mut group = c.benchmark_group("span");

    group.bench_function("precedes", |b| {
        let a = Span::new(10, 3);
        let z = Span::new(10, 4);
        b.iter(|| black_box(a.precedes(&z)));
    });

    group.bench_function("display", |b| {
        let s = Span::new(42, 7);
        b.iter(|| black_box(s.to_string()));
    });

    group.finish();
}

fn bench_source_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("source_map");

    group.bench_function("add_and_lookup", |b| {
        b.iter(|| {
            let mut map = SourceMap::new();
            let id = map.add_file("bench.vxn", b"x + 1;".to_vec());
            black_box(map.name(id));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_span_ordering, bench_source_map);
criterion_main!(benches);
