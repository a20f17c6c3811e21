//! Parser benchmarks.
//!
//! Run with: `cargo bench --package nitro-par`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nitro_par::Parser;
use nitro_util::{FileId, Handler};

fn parse_count(source: &str) -> usize {
    let handler = Handler::new();
    let tokens = nitro_lex::tokenize(FileId::DUMMY, source, &handler).unwrap();
    Parser::new(tokens).parse().map(|p| p.len()).unwrap_or(0)
}

fn bench_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser");

    group.bench_function("declaration", |b| {
        b.iter(|| parse_count(black_box("i32 x = 1 + 2 * 3;")))
    });

    group.bench_function("control_flow", |b| {
        b.iter(|| {
            parse_count(black_box(
                "i32 n = 0; for (i32 i = 0; i < 10; i++) { if (i % 2 == 0) { n = n + i; } }",
            ))
        })
    });

    let deep = format!("x = {}1{};", "(".repeat(64), ")".repeat(64));
    group.bench_function("nested_parens", |b| b.iter(|| parse_count(black_box(&deep))));

    group.finish();
}

criterion_group!(benches, bench_parser);
criterion_main!(benches);
