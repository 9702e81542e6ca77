//! Benchmarks for highlight-directive resolution.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use docskin_highlight::DirectiveResolver;

/// Generate a code block with a directive comment every `every` lines.
fn generate_block(lines: usize, every: usize) -> String {
    let mut code = String::with_capacity(lines * 24);
    for i in 0..lines {
        if every > 0 && i % every == 0 {
            code.push_str("// highlight-next-line\n");
        }
        code.push_str(&format!("let value_{i} = {i};\n"));
    }
    code
}

fn bench_resolve_plain(c: &mut Criterion) {
    let resolver = DirectiveResolver::new();
    let block = generate_block(200, 0);

    c.bench_function("resolve_plain_200_lines", |b| {
        b.iter(|| resolver.resolve(Some("js"), None, black_box(&block)));
    });
}

fn bench_resolve_directives(c: &mut Criterion) {
    let resolver = DirectiveResolver::new();
    let block = generate_block(200, 10);

    c.bench_function("resolve_directives_200_lines", |b| {
        b.iter(|| resolver.resolve(Some("js"), None, black_box(&block)));
    });
}

fn bench_resolve_metastring(c: &mut Criterion) {
    let resolver = DirectiveResolver::new();
    let block = generate_block(200, 0);

    c.bench_function("resolve_metastring_range", |b| {
        b.iter(|| resolver.resolve(Some("js"), Some("{10-50,80}"), black_box(&block)));
    });
}

fn bench_resolve_varying_sizes(c: &mut Criterion) {
    let resolver = DirectiveResolver::new();
    let mut group = c.benchmark_group("resolve_by_size");

    for lines in [50, 500, 5000] {
        let block = generate_block(lines, 20);
        group.throughput(Throughput::Bytes(block.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &block, |b, block| {
            b.iter(|| resolver.resolve(Some("js"), None, black_box(block)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_resolve_plain,
    bench_resolve_directives,
    bench_resolve_metastring,
    bench_resolve_varying_sizes
);
criterion_main!(benches);
