//! Translation-layer benchmarks: name resolution, value codec, request parse.
//!
//! The syscall itself is deliberately not benchmarked; its cost is the
//! kernel's, not this layer's.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use prlimit_abi::request::{self, Arg, Field, LimitSpec};
use prlimit_core::{resolve_name, LimitValue, Slot};

fn bench_resolve_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_name");

    for name in ["as", "nofile", "sigpending", "NOFILE"] {
        group.bench_with_input(BenchmarkId::from_parameter(name), name, |b, name| {
            b.iter(|| black_box(resolve_name(black_box(name))));
        });
    }
    group.bench_function("miss", |b| {
        b.iter(|| black_box(resolve_name(black_box("bogus"))));
    });
    group.finish();
}

fn bench_value_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_codec");

    group.bench_function("from_raw_finite", |b| {
        b.iter(|| black_box(LimitValue::from_raw(black_box(4096))));
    });
    group.bench_function("from_raw_infinity", |b| {
        b.iter(|| black_box(LimitValue::from_raw(black_box(libc::RLIM_INFINITY))));
    });
    group.bench_function("to_raw_unspecified", |b| {
        b.iter(|| black_box(LimitValue::Unspecified.to_raw(black_box(Slot::Hard))));
    });
    group.bench_function("from_host_finite", |b| {
        b.iter(|| black_box(LimitValue::from_host(black_box(Some(4096.0)))));
    });
    group.finish();
}

fn bench_parse_request(c: &mut Criterion) {
    let read_args = [Arg::Number(0.0), Arg::Text("nofile".into())];
    let write_args = [
        Arg::Number(0.0),
        Arg::Text("nofile".into()),
        Arg::Limit(LimitSpec {
            soft: Field::Number(1024.0),
            hard: Field::Number(4096.0),
        }),
    ];

    let mut group = c.benchmark_group("parse_request");
    group.bench_function("read", |b| {
        b.iter(|| black_box(request::parse(black_box(&read_args))));
    });
    group.bench_function("write", |b| {
        b.iter(|| black_box(request::parse(black_box(&write_args))));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_resolve_name,
    bench_value_codec,
    bench_parse_request
);
criterion_main!(benches);
