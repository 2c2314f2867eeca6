use criterion::{black_box, criterion_group, criterion_main, Criterion};
use uri_ref::{percent_encoded, remove_dot_segments, resolve::Resolver, Parser, Uri};

criterion_group!(
    benches,
    bench_parse,
    bench_parse_raw_authority,
    bench_serialize,
    bench_remove_dot_segments,
    bench_resolve,
    bench_resolve_fail_fast,
    bench_percent_encoded,
);
criterion_main!(benches);

const PARSE_CASE: &str = "https://user@example.com:8443/search?q=%E6%B5%8B%E8%AF%95#fragment";
const DOT_SEGMENTS_CASE: &str = "/a/b/c/./../../g/./h/../i";
const RESOLVE_CASE_BASE: &str = "http://example.com/foo/bar";
const RESOLVE_CASE_REF: &str = "../baz";
const IRI_CASE: &str = "https://例え.テスト/パス?q=値";

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse", |b| b.iter(|| Uri::parse(black_box(PARSE_CASE))));
}

fn bench_parse_raw_authority(c: &mut Criterion) {
    let parser = Parser::new().expand_authority(false);
    c.bench_function("parse_raw_authority", |b| {
        b.iter(|| parser.parse(black_box(PARSE_CASE)))
    });
}

fn bench_serialize(c: &mut Criterion) {
    let components = Uri::parse(PARSE_CASE).unwrap().into_components();
    c.bench_function("serialize", |b| {
        b.iter(|| black_box(&components).to_string())
    });
}

fn bench_remove_dot_segments(c: &mut Criterion) {
    c.bench_function("remove_dot_segments", |b| {
        b.iter(|| remove_dot_segments(black_box(DOT_SEGMENTS_CASE)))
    });
}

fn bench_resolve(c: &mut Criterion) {
    let base = Uri::parse(RESOLVE_CASE_BASE).unwrap();
    let r = Uri::parse(RESOLVE_CASE_REF).unwrap();

    c.bench_function("resolve", |b| {
        b.iter(|| black_box(&r).resolve(black_box(&base)))
    });
}

fn bench_resolve_fail_fast(c: &mut Criterion) {
    let resolver = Resolver::with_base(Uri::parse(RESOLVE_CASE_BASE).unwrap());

    c.bench_function("resolve_fail_fast", |b| {
        b.iter(|| resolver.resolve(black_box(RESOLVE_CASE_REF)))
    });
}

fn bench_percent_encoded(c: &mut Criterion) {
    c.bench_function("percent_encoded", |b| {
        b.iter(|| percent_encoded(black_box(IRI_CASE)))
    });
}
