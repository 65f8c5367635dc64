//! Criterion benchmarks for link-value parsing.

use std::io::Cursor;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use link_header::{Lexer, Link, Parser};

const TEST_CASES: [(&str, &str); 5] = [
    ("minimal", "</>"),
    ("typical", r#"<https://api.example.com/items?page=2>; rel="next""#),
    (
        "pagination",
        r#"<https://api.example.com/items?page=2&per_page=100>; rel="next"; title="Next page""#,
    ),
    (
        "escaped",
        r#"<https://example.com/>; title="A \"quoted\" \\ word with escapes""#,
    ),
    (
        "many_params",
        "</style.css>; rel=preload; as=style; type=text/css; crossorigin; media=screen; hreflang=en; nopush",
    ),
];

/// Benchmark: full parse from a string
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (name, value) in TEST_CASES {
        group.throughput(Throughput::Bytes(value.len() as u64));
        group.bench_with_input(BenchmarkId::new("link", name), &value, |b, value| {
            b.iter(|| Link::parse(black_box(value)));
        });
    }

    group.finish();
}

/// Benchmark: lexical analysis alone
fn bench_lex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lex");
    let lexer = Lexer::default();

    for (name, value) in TEST_CASES {
        group.throughput(Throughput::Bytes(value.len() as u64));
        group.bench_with_input(BenchmarkId::new("link", name), &value, |b, value| {
            b.iter(|| lexer.analyze(&mut Cursor::new(black_box(value.as_bytes()))));
        });
    }

    group.finish();
}

/// Benchmark: syntactic analysis of pre-lexed input
fn bench_parse_lexemes(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_lexemes");
    let lexer = Lexer::default();

    for (name, value) in TEST_CASES {
        let lexemes = lexer
            .analyze(&mut Cursor::new(value.as_bytes()))
            .expect("valid test value");
        group.bench_with_input(BenchmarkId::new("link", name), &lexemes, |b, lexemes| {
            b.iter(|| Parser::parse_lexemes(black_box(lexemes.clone())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_lex, bench_parse_lexemes);
criterion_main!(benches);
