// ============================================================================
// Chinese Numeral Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Plain decimals - fast path, no tokenization
// 2. Chinese numerals - tokenization and chunk decoding
// 3. Stacked units - correction pass over trailing units
// 4. Formatting - integer to numeral text
// ============================================================================

use chinese_numerals::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigInt;
use std::hint::black_box;

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let parser = ChineseNumberParser::default();

    let inputs = [
        ("plain", "-12345.678"),
        ("small", "一千零一"),
        ("myriad", "一千二百三十四万五千六百七十八"),
        ("stacked", "一万亿兆"),
        ("huge", "九千九百九十九大数九千九百九十九无量零一"),
    ];

    for (name, input) in inputs.iter() {
        group.bench_with_input(BenchmarkId::new("default", name), input, |b, input| {
            b.iter(|| black_box(parser.parse(black_box(input))))
        });
    }

    group.finish();
}

fn benchmark_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    let formatter = ChineseFormatter::default();

    for digits in [4u32, 16, 72].iter() {
        let value = BigInt::from(10u8).pow(*digits) - 1;
        group.bench_with_input(BenchmarkId::new("standard", digits), &value, |b, value| {
            b.iter(|| black_box(formatter.format(black_box(value))))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_parse, benchmark_format);
criterion_main!(benches);
