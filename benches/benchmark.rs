//! Benchmarks for ccparse.
//!
//! Run with: cargo bench

use ccparse::{classify, format, luhn, mask, CardRecord};
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const VISA_16: &str = "4111111111111111";
const AMEX: &str = "378282246310005";
const CARD_STRING: &str = "4111111111111111|12|2030|123";
const CARD_STRING_COMBINED: &str = "4111111111111111|12/30|123";

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("four_fields", |b| {
        b.iter(|| CardRecord::parse(black_box(CARD_STRING)))
    });

    group.bench_function("combined_expiry", |b| {
        b.iter(|| CardRecord::parse(black_box(CARD_STRING_COMBINED)))
    });

    group.finish();
}

fn bench_luhn(c: &mut Criterion) {
    let mut group = c.benchmark_group("luhn");

    group.bench_function("visa_16", |b| {
        b.iter(|| luhn::is_luhn_valid(black_box(VISA_16)))
    });

    group.bench_function("amex_15", |b| b.iter(|| luhn::is_luhn_valid(black_box(AMEX))));

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    group.bench_function("visa", |b| b.iter(|| classify(black_box(VISA_16))));
    group.bench_function("unknown", |b| {
        b.iter(|| classify(black_box("9999999999999999")))
    });

    group.finish();
}

fn bench_display(c: &mut Criterion) {
    let mut group = c.benchmark_group("display");

    group.bench_function("format", |b| {
        b.iter(|| format::format_card_number(black_box(VISA_16)))
    });

    group.bench_function("mask", |b| {
        b.iter(|| mask::mask_card_number(black_box(VISA_16)))
    });

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
    let card = match CardRecord::parse(CARD_STRING) {
        Ok(card) => card,
        Err(err) => panic!("benchmark fixture failed to parse: {}", err),
    };

    c.bench_function("validate", |b| b.iter(|| card.is_valid(black_box(today))));
}

criterion_group!(
    benches,
    bench_parse,
    bench_luhn,
    bench_classify,
    bench_display,
    bench_validate
);
criterion_main!(benches);
