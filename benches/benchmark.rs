//! Benchmarks for paysource performance testing.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use paysource::bad_request;
use paysource::payment::Payment;
use paysource::{luhn, GatewayError, Pan};

// Test card numbers
const VISA: &str = "4242424242424242";
const VISA_FORMATTED: &str = "4242-4242-4242-4242";
const AMEX: &str = "378282246310005";
const MAESTRO: &str = "6759411100000008";

const VISA_DIGITS: [u8; 16] = [4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2];

/// Benchmark PAN validation end to end
fn bench_pan_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("pan_validation");

    group.bench_function("visa_raw", |b| {
        b.iter(|| Pan::new(black_box(VISA)).is_valid())
    });

    group.bench_function("visa_formatted", |b| {
        b.iter(|| Pan::new(black_box(VISA_FORMATTED)).is_valid())
    });

    group.bench_function("amex", |b| {
        b.iter(|| Pan::new(black_box(AMEX)).is_valid())
    });

    group.bench_function("maestro_overlapping_prefix", |b| {
        b.iter(|| Pan::new(black_box(MAESTRO)).is_valid())
    });

    group.finish();
}

/// Benchmark the Luhn checksum in isolation
fn bench_luhn(c: &mut Criterion) {
    let mut group = c.benchmark_group("luhn");

    group.bench_function("digits_16", |b| {
        b.iter(|| luhn::validate(black_box(&VISA_DIGITS)))
    });

    group.bench_function("str_16", |b| b.iter(|| luhn::validate_str(black_box(VISA))));

    group.finish();
}

/// Benchmark masking for display
fn bench_masking(c: &mut Criterion) {
    c.bench_function("mask_16_digits", |b| {
        let pan = Pan::new(VISA);
        b.iter(|| black_box(&pan).masked())
    });
}

/// Benchmark error-message classification
fn bench_error_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("error_classification");

    group.bench_function("single_reason", |b| {
        b.iter(|| bad_request::parse_reasons(black_box("amount must be less than 50000"), None))
    });

    group.bench_function("multi_reason", |b| {
        b.iter(|| {
            bad_request::parse_reasons(
                black_box(
                    "name cannot be blank, email is in invalid format, and phone_number must contain 10-11 digit characters",
                ),
                None,
            )
        })
    });

    group.bench_function("envelope_decode", |b| {
        let json = r#"{
            "object": "error",
            "location": "https://docs.example/api-errors#invalid-card",
            "code": "invalid_card",
            "message": "number can't be blank and brand not supported (unknown)"
        }"#;
        b.iter(|| serde_json::from_str::<GatewayError>(black_box(json)).unwrap())
    });

    group.finish();
}

/// Benchmark the payment wire codec
fn bench_payment_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("payment_codec");

    let truemoney = r#"{"type":"truemoney","phone_number":"0812345678"}"#;
    group.bench_function("decode_payload", |b| {
        b.iter(|| serde_json::from_str::<Payment>(black_box(truemoney)).unwrap())
    });

    let bare = r#"{"type":"promptpay"}"#;
    group.bench_function("decode_bare_type", |b| {
        b.iter(|| serde_json::from_str::<Payment>(black_box(bare)).unwrap())
    });

    let payment: Payment = serde_json::from_str(truemoney).unwrap();
    group.bench_function("encode_payload", |b| {
        b.iter(|| serde_json::to_string(black_box(&payment)).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_pan_validation,
    bench_luhn,
    bench_masking,
    bench_error_classification,
    bench_payment_codec
);
criterion_main!(benches);
