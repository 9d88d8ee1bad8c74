//! Benchmarks for the radix codecs and UTF transcoding.
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use textcodec::{ConversionMode, Encoding, utf8_to_utf16, utf16_to_utf8};

/// Deterministic pseudo-random bytes, so every run encodes the same data.
fn make_payload(len: usize) -> Vec<u8> {
    let mut state = 0x2545_F491_4F6C_DD1D_u64;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state.to_le_bytes()[0]
        })
        .collect()
}

/// Mixed-script text: ASCII, two-, three- and four-byte UTF-8 sequences.
fn make_text(target_len: usize) -> String {
    let unit = "plain ascii, ünïcödé, 漢字かな, 😀🚀 ";
    unit.repeat(target_len.div_ceil(unit.len()))
}

fn bench_radix(c: &mut Criterion) {
    let payload = make_payload(16 * 1024);
    let mut group = c.benchmark_group("radix");
    group.throughput(Throughput::Bytes(payload.len() as u64));

    for encoding in Encoding::ALL {
        // Base58 is quadratic in the input length.
        let input = if encoding == Encoding::Base58 {
            &payload[..256]
        } else {
            &payload[..]
        };
        let encoded = encoding.encode(input).unwrap();

        group.bench_with_input(BenchmarkId::new("encode", encoding), input, |b, input| {
            b.iter(|| black_box(encoding.encode(black_box(input)).unwrap()));
        });
        group.bench_with_input(
            BenchmarkId::new("decode", encoding),
            encoded.as_bytes(),
            |b, text| {
                b.iter(|| black_box(encoding.decode(black_box(text)).unwrap()));
            },
        );
    }
    group.finish();
}

fn bench_utf(c: &mut Criterion) {
    let text = make_text(64 * 1024);
    let utf16: Vec<u16> = text.encode_utf16().collect();
    let mut group = c.benchmark_group("utf");
    group.throughput(Throughput::Bytes(text.len() as u64));

    for mode in [ConversionMode::Strict, ConversionMode::Lenient] {
        let name = format!("{mode:?}").to_lowercase();
        group.bench_with_input(BenchmarkId::new("utf8_to_utf16", &name), &mode, |b, &m| {
            b.iter(|| black_box(utf8_to_utf16(black_box(text.as_bytes()), m).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("utf16_to_utf8", &name), &mode, |b, &m| {
            b.iter(|| black_box(utf16_to_utf8(black_box(&utf16), m).unwrap()));
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_radix, bench_utf }
criterion_main!(benches);
