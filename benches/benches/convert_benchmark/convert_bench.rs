use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use iqwav_benchmark::capture;
use iqwav_core::{convert, encode_wav, CaptureHeaderExt, ReportFormat, SampleStream};
use iqwav_types::CaptureHeader;

fn bench_encode_wav(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_wav");

    for groups in [1_000usize, 100_000, 2_000_000] {
        let input = capture(groups);
        let stream = SampleStream::from_capture(&input);

        group.throughput(Throughput::Bytes(stream.byte_len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(groups), &stream, |b, s| {
            b.iter(|| encode_wav(black_box(2_000_000), black_box(s)).unwrap())
        });
    }

    group.finish();
}

fn bench_convert(c: &mut Criterion) {
    let input = capture(100_000);

    c.bench_function("convert_100k", |b| {
        b.iter(|| convert(black_box(&input), ReportFormat::Text).unwrap())
    });
}

fn bench_header_decode(c: &mut Criterion) {
    let input = capture(0);

    c.bench_function("header_decode", |b| {
        b.iter(|| CaptureHeader::decode(black_box(&input)).unwrap())
    });
}

criterion_group!(benches, bench_encode_wav, bench_convert, bench_header_decode);
criterion_main!(benches);
