//! Benchmarks for relume-core pipeline operations
//!
//! Run with: cargo bench -p relume-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use relume_core::equalize::{equalize, ClaheParams};
use relume_core::pipeline::{apply_gamma, enhance, EnhanceOptions};
use relume_core::Image;

/// Synthetic low-light color image: dim diagonal gradient with a little
/// channel separation.
fn generate_test_image(width: u32, height: u32) -> Image {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            let t = (x + y) as f32 / (width + height) as f32;
            let base = (20.0 + 80.0 * t) as u8;
            data.push(base);
            data.push(base.saturating_add(10));
            data.push(base.saturating_add(5));
        }
    }
    Image::from_raw(width, height, 3, data).unwrap()
}

fn bench_gamma(c: &mut Criterion) {
    let mut group = c.benchmark_group("gamma");

    for size in [256u32, 512, 1024].iter() {
        let image = generate_test_image(*size, *size);
        group.throughput(Throughput::Elements((*size as u64).pow(2)));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| apply_gamma(black_box(&image), black_box(0.7)))
        });
    }

    group.finish();
}

fn bench_equalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("equalize");
    let params = ClaheParams::default();

    for size in [256u32, 512, 1024].iter() {
        let gray = generate_test_image(*size, *size).to_grayscale().unwrap();
        group.throughput(Throughput::Elements((*size as u64).pow(2)));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| equalize(black_box(&gray), black_box(&params)))
        });
    }

    group.finish();
}

fn bench_enhance(c: &mut Criterion) {
    let mut group = c.benchmark_group("enhance");
    let options = EnhanceOptions {
        gamma: Some(0.7),
        ..Default::default()
    };

    for size in [256u32, 512, 1024].iter() {
        let image = generate_test_image(*size, *size);
        group.throughput(Throughput::Elements((*size as u64).pow(2)));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| enhance(black_box(Some(&image)), black_box(&options)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_gamma, bench_equalize, bench_enhance);
criterion_main!(benches);
