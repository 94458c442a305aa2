//! Benchmarks for pagination throughput

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use msgpage_core::{paginate, Numbering, Paginator, PaginatorConfig};
use std::hint::black_box;

/// Generate test text of roughly `size` bytes
fn generate_test_text(size: usize) -> String {
    let base_text = "Meet at the north trailhead at 0600. Bring water, the 🗺️ and spare batteries. ";
    let repetitions = size / base_text.len() + 1;

    base_text.repeat(repetitions)
}

fn benchmark_sms_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("paginate_sms");

    for size in [160, 1_000, 3_000] {
        let text = generate_test_text(size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("{size}B"), |b| {
            b.iter(|| paginate(black_box(&text), 148));
        });
    }

    group.finish();
}

fn benchmark_numbering(c: &mut Criterion) {
    let mut group = c.benchmark_group("numbering");

    // Enough parts to cross from two- to three-digit totals
    let text = generate_test_text(20_000);
    group.throughput(Throughput::Bytes(text.len() as u64));

    for numbering in [Numbering::Placeholder, Numbering::Exact] {
        let config = PaginatorConfig::builder()
            .max_length(160)
            .numbering(numbering)
            .build()
            .unwrap();
        let paginator = Paginator::new(config);

        group.bench_function(numbering.as_str(), |b| {
            b.iter(|| paginator.paginate(black_box(&text)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_sms_sizes, benchmark_numbering);
criterion_main!(benches);
