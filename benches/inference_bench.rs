//! Benchmarks for schema inference operations
//!
//! Run with: cargo bench --bench inference_bench

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use schema_snap::inference::{DateDetection, detect_date, infer_schema_set};

/// Generate a document with one `User` root holding `count` records
fn generate_document(count: usize) -> String {
    let records: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#"{{"id": {}, "email": "user{}@example.com", "name": "User {}", "is_active": {}, "created_at": "2024-01-15T10:30:00Z", "tags": ["t{}"], "profile": {{"bio": "bio {}", "age": {}}}}}"#,
                i,
                i,
                i,
                i % 2 == 0,
                i % 7,
                i,
                20 + (i % 60)
            )
        })
        .collect();
    format!(r#"{{"User": [{}]}}"#, records.join(","))
}

fn bench_date_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("date_detection");

    let test_cases = vec![
        ("iso_date", "2024-01-15"),
        ("rfc3339", "2024-01-15T10:30:00Z"),
        ("month_name", "Jan 15 2024"),
        ("numeric", "2024"),
        ("plain_string", "hello world"),
    ];

    for (name, value) in test_cases {
        group.bench_with_input(BenchmarkId::new("permissive", name), &value, |b, value| {
            b.iter(|| black_box(detect_date(value, DateDetection::Permissive)));
        });
        group.bench_with_input(BenchmarkId::new("strict", name), &value, |b, value| {
            b.iter(|| black_box(detect_date(value, DateDetection::Strict)));
        });
    }

    group.finish();
}

fn bench_schema_set_inference(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema_set_inference");

    for count in [10, 100, 1000].iter() {
        let document = generate_document(*count);
        group.throughput(Throughput::Elements(*count as u64));

        group.bench_with_input(
            BenchmarkId::new("infer_schema_set", count),
            &document,
            |b, document| {
                b.iter(|| black_box(infer_schema_set(document)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_date_detection, bench_schema_set_inference);
criterion_main!(benches);
