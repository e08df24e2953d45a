//! Document serialization benchmarks
//!
//! Measures the writer on its own: producers are built outside the timed loop.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use quire::blank::{A4, blank_document};
use quire::{Array, Dict, ObjectId, ObjectRecord, Value, Writer, WriterConfig, dict};

/// A page-like dictionary with a mix of names, numbers, links and arrays
fn page_object(num: u32) -> ObjectRecord {
    ObjectRecord::new(
        (num, 0),
        dict! {
            "Type" => Value::name("Page"),
            "Parent" => Value::link(2, 0),
            "MediaBox" => Array::new().with(0).with(0).with(595.5).with(842.25),
            "Rotate" => 90,
            "UserUnit" => 1.5,
            "Contents" => Value::link(num + 1, 0),
        },
    )
}

fn benchmark_blank_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("blank_documents");
    let config = WriterConfig::new().with_seed(1);

    for page_count in [1, 100, 1000] {
        let document = blank_document(page_count, A4);

        group.bench_with_input(BenchmarkId::new("pages", page_count), &page_count, |b, _| {
            b.iter(|| document.to_bytes(&config).expect("Failed to write document"));
        });
    }

    group.finish();
}

fn benchmark_object_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("object_serialization");

    for object_count in [100u32, 10_000] {
        let objects: Vec<_> = (0..object_count).map(|i| page_object(3 + 2 * i)).collect();
        group.throughput(Throughput::Elements(object_count as u64));

        group.bench_with_input(BenchmarkId::new("objects", object_count), &objects, |b, objects| {
            b.iter(|| {
                let mut writer = Writer::with_config(Vec::with_capacity(1 << 20), WriterConfig::new().with_seed(1));
                writer.write_header(1, 7).expect("header");
                for object in objects {
                    writer.write_object(object).expect("object");
                }
                writer.write_xref_table().expect("xref");
                writer.write_trailer(ObjectId::first(1), None).expect("trailer");
                writer.finish().expect("finish")
            });
        });
    }

    group.finish();
}

fn benchmark_stream_payloads(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_payloads");

    for payload_size in [1_000usize, 100_000, 1_000_000] {
        let record = ObjectRecord::stream((3, 0), Dict::new(), vec![b'x'; payload_size]);
        group.throughput(Throughput::Bytes(payload_size as u64));

        group.bench_with_input(BenchmarkId::new("payload_bytes", payload_size), &record, |b, record| {
            b.iter(|| {
                let mut writer = Writer::with_config(Vec::new(), WriterConfig::new().with_seed(1));
                writer.write_header(1, 4).expect("header");
                writer.write_object(record).expect("object");
                writer.write_xref_table().expect("xref");
                writer.write_trailer(ObjectId::first(1), None).expect("trailer");
                writer.finish().expect("finish")
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_blank_documents,
    benchmark_object_serialization,
    benchmark_stream_payloads
);
criterion_main!(benches);
