//! Decoding benchmarks for dbf2sql
//!
//! These benchmarks measure the binary decoders on synthetic table buffers
//! of varying row counts, which dominate conversion time for real
//! directories.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dbf2sql::dbf::{decode_records, decode_structure, FieldDescriptor, TableHeader};
use dbf2sql::diag::Diagnostics;
use dbf2sql::sql::table_script;
use zerocopy::IntoBytes;

fn build_table(rows: usize) -> Vec<u8> {
    let fields: [(&[u8], u8, u8, u8); 4] = [
        (b"id", b'N', 8, 0),
        (b"name", b'C', 30, 0),
        (b"price", b'N', 10, 2),
        (b"created", b'D', 8, 0),
    ];
    let header_len = 32 + 32 * fields.len();
    let record_len = 1 + fields.iter().map(|(_, _, l, _)| *l as usize).sum::<usize>();

    let mut buf = TableHeader::new(rows as u32, header_len as u16, record_len as u16)
        .as_bytes()
        .to_vec();
    for (name, code, len, dec) in fields {
        buf.extend(FieldDescriptor::new(name, code, len, dec).as_bytes());
    }
    for i in 0..rows {
        buf.push(b' ');
        for (cell, len) in [
            (format!("{:>8}", i % 100_000), 8usize),
            (format!("{:<30}", "widget"), 30),
            (format!("{:>10.2}", (i % 997) as f64 / 7.0), 10),
            ("20230115".to_string(), 8),
        ] {
            let mut bytes = cell.into_bytes();
            bytes.resize(len, b' ');
            buf.extend(bytes);
        }
    }
    buf
}

fn bench_decode_structure(c: &mut Criterion) {
    let buf = build_table(0);
    c.bench_function("decode_structure", |b| {
        b.iter(|| {
            let mut diag = Diagnostics::new();
            decode_structure(black_box(&buf), "bench", &mut diag).unwrap()
        });
    });
}

fn bench_decode_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_records");

    for rows in [100usize, 1_000, 10_000] {
        let buf = build_table(rows);
        let mut diag = Diagnostics::new();
        let structure = decode_structure(&buf, "bench", &mut diag).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, _| {
            b.iter(|| decode_records(black_box(&buf), &structure).unwrap());
        });
    }

    group.finish();
}

fn bench_table_script(c: &mut Criterion) {
    let buf = build_table(1_000);
    let mut diag = Diagnostics::new();
    let structure = decode_structure(&buf, "bench", &mut diag).unwrap();
    let records = decode_records(&buf, &structure).unwrap();

    c.bench_function("table_script_1000_rows", |b| {
        b.iter(|| table_script(black_box("bench"), &structure, &records));
    });
}

criterion_group!(
    benches,
    bench_decode_structure,
    bench_decode_records,
    bench_table_script
);
criterion_main!(benches);
