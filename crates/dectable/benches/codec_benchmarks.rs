//! Codec performance benchmarks.
//!
//! Measures encoding, decoding and validation across table sizes.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use dectable::{Table, decode, edit, encode, validate};

/// Build a table with the given number of rules and columns.
fn generate_table(rules: usize, inputs: usize, outputs: usize) -> Table {
    let mut table = Table::draft_with_id("DAK.DT.BENCH").with_name("Benchmark");
    for _ in 1..inputs {
        table = edit::add_input(&table);
    }
    for _ in 1..outputs {
        table = edit::add_output(&table);
    }
    for _ in 1..rules {
        table = edit::add_rule(&table);
    }

    for (i, input) in table.inputs.iter_mut().enumerate() {
        input.expression = format!("Observation.value{}", i);
    }
    for (r, rule) in table.rules.iter_mut().enumerate() {
        for (c, entry) in rule.input_entries.iter_mut().enumerate() {
            *entry = match c % 3 {
                0 => format!(">= {}", r),
                1 => "\"yes\"".to_string(),
                _ => "-".to_string(),
            };
        }
        for entry in rule.output_entries.iter_mut() {
            *entry = format!("\"Outcome {} & <follow-up>\"", r % 10);
        }
    }

    table
}

/// Benchmark encoding tables of various sizes.
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for rules in [10, 100, 1_000].iter() {
        let table = generate_table(*rules, 5, 2);

        group.throughput(Throughput::Elements(*rules as u64));
        group.bench_with_input(BenchmarkId::new("rules", rules), &table, |b, table| {
            b.iter(|| encode(black_box(table)))
        });
    }

    group.finish();
}

/// Benchmark decoding documents of various sizes.
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for rules in [10, 100, 1_000].iter() {
        let document = encode(&generate_table(*rules, 5, 2));

        group.throughput(Throughput::Bytes(document.len() as u64));
        group.bench_with_input(BenchmarkId::new("rules", rules), &document, |b, document| {
            b.iter(|| decode(black_box(document)))
        });
    }

    group.finish();
}

/// Benchmark validation.
fn bench_validate(c: &mut Criterion) {
    let table = generate_table(1_000, 8, 3);

    c.bench_function("validate_1000_rules", |b| b.iter(|| validate(black_box(&table))));
}

criterion_group!(benches, bench_encode, bench_decode, bench_validate);
criterion_main!(benches);
