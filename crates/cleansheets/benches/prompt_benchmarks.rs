//! Prompt-building and reply-parsing benchmarks.
//!
//! Measures the pure, per-request parts of the pipeline: rendering cell
//! batches into prompts and parsing model replies into issues.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use cleansheets::llm::{cell_analysis_prompt, parse_issues};
use cleansheets::sheet::cell_address;
use cleansheets::{filter_confident, CellInput, Issue};

/// Generate a synthetic cell batch of the given size.
fn generate_cells(count: usize) -> Vec<CellInput> {
    (0..count)
        .map(|i| {
            let row = i / 5 + 2;
            let col = i % 5 + 1;
            let mut cell = CellInput::new(
                cell_address(row, col),
                format!("value {} with  spaces ", i),
            );
            if col == 1 {
                cell = cell.with_header("Name");
            }
            if i % 17 == 0 {
                cell = cell.from_broken_formula();
            }
            cell
        })
        .collect()
}

/// Generate a model reply containing the given number of issues.
fn generate_reply(count: usize, fenced: bool) -> String {
    let issues: Vec<Issue> = (0..count)
        .map(|i| {
            Issue::new(
                (i / 5 + 2) as i64,
                (i % 5 + 1) as i64,
                "Spaces",
                format!("value {} with  spaces ", i),
                format!("value {} with spaces", i),
            )
            .with_confidence(0.5 + (i % 50) as f64 / 100.0)
        })
        .collect();

    let json = serde_json::to_string(&issues).unwrap();
    if fenced {
        format!("```json\n{}\n```", json)
    } else {
        json
    }
}

/// Benchmark prompt rendering across batch sizes.
fn bench_build_prompt(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_prompt");

    for count in [10, 100, 200, 1_000].iter() {
        let cells = generate_cells(*count);

        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("cells", count), &cells, |b, cells| {
            b.iter(|| black_box(cell_analysis_prompt(cells)))
        });
    }

    group.finish();
}

/// Benchmark reply parsing across reply sizes.
fn bench_parse_reply(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_reply");

    for count in [1, 10, 100].iter() {
        let reply = generate_reply(*count, false);
        let bytes = reply.len();

        group.throughput(Throughput::Bytes(bytes as u64));
        group.bench_with_input(BenchmarkId::new("issues", count), &reply, |b, reply| {
            b.iter(|| black_box(parse_issues(reply)))
        });
    }

    group.finish();
}

/// Benchmark parsing of fenced replies (the fence-strip path).
fn bench_parse_fenced_reply(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_fenced_reply");

    for count in [1, 10, 100].iter() {
        let reply = generate_reply(*count, true);
        let bytes = reply.len();

        group.throughput(Throughput::Bytes(bytes as u64));
        group.bench_with_input(BenchmarkId::new("issues", count), &reply, |b, reply| {
            b.iter(|| black_box(parse_issues(reply)))
        });
    }

    group.finish();
}

/// Benchmark the confidence gate.
fn bench_filter_confident(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_confident");

    for count in [10, 100, 1_000].iter() {
        let reply = generate_reply(*count, false);
        let issues = parse_issues(&reply);

        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("issues", count), &issues, |b, issues| {
            b.iter(|| black_box(filter_confident(issues.clone())))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build_prompt,
    bench_parse_reply,
    bench_parse_fenced_reply,
    bench_filter_confident,
);
criterion_main!(benches);
