//! Benchmarks for typing, deletion and word navigation in `LineEditor`.
//!
//! Run with: `cargo bench --package lineedit-text --bench editor_bench`
//!
//! Every edit rebuilds the line and records a snapshot, so costs scale with
//! line length. The sizes below cover short form fields up to long pasted
//! lines.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lineedit_text::{HistoryConfig, LineEditor, NoComposition, SentinelSpace};
use std::hint::black_box;

const SIZES: [usize; 3] = [16, 256, 4096];

fn line_of(len: usize) -> String {
    "lorem ipsum dolor sit amet "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn bench_typing(c: &mut Criterion) {
    let mut group = c.benchmark_group("typing");
    for size in SIZES {
        let line = line_of(size);
        group.throughput(Throughput::Elements(1));

        group.bench_with_input(BenchmarkId::new("latin_at_end", size), &line, |b, line| {
            b.iter_batched(
                || {
                    LineEditor::with_text(line.clone())
                        .with_composer(NoComposition)
                        .with_history_config(HistoryConfig::new(64))
                },
                |mut ed| {
                    let _ = ed.insert_text(black_box("x"));
                    ed
                },
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("hangul_compose", size), &line, |b, line| {
            b.iter_batched(
                || {
                    let mut ed = LineEditor::with_text(line.clone());
                    let _ = ed.insert_text("ㄱ");
                    ed
                },
                |mut ed| {
                    let _ = ed.insert_text(black_box("ㅏ"));
                    ed
                },
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("sentinel", size), &line, |b, line| {
            b.iter_batched(
                || LineEditor::with_text(line.clone()).with_sentinel(SentinelSpace::enabled()),
                |mut ed| {
                    let _ = ed.insert_text(black_box("x"));
                    ed
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_deletion(c: &mut Criterion) {
    let mut group = c.benchmark_group("deletion");
    for size in SIZES {
        let line = line_of(size);
        group.bench_with_input(BenchmarkId::new("backspace", size), &line, |b, line| {
            b.iter_batched(
                || LineEditor::with_text(line.clone()),
                |mut ed| {
                    let _ = ed.delete_backward();
                    ed
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_word_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_navigation");
    for size in SIZES {
        let ed = LineEditor::with_text(line_of(size));
        group.bench_with_input(BenchmarkId::new("left_from_end", size), &ed, |b, ed| {
            b.iter(|| ed.left_index(black_box(ed.len()), true));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_typing, bench_deletion, bench_word_navigation);
criterion_main!(benches);
