use criterion::{black_box, criterion_group, criterion_main, Criterion};
use telegram_notify::Splitter;

fn newline_split_benchmark(c: &mut Criterion) {
    let splitter = Splitter::default();
    let text = "Rust async Telegram notification with newline aware chunk cuts\n".repeat(512);

    c.bench_function("split_newline_heavy_text", |b| {
        b.iter(|| {
            let chunks = splitter.split(black_box(text.as_str()));
            black_box(chunks.len());
        });
    });
}

fn hard_cut_benchmark(c: &mut Criterion) {
    let splitter = Splitter::default();
    let text = "x".repeat(32_768);

    c.bench_function("split_hard_cut_text", |b| {
        b.iter(|| {
            let chunks = splitter.split(black_box(text.as_str()));
            black_box(chunks.len());
        });
    });
}

criterion_group!(benches, newline_split_benchmark, hard_cut_benchmark);
criterion_main!(benches);
