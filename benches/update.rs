//! Throughput benchmark for `Model::update` over a representative captured
//! log excerpt: interleaved plain text, SGR color/style runs, in-place
//! carriage-return overwrites, and line erasure.

use ansi_screen_buffer::{LineDiscipline, Model};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_log_excerpt() -> Vec<u8> {
    let mut log = Vec::new();
    for i in 0..200 {
        log.extend_from_slice(format!("[{i:04}] \x1b[36mstep\x1b[0m starting dependency resolution\n").as_bytes());
        log.extend_from_slice(b"  downloading \x1b[33m0%\x1b[0m\r");
        log.extend_from_slice(b"  downloading \x1b[33m50%\x1b[0m\r");
        log.extend_from_slice(b"  downloading \x1b[1;32m100%\x1b[0m\x1b[0K\n");
    }
    log.extend_from_slice(b"\x1b[1;32mBuild succeeded\x1b[0m\n");
    log
}

fn bench_update(c: &mut Criterion) {
    let excerpt = sample_log_excerpt();

    c.bench_function("update_full_excerpt", |b| {
        b.iter(|| {
            let model = Model::init(LineDiscipline::Cooked).update(black_box(&excerpt));
            black_box(model.buffer().row_count());
        })
    });

    c.bench_function("update_chunked_4kb", |b| {
        b.iter(|| {
            let mut model = Model::init(LineDiscipline::Cooked);
            for chunk in excerpt.chunks(4096) {
                model = model.update(black_box(chunk));
            }
            black_box(model.buffer().row_count());
        })
    });
}

criterion_group!(benches, bench_update);
criterion_main!(benches);
