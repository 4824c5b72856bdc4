//! Criterion micro-benchmarks for tensor accessor and render paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tensor1d::Tensor;

/// Benchmark: bounds-checked set/get over all 4K slots.
fn bench_set_get_4k(c: &mut Criterion) {
    c.bench_function("set_get_4k", |b| {
        let mut t = Tensor::new(4096).unwrap();
        b.iter(|| {
            for i in 0..4096 {
                t.set(i, i as f32).unwrap();
            }
            let mut acc = 0.0f32;
            for i in 0..4096 {
                acc += t.get(i).unwrap();
            }
            black_box(acc);
        });
    });
}

/// Benchmark: render a 4K-element tensor to its `array([...])` string.
fn bench_render_4k(c: &mut Criterion) {
    let mut t = Tensor::new(4096).unwrap();
    for i in 0..4096 {
        t.set(i, (i as f32).sin()).unwrap();
    }

    c.bench_function("render_4k", |b| {
        b.iter(|| {
            let s = t.render();
            black_box(&s);
        });
    });
}

criterion_group!(benches, bench_set_get_4k, bench_render_4k);
criterion_main!(benches);
