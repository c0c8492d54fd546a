// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use thicket_coalesce::{CoalesceOptions, Coalescer, Submit};

fn bench_submit(c: &mut Criterion) {
    let mut group = c.benchmark_group("coalesce");

    group.bench_function("submit_1024_distinct_then_flush", |b| {
        b.iter_batched(
            || {
                Coalescer::<u64, u64>::new(CoalesceOptions {
                    timeout_ms: 10,
                    ..CoalesceOptions::default()
                })
            },
            |mut coalescer| {
                for input in 0..1024_u64 {
                    black_box(coalescer.submit(input, 0));
                }
                let batch = coalescer.take_due(10).expect("batch due");
                let outputs: Vec<u64> = batch.inputs.iter().map(|i| i * 2).collect();
                black_box(coalescer.resolve(batch.id, outputs));
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("submit_1024_repeat_key", |b| {
        b.iter_batched(
            || {
                Coalescer::<u64, u64>::new(CoalesceOptions {
                    timeout_ms: 10,
                    ..CoalesceOptions::default()
                })
            },
            |mut coalescer| {
                for _ in 0..1024 {
                    black_box(coalescer.submit(7, 0));
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("cached_hit", |b| {
        let mut coalescer = Coalescer::<u64, u64>::new(CoalesceOptions {
            cache: true,
            size: Some(1),
            ..CoalesceOptions::default()
        });
        if let Submit::Flush(_, batch) = coalescer.submit(7, 0) {
            coalescer.resolve(batch.id, vec![14]);
        }
        b.iter(|| black_box(coalescer.submit(black_box(7), 0)));
    });

    group.finish();
}

criterion_group!(benches, bench_submit);
criterion_main!(benches);
