// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use thicket_placement::{Placement, PlacementInput, resolve};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self, upper: f64) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 32) as f64 / u32::MAX as f64) * upper
    }
}

fn random_inputs(count: usize, seed: u64) -> Vec<PlacementInput> {
    let mut rng = Lcg::new(seed);
    (0..count)
        .map(|_| PlacementInput {
            anchor_origin: Point::new(rng.next_f64(1600.0), rng.next_f64(2400.0)),
            anchor_size: Size::new(rng.next_f64(300.0), rng.next_f64(80.0)),
            content_size: Size::new(rng.next_f64(400.0), rng.next_f64(600.0)),
            mouse: Point::new(rng.next_f64(1600.0), rng.next_f64(900.0)),
            viewport: Size::new(1600.0, 900.0),
        })
        .collect()
}

const MODES: [Placement; 8] = [
    Placement::InitialMouse,
    Placement::Mouse,
    Placement::Left,
    Placement::Right,
    Placement::Top,
    Placement::Bottom,
    Placement::BottomLeft,
    Placement::BottomRight,
];

fn bench_resolve(c: &mut Criterion) {
    let inputs = random_inputs(1024, 0x5eed);

    let mut group = c.benchmark_group("placement");
    group.bench_function("resolve_all_modes_1024", |b| {
        b.iter(|| {
            for input in &inputs {
                for mode in MODES {
                    black_box(resolve(mode, black_box(input)));
                }
            }
        });
    });
    group.bench_function("resolve_bottom_1024", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(resolve(Placement::Bottom, black_box(input)));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
