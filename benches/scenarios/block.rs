//! Benchmarks for the full effect block, bypassed and engaged.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use horn_dsp::control::{POT_COUNT, RAW_MAX, RAW_MIN};
use horn_dsp::effect::{HornConfig, HornFilter};
use horn_dsp::io::ControlInput;

use crate::BLOCK_SIZES;

pub fn bench_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/block");

    let pots = [(RAW_MIN + RAW_MAX) / 2.0; POT_COUNT];

    for &size in BLOCK_SIZES {
        // Interleaved stereo test signal
        let input: Vec<f32> = (0..size * 2)
            .map(|i| ((i / 2) as f32 * 0.11).sin())
            .collect();
        let mut output = vec![0.0f32; input.len()];

        let mut engaged = HornFilter::new(HornConfig::default());
        let on = ControlInput::held(pots, true);
        group.bench_with_input(BenchmarkId::new("filtering", size), &size, |b, _| {
            b.iter(|| {
                engaged.process_block(black_box(&on), black_box(&input), black_box(&mut output));
            })
        });

        let mut bypassed = HornFilter::new(HornConfig::default());
        let off = ControlInput::held(pots, false);
        group.bench_with_input(BenchmarkId::new("bypass", size), &size, |b, _| {
            b.iter(|| {
                bypassed.process_block(black_box(&off), black_box(&input), black_box(&mut output));
            })
        });
    }

    group.finish();
}
