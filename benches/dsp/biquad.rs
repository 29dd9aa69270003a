//! Benchmarks for the direct-form-I biquad section.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use horn_dsp::dsp::{design, Biquad};

use crate::BLOCK_SIZES;

pub fn bench_biquad(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/biquad");

    for &size in BLOCK_SIZES {
        // Sawtooth-like ramp as a harmonically busy test signal
        let input: Vec<f32> = (0..size)
            .map(|i| (i as f32 / size as f32) * 2.0 - 1.0)
            .collect();

        // Single section
        let mut filter = Biquad::new();
        filter.set_coefficients(design::lowpass(1_000.0, 2.5, 48_000.0));
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("lowpass", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                filter.render(black_box(&mut buffer));
            })
        });

        // The series pair the effect runs per channel
        let mut highpass = Biquad::new();
        highpass.set_coefficients(design::highpass(440.0, 2.5, 48_000.0));
        let mut lowpass = Biquad::new();
        lowpass.set_coefficients(design::lowpass(3_440.0, 2.5, 48_000.0));
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("series_pair", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                for sample in buffer.iter_mut() {
                    *sample = lowpass.tick(highpass.tick(black_box(*sample)));
                }
            })
        });

        // Coefficient recompute + push, the per-control-tick cost
        group.bench_with_input(BenchmarkId::new("redesign", size), &size, |b, _| {
            b.iter(|| {
                let coeffs = design::highpass(black_box(440.0), black_box(2.5), 48_000.0);
                highpass.set_coefficients(black_box(coeffs));
            })
        });
    }

    group.finish();
}
