//! Benchmarks for the control-rate LFO.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use horn_dsp::dsp::{Lfo, LfoWaveform};

pub fn bench_lfo(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/lfo");

    for waveform in [
        LfoWaveform::Sine,
        LfoWaveform::Triangle,
        LfoWaveform::Saw,
        LfoWaveform::Square,
    ] {
        let mut lfo = Lfo::new(6_000.0).with_waveform(waveform);
        lfo.set_rate(5.0);

        group.bench_with_input(
            BenchmarkId::new("next_sample", format!("{:?}", waveform)),
            &waveform,
            |b, _| b.iter(|| black_box(lfo.next_sample())),
        );
    }

    group.finish();
}
