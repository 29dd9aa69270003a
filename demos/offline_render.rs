//! Render a sawtooth through the effect offline and print level summaries.
//!
//! Run with: cargo run --example offline_render

use horn_dsp::effect::{HornConfig, HornFilter};
use horn_dsp::preset;

const BLOCK_FRAMES: usize = 512;
const BLOCKS: usize = 64;

fn main() {
    let preset = preset::slow_sweep();
    let config = preset.apply_to(HornConfig::default());
    let controls = preset.control_input();
    let mut effect = HornFilter::new(config);

    let channels = config.channels;
    let mut input = vec![0.0f32; BLOCK_FRAMES * channels];
    let mut output = vec![0.0f32; BLOCK_FRAMES * channels];

    // 110 Hz sawtooth test tone, duplicated to both channels
    let mut phase = 0.0f32;
    let step = 110.0 / config.sample_rate;

    let mut in_rms = 0.0f64;
    let mut out_rms = 0.0f64;
    let mut total = 0usize;

    for _ in 0..BLOCKS {
        for n in 0..BLOCK_FRAMES {
            let s = 2.0 * phase - 1.0;
            phase += step;
            phase -= phase.floor();
            for ch in 0..channels {
                input[n * channels + ch] = s * 0.5;
            }
        }

        effect.process_block(&controls, &input, &mut output);

        for (&x, &y) in input.iter().zip(output.iter()) {
            in_rms += (x * x) as f64;
            out_rms += (y * y) as f64;
            total += 1;
        }
    }

    let params = effect.params();
    println!("preset: {}", preset.name);
    println!(
        "band: {:.1} Hz .. {:.1} Hz  q {:.2}  lfo {:.2} Hz",
        params.base_hz,
        params.lowpass_hz(),
        params.q,
        params.lfo_rate_hz
    );
    println!(
        "input rms {:.4}  output rms {:.4} over {} samples",
        (in_rms / total as f64).sqrt(),
        (out_rms / total as f64).sqrt(),
        total
    );
}
