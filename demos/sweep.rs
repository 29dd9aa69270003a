//! Print the mapped parameter table across the base-cutoff pot's travel.
//!
//! Run with: cargo run --example sweep

use horn_dsp::control::{self, HornParams, POT_COUNT, RAW_MAX, RAW_MIN};

fn main() {
    println!("{:>6}  {:>10}  {:>10}  {:>10}", "pot", "base Hz", "lo-pass Hz", "clamped");

    for step in 0..=20 {
        let raw = RAW_MIN + (RAW_MAX - RAW_MIN) * step as f32 / 20.0;
        let mut pots = [RAW_MIN; POT_COUNT];
        pots[control::POT_BASE] = raw;
        pots[control::POT_WIDTH] = RAW_MAX; // widest band shows the ceiling best

        let params = HornParams::from_pots(&pots);
        let lowpass = params.lowpass_hz();
        let clamped = params.base_hz + params.width_hz > control::LOWPASS_CEILING_HZ;

        println!(
            "{:>6.3}  {:>10.1}  {:>10.1}  {:>10}",
            raw,
            params.base_hz,
            lowpass,
            if clamped { "yes" } else { "" }
        );
    }
}
