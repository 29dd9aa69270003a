use horn_dsp::control::{PotFrame, POT_COUNT, RAW_MAX, RAW_MIN};
use horn_dsp::effect::{HornConfig, HornFilter};
use horn_dsp::io::ControlInput;
use horn_dsp::preset;

fn mid_pots() -> PotFrame {
    [(RAW_MIN + RAW_MAX) / 2.0; POT_COUNT]
}

fn stereo_sine(frames: usize) -> Vec<f32> {
    let mut block = vec![0.0; frames * 2];
    for n in 0..frames {
        let s = (n as f32 * 0.071).sin() * 0.8;
        block[n * 2] = s;
        block[n * 2 + 1] = -s;
    }
    block
}

#[test]
fn bypassed_effect_is_transparent_on_both_channels() {
    let mut effect = HornFilter::new(HornConfig::default());
    let input = stereo_sine(1024);
    let mut output = vec![0.0; input.len()];

    let indicator = effect.process_block(&ControlInput::held(mid_pots(), false), &input, &mut output);

    assert!(!indicator);
    assert_eq!(input, output);
}

#[test]
fn switch_changes_apply_at_block_boundaries_only() {
    let mut effect = HornFilter::new(HornConfig::default());
    let input = stereo_sine(256);
    let mut output = vec![0.0; input.len()];

    // Engaged block: the output is filtered, not a copy.
    effect.process_block(&ControlInput::held(mid_pots(), true), &input, &mut output);
    assert_ne!(input, output, "filtering should alter the signal");

    // The very next block with the switch off is a bit-exact copy; whatever
    // happened mid-stream before this boundary is irrelevant.
    effect.process_block(&ControlInput::held(mid_pots(), false), &input, &mut output);
    assert_eq!(input, output);
}

#[test]
fn identical_runs_produce_identical_audio() {
    fn render(input: &[f32], controls: &ControlInput) -> Vec<f32> {
        let mut effect = HornFilter::new(HornConfig::default());
        let mut output = vec![0.0; input.len()];
        for chunk_pair in input.chunks(512).zip(output.chunks_mut(512)) {
            effect.process_block(controls, chunk_pair.0, chunk_pair.1);
        }
        output
    }

    let input = stereo_sine(2048);
    let controls = ControlInput::held(mid_pots(), true);
    assert_eq!(render(&input, &controls), render(&input, &controls));
}

#[test]
fn impulse_through_engaged_effect_decays() {
    let config = HornConfig {
        channels: 1,
        lfo_depth_hz: 0.0,
        ..HornConfig::default()
    };
    let mut effect = HornFilter::new(config);

    let mut input = vec![0.0; 10_000];
    input[0] = 1.0;
    let mut output = vec![0.0; input.len()];
    effect.process_block(&ControlInput::held(mid_pots(), true), &input, &mut output);

    assert!(output.iter().all(|s| s.is_finite()));
    let early_peak = output[..500].iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
    let late_peak = output[9_000..].iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
    assert!(early_peak > 0.0);
    assert!(
        late_peak < early_peak * 1e-3,
        "expected decay, early {} late {}",
        early_peak,
        late_peak
    );
}

#[test]
fn extreme_pot_positions_stay_stable() {
    for pots in [[RAW_MIN; POT_COUNT], [RAW_MAX; POT_COUNT]] {
        let mut effect = HornFilter::new(HornConfig {
            sample_rate: 44_100.0,
            ..HornConfig::default()
        });
        let input = stereo_sine(4096);
        let mut output = vec![0.0; input.len()];

        for chunk_pair in input.chunks(512).zip(output.chunks_mut(512)) {
            effect.process_block(&ControlInput::held(pots, true), chunk_pair.0, chunk_pair.1);
        }

        assert!(
            output.iter().all(|s| s.is_finite()),
            "unstable output at pot frame {:?}",
            pots
        );
        // The derived low-pass cutoff never escapes its ceiling, even at
        // full base + full width.
        assert!(effect.params().lowpass_hz() <= horn_dsp::control::LOWPASS_CEILING_HZ);
    }
}

#[test]
fn presets_drive_the_effect_end_to_end() {
    for preset in [preset::telephone(), preset::slow_sweep(), preset::gate_hop()] {
        let config = preset.apply_to(HornConfig::default());
        let mut effect = HornFilter::new(config);
        let controls = preset.control_input();

        let input = stereo_sine(1024);
        let mut output = vec![0.0; input.len()];
        let indicator = effect.process_block(&controls, &input, &mut output);

        assert_eq!(indicator, preset.mod_switch, "{}", preset.name);
        assert!(output.iter().all(|s| s.is_finite()), "{}", preset.name);
        assert_ne!(input, output, "{} should color the signal", preset.name);
    }
}
