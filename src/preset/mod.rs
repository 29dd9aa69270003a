#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::control::{HornParams, PotFrame, POT_COUNT, RAW_MAX, RAW_MIN};
use crate::dsp::LfoWaveform;
use crate::effect::HornConfig;
use crate::io::ControlInput;

/// A saved control setup: knob positions plus the modulation settings that
/// live in configuration rather than on a pot.
///
/// Presets store RAW pot positions, not mapped units, so a recalled preset
/// goes through exactly the same mapping path as a physical knob.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct HornPreset {
    pub name: String,
    pub description: Option<String>,
    pub pots: PotFrame,
    pub mod_switch: bool,
    pub lfo_waveform: LfoWaveform,
    pub lfo_depth_hz: f32,
}

impl HornPreset {
    /// The control input this preset produces, held for a whole block.
    pub fn control_input(&self) -> ControlInput {
        ControlInput::held(self.pots, self.mod_switch)
    }

    /// The mapped parameters this preset lands on.
    pub fn params(&self) -> HornParams {
        HornParams::from_pots(&self.pots)
    }

    /// Fold the preset's modulation settings into a config.
    pub fn apply_to(&self, config: HornConfig) -> HornConfig {
        HornConfig {
            lfo_waveform: self.lfo_waveform,
            lfo_depth_hz: self.lfo_depth_hz,
            ..config
        }
    }
}

/// Narrow resonant band in the speech range, modulation off.
pub fn telephone() -> HornPreset {
    HornPreset {
        name: "telephone".into(),
        description: Some("narrow mid band, high resonance".into()),
        pots: pot_positions(0.55, 0.1, 0.85, 0.0),
        mod_switch: true,
        lfo_waveform: LfoWaveform::Sine,
        lfo_depth_hz: 0.0,
    }
}

/// Wide open band with a slow sine sweep on the base cutoff.
pub fn slow_sweep() -> HornPreset {
    HornPreset {
        name: "slow-sweep".into(),
        description: None,
        pots: pot_positions(0.3, 0.9, 0.5, 0.05),
        mod_switch: true,
        lfo_waveform: LfoWaveform::Sine,
        lfo_depth_hz: 400.0,
    }
}

/// Square-wave cutoff hops, wah-gate territory.
pub fn gate_hop() -> HornPreset {
    HornPreset {
        name: "gate-hop".into(),
        description: Some("square LFO snaps the band between two centers".into()),
        pots: pot_positions(0.45, 0.35, 0.7, 0.4),
        mod_switch: true,
        lfo_waveform: LfoWaveform::Square,
        lfo_depth_hz: 250.0,
    }
}

/// Build a raw pot frame from normalized 0..1 positions.
fn pot_positions(base: f32, width: f32, q: f32, lfo_rate: f32) -> PotFrame {
    let mut pots = [RAW_MIN; POT_COUNT];
    for (slot, pos) in pots.iter_mut().zip([base, width, q, lfo_rate]) {
        *slot = RAW_MIN + pos.clamp(0.0, 1.0) * (RAW_MAX - RAW_MIN);
    }
    pots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control;

    #[test]
    fn factory_presets_map_inside_documented_ranges() {
        for preset in [telephone(), slow_sweep(), gate_hop()] {
            let params = preset.params();
            assert!(
                params.q >= control::Q_MIN && params.q <= control::Q_MAX,
                "{}: q {} out of range",
                preset.name,
                params.q
            );
            assert!(
                params.width_hz >= control::WIDTH_MIN_HZ
                    && params.width_hz <= control::WIDTH_MAX_HZ,
                "{}: width {} out of range",
                preset.name,
                params.width_hz
            );
            assert!(
                params.lfo_rate_hz >= control::LFO_RATE_MIN_HZ
                    && params.lfo_rate_hz <= control::LFO_RATE_MAX_HZ,
                "{}: lfo rate {} out of range",
                preset.name,
                params.lfo_rate_hz
            );
        }
    }

    #[test]
    fn apply_to_only_touches_modulation_fields() {
        let base = HornConfig::default();
        let config = slow_sweep().apply_to(base);

        assert_eq!(config.sample_rate, base.sample_rate);
        assert_eq!(config.channels, base.channels);
        assert_eq!(config.frames_per_control, base.frames_per_control);
        assert_eq!(config.lfo_depth_hz, 400.0);
    }

    #[test]
    fn control_input_holds_switch_state() {
        assert!(telephone().control_input().mod_switch);
    }
}
