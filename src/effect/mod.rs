//! Block orchestrator: the two-filter signal path and its bypass switch.
//!
//! The host calls [`HornFilter::process_block`] once per audio block with the
//! control readings for that block and interleaved input/output frames. All
//! DSP state lives inside [`HornFilter`]; there are no globals and no locks,
//! the instance is owned by whichever thread renders audio.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::control::{self, HornParams};
use crate::dsp::{design, Biquad, Lfo, LfoWaveform};
use crate::io::ControlInput;

/*
Two execution rates
===================

  control rate    Once every `frames_per_control` audio frames: re-read the
                  pots, remap, advance the LFO one step, recompute both
                  coefficient sets, push them into the filters. The update
                  for a tick completes before any audio frame of that tick
                  is processed.

  audio rate      Every frame: each channel's sample runs through the
                  high-pass, then the low-pass, in series.

Both stereo channels share ONE pair of biquad sections, processed left then
right through the same delay lines. That is a deliberate simplification
carried over from the reference hardware behavior (the channels form a
single interleaved stream through one filter pair), not per-channel
filtering. Coefficients are mono anyway; only the histories are shared.

The bypass switch is sampled once per block. Off means every sample is
copied straight through and the whole DSP state is frozen in place, so
re-engaging the effect resumes from the prior coefficients, delay lines,
and LFO phase.
*/

/// Modulated cutoffs never leave this window, whatever the LFO does.
const CUTOFF_FLOOR_HZ: f32 = 20.0;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HornConfig {
    /// Audio sample rate in Hz. The mapped ranges assume 44.1 kHz or above.
    pub sample_rate: f32,
    /// Interleaved channel count of the host stream.
    pub channels: usize,
    /// Audio frames per control tick.
    pub frames_per_control: usize,
    /// Peak cutoff deviation contributed by the LFO, in Hz. Zero disables
    /// modulation without touching the LFO itself.
    pub lfo_depth_hz: f32,
    pub lfo_waveform: LfoWaveform,
}

impl Default for HornConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48_000.0,
            channels: 2,
            frames_per_control: 8,
            lfo_depth_hz: 100.0,
            lfo_waveform: LfoWaveform::Sine,
        }
    }
}

impl HornConfig {
    /// The rate at which control ticks occur, and so the LFO tick rate.
    pub fn control_rate(&self) -> f32 {
        self.sample_rate / self.frames_per_control as f32
    }
}

/// Which signal path a block takes. Decided once per block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Bypass,
    Filtering,
}

/// The complete effect: parameter mapping, coefficient updates, and the
/// series high-pass → low-pass signal path.
pub struct HornFilter {
    config: HornConfig,
    highpass: Biquad,
    lowpass: Biquad,
    lfo: Lfo,
    params: HornParams,
    mode: Mode,
}

impl HornFilter {
    pub fn new(config: HornConfig) -> Self {
        debug_assert!(config.channels > 0);
        debug_assert!(config.frames_per_control > 0);
        debug_assert!(config.sample_rate > 0.0);

        Self {
            highpass: Biquad::new(),
            lowpass: Biquad::new(),
            lfo: Lfo::new(config.control_rate()).with_waveform(config.lfo_waveform),
            params: HornParams::from_pots(&[control::RAW_MIN; control::POT_COUNT]),
            mode: Mode::Bypass,
            config,
        }
    }

    pub fn config(&self) -> &HornConfig {
        &self.config
    }

    /// The parameter set mapped at the most recent control tick.
    pub fn params(&self) -> HornParams {
        self.params
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Clear both delay lines, for stream restarts. Coefficients and LFO
    /// phase are kept; this is not part of the bypass path, which freezes
    /// state rather than clearing it.
    pub fn reset(&mut self) {
        self.highpass.reset();
        self.lowpass.reset();
    }

    /// Process one block of interleaved frames. Returns the indicator
    /// state for the block, which mirrors the switch.
    pub fn process_block(
        &mut self,
        controls: &ControlInput,
        input: &[f32],
        output: &mut [f32],
    ) -> bool {
        debug_assert_eq!(input.len(), output.len());
        debug_assert_eq!(input.len() % self.config.channels, 0);

        self.mode = if controls.mod_switch {
            Mode::Filtering
        } else {
            Mode::Bypass
        };

        match self.mode {
            Mode::Bypass => {
                output.copy_from_slice(input);
            }
            Mode::Filtering => {
                let channels = self.config.channels;
                let frames = input.len() / channels;

                for n in 0..frames {
                    if n % self.config.frames_per_control == 0 {
                        let tick = n / self.config.frames_per_control;
                        self.update_coefficients(controls.pot_frame(tick));
                    }

                    for ch in 0..channels {
                        let i = n * channels + ch;
                        let band = self.highpass.tick(input[i]);
                        output[i] = self.lowpass.tick(band);
                    }
                }
            }
        }

        controls.mod_switch
    }

    /// One control tick: remap, advance the LFO, recompute, push.
    fn update_coefficients(&mut self, pots: &control::PotFrame) {
        self.params = HornParams::from_pots(pots);
        self.lfo.set_rate(self.params.lfo_rate_hz);

        let wobble = self.lfo.next_sample() * self.config.lfo_depth_hz;
        let base_hz =
            (self.params.base_hz + wobble).clamp(CUTOFF_FLOOR_HZ, control::LOWPASS_CEILING_HZ);
        let lowpass_hz = control::lowpass_hz(base_hz, self.params.width_hz);

        self.highpass
            .set_coefficients(design::highpass(base_hz, self.params.q, self.config.sample_rate));
        self.lowpass
            .set_coefficients(design::lowpass(lowpass_hz, self.params.q, self.config.sample_rate));
    }

    #[cfg(test)]
    fn highpass_coefficients(&self) -> crate::dsp::BiquadCoeffs {
        self.highpass.coefficients()
    }
}
