//! Low frequency oscillator for cutoff modulation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Control-rate LFO
================

This oscillator never touches the audio path. It is advanced once per
CONTROL tick, not once per audio sample, so it is constructed with the
control rate as its tick rate and `set_rate` stays accurate in wall-clock
terms:

  phase += rate_hz / tick_rate_hz        per next_sample call
  phase wraps modulo 1.0

Output is bipolar, [-1.0, +1.0]. A rate of zero freezes the phase and the
output becomes a constant (whatever the waveform reads at the held phase).

Phase continuity is an invariant: nothing here resets the phase, and the
orchestrator never does either. Toggling the effect in and out of bypass
resumes the sweep where it left off instead of restarting it.

  bipolar         Output swings positive AND negative: -1.0 to +1.0.
                  Natural for symmetric modulation (cutoff above AND
                  below the base frequency).

  unipolar        Output is only positive: 0.0 to 1.0.
                  Convert: unipolar = (bipolar + 1.0) / 2.0.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LfoWaveform {
    #[default]
    Sine,
    Triangle,
    Saw,
    Square,
}

pub struct Lfo {
    phase: f32, // in [0, 1)
    rate_hz: f32,
    tick_rate_hz: f32,
    waveform: LfoWaveform,
}

impl Lfo {
    /// `tick_rate_hz` is the rate at which the caller promises to invoke
    /// `next_sample` (here, the control rate).
    pub fn new(tick_rate_hz: f32) -> Self {
        Self {
            phase: 0.0,
            rate_hz: 0.0,
            tick_rate_hz,
            waveform: LfoWaveform::Sine,
        }
    }

    pub fn with_waveform(mut self, waveform: LfoWaveform) -> Self {
        self.waveform = waveform;
        self
    }

    /// Set the modulation frequency. Zero holds the current output.
    pub fn set_rate(&mut self, hz: f32) {
        self.rate_hz = hz;
    }

    pub fn rate(&self) -> f32 {
        self.rate_hz
    }

    pub fn waveform(&self) -> LfoWaveform {
        self.waveform
    }

    /// Read the waveform at the current phase, then advance.
    pub fn next_sample(&mut self) -> f32 {
        let value = self.value_at(self.phase);

        self.phase += self.rate_hz / self.tick_rate_hz;
        self.phase -= self.phase.floor();

        value
    }

    fn value_at(&self, phase: f32) -> f32 {
        match self.waveform {
            LfoWaveform::Sine => (std::f32::consts::TAU * phase).sin(),
            LfoWaveform::Triangle => 1.0 - 4.0 * (phase - 0.5).abs(),
            LfoWaveform::Saw => 2.0 * phase - 1.0,
            LfoWaveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
        }
    }
}

/// Convert a bipolar signal (-1.0 to +1.0) to unipolar (0.0 to 1.0).
#[inline]
pub fn bipolar_to_unipolar(bipolar: f32) -> f32 {
    (bipolar + 1.0) * 0.5
}

/// Convert a unipolar signal (0.0 to 1.0) to bipolar (-1.0 to +1.0).
#[inline]
pub fn unipolar_to_bipolar(unipolar: f32) -> f32 {
    (unipolar * 2.0) - 1.0
}
