//! Control-rate parameter mapping.
//!
//! Raw pot readings arrive from the host as scalars in a fixed range and are
//! remapped here into musically useful units before any coefficient math
//! runs. Mapping happens once per control tick, never per audio sample.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Mapping curves
==============

Two curves cover everything this effect needs:

  linear      A strict affine map from the raw pot range to a target range.
              Used for Q, band width, and LFO rate, where equal knob travel
              should feel like equal parameter travel.

  pitch       The base cutoff tracks the knob in pitch, not in Hz. The raw
              value maps linearly onto a pitch-index domain, then converts
              with the 12-tone equal-temperament formula. Equal knob travel
              is equal musical interval, so the low octaves get as much
              knob resolution as the high ones.

The pitch index here is a continuous note scale with 440 Hz at index 60.
Fractional indices are meaningful (the knob lands between semitones).
*/

/// Number of pot inputs the host hands over per control tick.
pub const POT_COUNT: usize = 4;

/// Pot assignments, in host reading order.
pub const POT_BASE: usize = 0;
pub const POT_WIDTH: usize = 1;
pub const POT_Q: usize = 2;
pub const POT_LFO_RATE: usize = 3;

/// One set of raw pot readings for a single control tick.
pub type PotFrame = [f32; POT_COUNT];

/// Raw pot reading range delivered by the host.
pub const RAW_MIN: f32 = 0.0001;
pub const RAW_MAX: f32 = 0.827;

/// Base-cutoff pitch-index domain (440 Hz lands at index 60).
pub const PITCH_MIN: f32 = 27.0;
pub const PITCH_MAX: f32 = 123.0;

/// Resonance range shared by both filters.
pub const Q_MIN: f32 = 0.6;
pub const Q_MAX: f32 = 5.0;

/// Band width range between the two cutoffs.
pub const WIDTH_MIN_HZ: f32 = 20.0;
pub const WIDTH_MAX_HZ: f32 = 3000.0;

/// LFO rate range mapped from the fourth pot.
pub const LFO_RATE_MIN_HZ: f32 = 0.1;
pub const LFO_RATE_MAX_HZ: f32 = 20.0;

/// Hard ceiling for the derived low-pass cutoff.
pub const LOWPASS_CEILING_HZ: f32 = 19_900.0;

/// Strict affine map from `[raw_min, raw_max]` to `[out_min, out_max]`.
///
/// No clamping: values outside the input range extrapolate. Callers are
/// responsible for sane raw bounds.
#[inline]
pub fn map_linear(raw: f32, raw_min: f32, raw_max: f32, out_min: f32, out_max: f32) -> f32 {
    out_min + (raw - raw_min) * (out_max - out_min) / (raw_max - raw_min)
}

/// Convert a pitch index to frequency: `440 · 2^((nn − 60) / 12)`.
///
/// Valid for any real input; fractional indices interpolate between
/// semitones. Callers constrain the index to [`PITCH_MIN`, `PITCH_MAX`].
#[inline]
pub fn note_to_hz(nn: f32) -> f32 {
    440.0 * 2.0_f32.powf((nn - 60.0) / 12.0)
}

/// Derive the low-pass cutoff from the base cutoff and band width.
///
/// The sum is clamped to [`LOWPASS_CEILING_HZ`] so the upper filter never
/// approaches Nyquist; the correction is silent.
#[inline]
pub fn lowpass_hz(base_hz: f32, width_hz: f32) -> f32 {
    (base_hz + width_hz).min(LOWPASS_CEILING_HZ)
}

/// The mapped parameter set for one control tick.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HornParams {
    /// High-pass cutoff before LFO modulation (Hz).
    pub base_hz: f32,
    /// Distance between the high-pass and low-pass cutoffs (Hz).
    pub width_hz: f32,
    /// Resonance shared by both filters.
    pub q: f32,
    /// Modulation rate for the cutoff LFO (Hz).
    pub lfo_rate_hz: f32,
}

impl HornParams {
    /// Map one frame of raw pot readings into parameter units.
    pub fn from_pots(pots: &PotFrame) -> Self {
        let pitch = map_linear(pots[POT_BASE], RAW_MIN, RAW_MAX, PITCH_MIN, PITCH_MAX);

        Self {
            base_hz: note_to_hz(pitch),
            width_hz: map_linear(pots[POT_WIDTH], RAW_MIN, RAW_MAX, WIDTH_MIN_HZ, WIDTH_MAX_HZ),
            q: map_linear(pots[POT_Q], RAW_MIN, RAW_MAX, Q_MIN, Q_MAX),
            lfo_rate_hz: map_linear(
                pots[POT_LFO_RATE],
                RAW_MIN,
                RAW_MAX,
                LFO_RATE_MIN_HZ,
                LFO_RATE_MAX_HZ,
            ),
        }
    }

    /// Derived low-pass cutoff for the unmodulated base.
    pub fn lowpass_hz(&self) -> f32 {
        lowpass_hz(self.base_hz, self.width_hz)
    }
}
