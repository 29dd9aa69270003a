use std::f32::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Resonant biquad designs (audio-EQ-cookbook style)
=================================================

Both designs share the same intermediate terms:

  omega = 2π · freq / sample_rate      cutoff as an angle per sample
  alpha = sin(omega) / (2 · Q)         bandwidth/resonance term

and the same denominator:

  a0 = 1 + alpha
  a1 = -2 · cos(omega)
  a2 = 1 - alpha

Only the numerators differ:

  low-pass    b0 = (1 - cos) / 2    b1 = 1 - cos      b2 = b0
  high-pass   b0 = (1 + cos) / 2    b1 = -(1 + cos)   b2 = b0

Everything is normalized by a0 on the way out, so the stored five-tuple
plugs straight into the difference equation with an implicit a0 of 1.

Preconditions: 0 < freq < sample_rate / 2 and Q > 0. Violating them yields
a degenerate or unstable filter. The control-rate mapper's ranges guarantee
them; they are asserted in debug builds only.
*/

/// A normalized biquad coefficient set (implicit a0 = 1).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiquadCoeffs {
    pub b0: f32,
    pub b1: f32,
    pub b2: f32,
    pub a1: f32,
    pub a2: f32,
}

impl BiquadCoeffs {
    /// Unity pass-through. Filters start here until the first control tick.
    pub fn identity() -> Self {
        Self {
            b0: 1.0,
            b1: 0.0,
            b2: 0.0,
            a1: 0.0,
            a2: 0.0,
        }
    }
}

/// Design a resonant second-order low-pass.
pub fn lowpass(freq_hz: f32, q: f32, sample_rate: f32) -> BiquadCoeffs {
    debug_assert!(freq_hz > 0.0 && freq_hz < sample_rate / 2.0);
    debug_assert!(q > 0.0);

    let omega = TAU * freq_hz / sample_rate;
    let cs = omega.cos();
    let alpha = omega.sin() / (2.0 * q);

    let a0 = 1.0 + alpha;
    BiquadCoeffs {
        b0: ((1.0 - cs) / 2.0) / a0,
        b1: (1.0 - cs) / a0,
        b2: ((1.0 - cs) / 2.0) / a0,
        a1: (-2.0 * cs) / a0,
        a2: (1.0 - alpha) / a0,
    }
}

/// Design a resonant second-order high-pass.
pub fn highpass(freq_hz: f32, q: f32, sample_rate: f32) -> BiquadCoeffs {
    debug_assert!(freq_hz > 0.0 && freq_hz < sample_rate / 2.0);
    debug_assert!(q > 0.0);

    let omega = TAU * freq_hz / sample_rate;
    let cs = omega.cos();
    let alpha = omega.sin() / (2.0 * q);

    let a0 = 1.0 + alpha;
    BiquadCoeffs {
        b0: ((1.0 + cs) / 2.0) / a0,
        b1: (-(1.0 + cs)) / a0,
        b2: ((1.0 + cs) / 2.0) / a0,
        a1: (-2.0 * cs) / a0,
        a2: (1.0 - alpha) / a0,
    }
}
