//! Low-level DSP primitives used by the effect orchestrator.
//!
//! These components are allocation-free and realtime-safe. They stay focused
//! on the signal-processing math; control mapping and block orchestration
//! live a level up.

/// Stateful direct-form-I second-order IIR section.
pub mod biquad;
/// Resonant high-pass / low-pass coefficient designs.
pub mod design;
/// Control-rate oscillator for cutoff modulation.
pub mod lfo;

pub use biquad::Biquad;
pub use design::BiquadCoeffs;
pub use lfo::{Lfo, LfoWaveform};
