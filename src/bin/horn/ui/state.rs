//! Shared state types for UI ↔ audio thread communication.
//!
//! Everything crossing a ring buffer is `Copy` and allocation-free; the
//! audio callback never touches the heap.

use horn_dsp::control::{HornParams, PotFrame};

/// Commands sent from the UI thread to the audio thread.
#[derive(Clone, Copy, Debug)]
pub enum ControlMessage {
    /// Move one pot to a new raw position.
    SetPot(usize, f32),
    /// Engage or bypass the effect.
    SetSwitch(bool),
}

/// Per-block telemetry published by the audio thread.
#[derive(Clone, Copy, Debug)]
pub struct EffectSnapshot {
    /// Parameters mapped at the most recent control tick.
    pub params: HornParams,
    /// Raw pot positions currently held on the audio side.
    pub pots: PotFrame,
    /// Indicator state for the block (mirrors the switch).
    pub indicator: bool,
}
