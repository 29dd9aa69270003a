// Purpose - boundary types for the host collaborator

use crate::control::{PotFrame, POT_COUNT, RAW_MIN};

/// Control readings handed over by the host for one audio block.
///
/// `pots` holds one frame per control tick in the block. Hosts that sample
/// their controls at block rate (the common case) supply a single frame via
/// [`ControlInput::held`]; when a block spans more control ticks than frames
/// supplied, the last frame is held.
///
/// The switch is read once per block, never per sample. Mid-block toggles
/// take effect at the next block boundary.
#[derive(Debug, Clone)]
pub struct ControlInput {
    pub pots: Vec<PotFrame>,
    pub mod_switch: bool,
}

impl ControlInput {
    /// One reading held for the whole block.
    pub fn held(pots: PotFrame, mod_switch: bool) -> Self {
        Self {
            pots: vec![pots],
            mod_switch,
        }
    }

    /// The pot frame for a given control tick, holding the last frame when
    /// the host supplied fewer readings than the block has ticks.
    pub fn pot_frame(&self, tick: usize) -> &PotFrame {
        debug_assert!(!self.pots.is_empty(), "control input without pot frames");
        const RESTING: PotFrame = [RAW_MIN; POT_COUNT];
        self.pots
            .get(tick)
            .or_else(|| self.pots.last())
            .unwrap_or(&RESTING)
    }
}
