//! horn - audio stream setup and thread wiring

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::RingBuffer;

use horn_dsp::control::{HornParams, POT_COUNT, RAW_MIN};
use horn_dsp::effect::{HornConfig, HornFilter};
use horn_dsp::io::ControlInput;
use horn_dsp::preset::HornPreset;
use horn_dsp::MAX_BLOCK_SIZE;

use crate::ui::state::{ControlMessage, EffectSnapshot};
use crate::ui::UiApp;

/// Ring capacities. The vis ring holds a few blocks of mono samples; both
/// message rings are far larger than one UI frame can fill.
const CONTROL_RING: usize = 64;
const SNAPSHOT_RING: usize = 32;
const VIS_RING: usize = 8192;

/// Sawtooth test tone fed through the filter as the demo source.
const TEST_TONE_HZ: f32 = 110.0;
const TEST_TONE_LEVEL: f32 = 0.4;

/// Main application builder
pub struct App {
    preset: Option<HornPreset>,
}

impl App {
    pub fn new() -> Self {
        Self { preset: None }
    }

    /// Start from a saved preset instead of resting pots.
    pub fn preset(mut self, preset: HornPreset) -> Self {
        self.preset = Some(preset);
        self
    }

    /// Run the application (takes over the terminal, plays audio)
    pub fn run(self) -> EyreResult<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let stream_config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = stream_config.sample_rate().0 as f32;
        let channels = stream_config.channels() as usize;

        let (config, pots, engaged) = match &self.preset {
            Some(preset) => (
                preset.apply_to(HornConfig::default()),
                preset.pots,
                preset.mod_switch,
            ),
            None => (HornConfig::default(), [RAW_MIN; POT_COUNT], true),
        };
        let config = HornConfig {
            sample_rate,
            channels,
            ..config
        };

        // UI -> audio commands; audio -> UI telemetry and scope samples.
        let (control_tx, mut control_rx) = RingBuffer::<ControlMessage>::new(CONTROL_RING);
        let (mut snapshot_tx, snapshot_rx) = RingBuffer::<EffectSnapshot>::new(SNAPSHOT_RING);
        let (mut vis_tx, vis_rx) = RingBuffer::<f32>::new(VIS_RING);

        // Everything below is owned by the audio callback.
        let mut effect = HornFilter::new(config);
        let mut controls = ControlInput::held(pots, engaged);
        let mut tone_phase = 0.0f32;
        let tone_step = TEST_TONE_HZ / sample_rate;
        let mut input = vec![0.0f32; MAX_BLOCK_SIZE * channels];
        let mut output = vec![0.0f32; MAX_BLOCK_SIZE * channels];

        let stream = device.build_output_stream(
            &stream_config.into(),
            move |data: &mut [f32], _| {
                // Apply pending knob moves before this block's control ticks.
                while let Ok(message) = control_rx.pop() {
                    match message {
                        ControlMessage::SetPot(index, raw) => {
                            if index < POT_COUNT {
                                controls.pots[0][index] = raw;
                            }
                        }
                        ControlMessage::SetSwitch(on) => controls.mod_switch = on,
                    }
                }

                let total_frames = data.len() / channels;
                let mut frames_done = 0;

                while frames_done < total_frames {
                    let block = (total_frames - frames_done).min(MAX_BLOCK_SIZE);

                    let in_block = &mut input[..block * channels];
                    for n in 0..block {
                        let s = (2.0 * tone_phase - 1.0) * TEST_TONE_LEVEL;
                        tone_phase += tone_step;
                        tone_phase -= tone_phase.floor();
                        for ch in 0..channels {
                            in_block[n * channels + ch] = s;
                        }
                    }

                    let out_block = &mut output[..block * channels];
                    let indicator = effect.process_block(&controls, in_block, out_block);

                    let out_off = frames_done * channels;
                    data[out_off..out_off + block * channels].copy_from_slice(out_block);

                    // Left channel feeds the scope; drop samples when the UI
                    // falls behind.
                    for frame in out_block.chunks(channels) {
                        if vis_tx.push(frame[0]).is_err() {
                            break;
                        }
                    }

                    let _ = snapshot_tx.push(EffectSnapshot {
                        params: effect.params(),
                        pots: controls.pots[0],
                        indicator,
                    });

                    frames_done += block;
                }
            },
            |err| eprintln!("Audio error: {}", err),
            None,
        )?;

        stream.play()?;

        let initial = EffectSnapshot {
            params: HornParams::from_pots(&pots),
            pots,
            indicator: engaged,
        };

        let mut terminal = ratatui::init();
        let result = UiApp::new(vis_rx, snapshot_rx, control_tx, initial, sample_rate)
            .run(&mut terminal);
        ratatui::restore();

        drop(stream);
        result
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
